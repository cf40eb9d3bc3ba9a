use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};
use crate::catalog::command::add_author_cmd::AddAuthorCommand;
use crate::catalog::command::add_book_cmd::AddBookCommand;
use crate::catalog::command::add_category_cmd::AddCategoryCommand;
use crate::catalog::command::add_newspaper_cmd::AddNewspaperCommand;
use crate::catalog::command::add_publisher_cmd::AddPublisherCommand;
use crate::catalog::command::adjust_stock_cmd::AdjustStockCommand;
use crate::catalog::command::get_book_cmd::GetBookCommand;
use crate::catalog::command::get_newspaper_cmd::GetNewspaperCommand;
use crate::catalog::command::list_catalog_cmd::ListCatalogCommand;
use crate::catalog::command::remove_book_cmd::RemoveBookCommand;
use crate::catalog::command::remove_newspaper_cmd::RemoveNewspaperCommand;
use crate::catalog::command::search_books_cmd::SearchBooksCommand;
use crate::catalog::command::search_newspapers_cmd::SearchNewspapersCommand;
use crate::catalog::command::update_book_cmd::UpdateBookCommand;
use crate::catalog::command::update_newspaper_cmd::UpdateNewspaperCommand;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::controller::{json_to_server_error, render, reply_err, reply_ok, ErrorReply, Reply, ServerError};

pub const EXIT_COMMAND: &str = "exit";

#[derive(Debug, Deserialize)]
struct RequestLine {
    command: String,
    #[serde(default)]
    body: Option<Value>,
}

fn run<Req, Res, Cmd>(mut cmd: Cmd, body: Value) -> Result<Reply, ServerError>
    where Req: DeserializeOwned, Res: serde::Serialize, Cmd: Command<Req, Res> {
    let req: Req = serde_json::from_value(body).map_err(json_to_server_error)?;
    let res = cmd.execute(req)?;
    reply_ok(&res)
}

fn dispatch(svc: &mut dyn CatalogService, command: &str, body: Value) -> Result<Reply, ServerError> {
    match command {
        "add_author" => run(AddAuthorCommand::new(svc), body),
        "add_publisher" => run(AddPublisherCommand::new(svc), body),
        "add_category" => run(AddCategoryCommand::new(svc), body),
        "add_book" => run(AddBookCommand::new(svc), body),
        "get_book" => run(GetBookCommand::new(svc), body),
        "update_book" => run(UpdateBookCommand::new(svc), body),
        "remove_book" => run(RemoveBookCommand::new(svc), body),
        "search_books" => run(SearchBooksCommand::new(svc), body),
        "add_newspaper" => run(AddNewspaperCommand::new(svc), body),
        "get_newspaper" => run(GetNewspaperCommand::new(svc), body),
        "update_newspaper" => run(UpdateNewspaperCommand::new(svc), body),
        "remove_newspaper" => run(RemoveNewspaperCommand::new(svc), body),
        "search_newspapers" => run(SearchNewspapersCommand::new(svc), body),
        "adjust_stock" => run(AdjustStockCommand::new(svc), body),
        "list_catalog" => run(ListCatalogCommand::new(svc), body),
        "save" => {
            svc.save_all().map_err(CommandError::from)?;
            reply_ok(&Value::Null)
        }
        other => Err(ErrorReply::new("UnknownCommand", format!("unknown command {:?}", other).as_str())),
    }
}

/// Runs one request line against the catalog and renders the reply line.
/// Returns `None` for the exit command.
pub fn handle(svc: &mut dyn CatalogService, line: &str) -> Option<String> {
    let request: RequestLine = match serde_json::from_str(line) {
        Ok(request) => request,
        Err(err) => return Some(render(&reply_err(json_to_server_error(err)))),
    };
    if request.command == EXIT_COMMAND {
        return None;
    }
    let body = request.body.unwrap_or_else(|| Value::Object(Default::default()));
    debug!(command = request.command.as_str(), "handling request");
    let reply = match dispatch(svc, request.command.as_str(), body) {
        Ok(reply) => reply,
        Err(err) => {
            warn!(command = request.command.as_str(), code = err.code.as_str(), message = err.message.as_str(), "request failed");
            reply_err(err)
        }
    };
    Some(render(&reply))
}
