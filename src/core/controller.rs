use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppState {
    pub config: Configuration,
    pub store: RepositoryStore,
}

impl AppState {
    pub fn new(data_dir: &str, store: RepositoryStore) -> AppState {
        AppState {
            config: Configuration::new(data_dir),
            store,
        }
    }
}

// ErrorReply is the failure half of a reply line
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ErrorReply {
    pub code: String,
    pub message: String,
}

impl ErrorReply {
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Reply {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorReply>,
}

pub type ServerError = ErrorReply;

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    ErrorReply::new("Serialization", format!("{}", err).as_str())
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        ErrorReply::new(err.code(), err.message().as_str())
    }
}

pub(crate) fn reply_ok<T: Serialize>(data: &T) -> Result<Reply, ServerError> {
    let value = serde_json::to_value(data).map_err(json_to_server_error)?;
    Ok(Reply { ok: true, data: Some(value), error: None })
}

pub(crate) fn reply_err(err: ServerError) -> Reply {
    Reply { ok: false, data: None, error: Some(err) }
}

pub(crate) fn render(reply: &Reply) -> String {
    serde_json::to_string(reply).unwrap_or_else(|err|
        format!(r#"{{"ok":false,"error":{{"code":"Serialization","message":{:?}}}}}"#, err.to_string()))
}
