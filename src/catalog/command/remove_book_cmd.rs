use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::domain::Identifiable;
use crate::publications::domain::Publication;

pub(crate) struct RemoveBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> RemoveBookCommand<'a> {
    pub(crate) fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoveBookCommandRequest {
    pub(crate) book_id: i64,
}

impl RemoveBookCommandRequest {
    pub fn new(book_id: i64) -> Self {
        Self {
            book_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RemoveBookCommandResponse {
    pub book_id: i64,
    pub title: String,
}

impl RemoveBookCommandResponse {
    pub fn new(book_id: i64, title: &str) -> Self {
        Self {
            book_id,
            title: title.to_string(),
        }
    }
}

impl<'a> Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand<'a> {
    fn execute(&mut self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        self.catalog_service.delete_book(req.book_id)
            .map_err(CommandError::from).map(|b| RemoveBookCommandResponse::new(b.id(), b.title()))
    }
}
