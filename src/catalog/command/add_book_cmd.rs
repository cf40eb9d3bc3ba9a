use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::{BookFields, CatalogService};
use crate::core::command::{Command, CommandError};
use crate::core::domain::Identifiable;

pub(crate) struct AddBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> AddBookCommand<'a> {
    pub(crate) fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddBookCommandRequest {
    #[serde(flatten)]
    pub(crate) fields: BookFields,
}

impl AddBookCommandRequest {
    pub fn new(fields: BookFields) -> Self {
        Self {
            fields,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl<'a> Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand<'a> {
    fn execute(&mut self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = self.catalog_service.register_book(&req.fields)?;
        let view = self.catalog_service.describe_book(book.id())?;
        Ok(AddBookCommandResponse::new(view))
    }
}
