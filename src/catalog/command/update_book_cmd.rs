use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::{BookFields, CatalogService};
use crate::core::command::{Command, CommandError};

pub(crate) struct UpdateBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> UpdateBookCommand<'a> {
    pub(crate) fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateBookCommandRequest {
    pub(crate) book_id: i64,
    #[serde(flatten)]
    pub(crate) fields: BookFields,
}

impl UpdateBookCommandRequest {
    pub fn new(book_id: i64, fields: BookFields) -> Self {
        Self {
            book_id,
            fields,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateBookCommandResponse {
    pub book: BookDto,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl<'a> Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand<'a> {
    fn execute(&mut self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        self.catalog_service.edit_book(req.book_id, &req.fields)?;
        let view = self.catalog_service.describe_book(req.book_id)?;
        Ok(UpdateBookCommandResponse::new(view))
    }
}
