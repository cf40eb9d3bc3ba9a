use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::authors::dto::AuthorDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::utils::date::display;

pub(crate) struct AddAuthorCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> AddAuthorCommand<'a> {
    pub(crate) fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddAuthorCommandRequest {
    pub(crate) name: String,
    pub(crate) nationality: String,
    #[serde(with = "display")]
    pub(crate) birth_date: NaiveDate,
}

#[derive(Debug, Serialize)]
pub(crate) struct AddAuthorCommandResponse {
    pub author: AuthorDto,
}

impl<'a> Command<AddAuthorCommandRequest, AddAuthorCommandResponse> for AddAuthorCommand<'a> {
    fn execute(&mut self, req: AddAuthorCommandRequest) -> Result<AddAuthorCommandResponse, CommandError> {
        let author = self.catalog_service.register_author(
            req.name.as_str(), req.nationality.as_str(), req.birth_date)?;
        Ok(AddAuthorCommandResponse { author: AuthorDto::from(&author) })
    }
}
