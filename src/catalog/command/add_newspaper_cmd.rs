use serde::{Deserialize, Serialize};
use crate::catalog::domain::{CatalogService, NewspaperFields};
use crate::core::command::{Command, CommandError};
use crate::core::domain::Identifiable;
use crate::newspapers::dto::NewspaperDto;

pub(crate) struct AddNewspaperCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> AddNewspaperCommand<'a> {
    pub(crate) fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddNewspaperCommandRequest {
    #[serde(flatten)]
    pub(crate) fields: NewspaperFields,
}

impl AddNewspaperCommandRequest {
    pub fn new(fields: NewspaperFields) -> Self {
        Self {
            fields,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AddNewspaperCommandResponse {
    pub newspaper: NewspaperDto,
}

impl<'a> Command<AddNewspaperCommandRequest, AddNewspaperCommandResponse> for AddNewspaperCommand<'a> {
    fn execute(&mut self, req: AddNewspaperCommandRequest) -> Result<AddNewspaperCommandResponse, CommandError> {
        let newspaper = self.catalog_service.register_newspaper(&req.fields)?;
        let view = self.catalog_service.describe_newspaper(newspaper.id())?;
        Ok(AddNewspaperCommandResponse { newspaper: view })
    }
}
