use serde::{Deserialize, Serialize};
use crate::catalog::domain::{CatalogService, NewspaperFields};
use crate::core::command::{Command, CommandError};
use crate::newspapers::dto::NewspaperDto;

pub(crate) struct UpdateNewspaperCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> UpdateNewspaperCommand<'a> {
    pub(crate) fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateNewspaperCommandRequest {
    pub(crate) newspaper_id: i64,
    #[serde(flatten)]
    pub(crate) fields: NewspaperFields,
}

impl UpdateNewspaperCommandRequest {
    pub fn new(newspaper_id: i64, fields: NewspaperFields) -> Self {
        Self {
            newspaper_id,
            fields,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateNewspaperCommandResponse {
    pub newspaper: NewspaperDto,
}

impl<'a> Command<UpdateNewspaperCommandRequest, UpdateNewspaperCommandResponse> for UpdateNewspaperCommand<'a> {
    fn execute(&mut self, req: UpdateNewspaperCommandRequest) -> Result<UpdateNewspaperCommandResponse, CommandError> {
        self.catalog_service.edit_newspaper(req.newspaper_id, &req.fields)?;
        let view = self.catalog_service.describe_newspaper(req.newspaper_id)?;
        Ok(UpdateNewspaperCommandResponse { newspaper: view })
    }
}
