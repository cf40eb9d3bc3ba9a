use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::newspapers::dto::NewspaperDto;

pub(crate) struct GetNewspaperCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> GetNewspaperCommand<'a> {
    pub(crate) fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetNewspaperCommandRequest {
    pub(crate) newspaper_id: i64,
}

#[derive(Debug, Serialize)]
pub(crate) struct GetNewspaperCommandResponse {
    pub newspaper: NewspaperDto,
}

impl<'a> Command<GetNewspaperCommandRequest, GetNewspaperCommandResponse> for GetNewspaperCommand<'a> {
    fn execute(&mut self, req: GetNewspaperCommandRequest) -> Result<GetNewspaperCommandResponse, CommandError> {
        self.catalog_service.describe_newspaper(req.newspaper_id)
            .map_err(CommandError::from)
            .map(|newspaper| GetNewspaperCommandResponse { newspaper })
    }
}
