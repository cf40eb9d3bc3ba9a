use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::publishers::dto::PublisherDto;

pub(crate) struct AddPublisherCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> AddPublisherCommand<'a> {
    pub(crate) fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddPublisherCommandRequest {
    pub(crate) name: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct AddPublisherCommandResponse {
    pub publisher: PublisherDto,
}

impl<'a> Command<AddPublisherCommandRequest, AddPublisherCommandResponse> for AddPublisherCommand<'a> {
    fn execute(&mut self, req: AddPublisherCommandRequest) -> Result<AddPublisherCommandResponse, CommandError> {
        self.catalog_service.register_publisher(req.name.as_str())
            .map_err(CommandError::from)
            .map(|p| AddPublisherCommandResponse { publisher: PublisherDto::from(&p) })
    }
}
