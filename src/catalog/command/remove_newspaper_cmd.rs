use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::domain::Identifiable;
use crate::publications::domain::Publication;

pub(crate) struct RemoveNewspaperCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> RemoveNewspaperCommand<'a> {
    pub(crate) fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoveNewspaperCommandRequest {
    pub(crate) newspaper_id: i64,
}

#[derive(Debug, Serialize)]
pub(crate) struct RemoveNewspaperCommandResponse {
    pub newspaper_id: i64,
    pub title: String,
}

impl<'a> Command<RemoveNewspaperCommandRequest, RemoveNewspaperCommandResponse> for RemoveNewspaperCommand<'a> {
    fn execute(&mut self, req: RemoveNewspaperCommandRequest) -> Result<RemoveNewspaperCommandResponse, CommandError> {
        let newspaper = self.catalog_service.delete_newspaper(req.newspaper_id)?;
        Ok(RemoveNewspaperCommandResponse { newspaper_id: newspaper.id(), title: newspaper.title().to_string() })
    }
}
