use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::categories::domain::model::CategoryEntity;
use crate::core::command::{Command, CommandError};

pub(crate) struct AddCategoryCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> AddCategoryCommand<'a> {
    pub(crate) fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddCategoryCommandRequest {
    pub(crate) name: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct AddCategoryCommandResponse {
    pub category: CategoryEntity,
}

impl<'a> Command<AddCategoryCommandRequest, AddCategoryCommandResponse> for AddCategoryCommand<'a> {
    fn execute(&mut self, req: AddCategoryCommandRequest) -> Result<AddCategoryCommandResponse, CommandError> {
        self.catalog_service.register_category(req.name.as_str())
            .map_err(CommandError::from)
            .map(|category| AddCategoryCommandResponse { category })
    }
}
