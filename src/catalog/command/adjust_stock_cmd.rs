use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::{PublicationKind, StockDirection};

pub(crate) struct AdjustStockCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> AdjustStockCommand<'a> {
    pub(crate) fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

// kind is "book" or "newspaper", direction is "add" or "remove"
#[derive(Debug, Deserialize)]
pub(crate) struct AdjustStockCommandRequest {
    pub(crate) kind: String,
    pub(crate) id: i64,
    pub(crate) quantity: i64,
    pub(crate) direction: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct AdjustStockCommandResponse {
    pub kind: PublicationKind,
    pub id: i64,
    pub stock: i64,
}

impl<'a> Command<AdjustStockCommandRequest, AdjustStockCommandResponse> for AdjustStockCommand<'a> {
    fn execute(&mut self, req: AdjustStockCommandRequest) -> Result<AdjustStockCommandResponse, CommandError> {
        let kind = PublicationKind::from(req.kind);
        let direction = StockDirection::from(req.direction);
        let stock = self.catalog_service.adjust_stock(kind, req.id, req.quantity, direction)?;
        Ok(AdjustStockCommandResponse { kind, id: req.id, stock })
    }
}
