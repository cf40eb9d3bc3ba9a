use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::domain::Identifiable;
use crate::newspapers::dto::NewspaperDto;
use crate::utils::date::parse_display;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum NewspaperSearchField {
    Title,
    Date,
}

pub(crate) struct SearchNewspapersCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> SearchNewspapersCommand<'a> {
    pub(crate) fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

// `term` is a DD/MM/YYYY date when searching by date
#[derive(Debug, Deserialize)]
pub(crate) struct SearchNewspapersCommandRequest {
    pub(crate) by: NewspaperSearchField,
    pub(crate) term: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct SearchNewspapersCommandResponse {
    pub newspapers: Vec<NewspaperDto>,
}

impl<'a> Command<SearchNewspapersCommandRequest, SearchNewspapersCommandResponse> for SearchNewspapersCommand<'a> {
    fn execute(&mut self, req: SearchNewspapersCommandRequest) -> Result<SearchNewspapersCommandResponse, CommandError> {
        let found = match req.by {
            NewspaperSearchField::Title => self.catalog_service.search_newspapers_by_title(req.term.as_str()),
            NewspaperSearchField::Date => {
                let date = parse_display(req.term.as_str())?;
                self.catalog_service.search_newspapers_by_date(date)
            }
        };
        let mut newspapers = vec![];
        for newspaper in found {
            newspapers.push(self.catalog_service.describe_newspaper(newspaper.id())?);
        }
        Ok(SearchNewspapersCommandResponse { newspapers })
    }
}
