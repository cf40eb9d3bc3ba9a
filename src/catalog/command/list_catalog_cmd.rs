use serde::{Deserialize, Serialize};
use crate::authors::dto::AuthorDto;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::categories::domain::model::CategoryEntity;
use crate::core::command::{Command, CommandError};
use crate::newspapers::dto::NewspaperDto;
use crate::publishers::dto::PublisherDto;

pub(crate) struct ListCatalogCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> ListCatalogCommand<'a> {
    pub(crate) fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListCatalogCommandRequest {}

#[derive(Debug, Serialize)]
pub(crate) struct ListCatalogCommandResponse {
    pub books: Vec<BookDto>,
    pub newspapers: Vec<NewspaperDto>,
    pub authors: Vec<AuthorDto>,
    pub publishers: Vec<PublisherDto>,
    pub categories: Vec<CategoryEntity>,
}

impl<'a> Command<ListCatalogCommandRequest, ListCatalogCommandResponse> for ListCatalogCommand<'a> {
    fn execute(&mut self, _req: ListCatalogCommandRequest) -> Result<ListCatalogCommandResponse, CommandError> {
        let overview = self.catalog_service.catalog_overview();
        let mut authors = vec![];
        for author in self.catalog_service.list_authors() {
            authors.push(self.catalog_service.describe_author(author.author_id)?);
        }
        let mut publishers = vec![];
        for publisher in self.catalog_service.list_publishers() {
            publishers.push(self.catalog_service.describe_publisher(publisher.publisher_id)?);
        }
        Ok(ListCatalogCommandResponse {
            books: overview.books,
            newspapers: overview.newspapers,
            authors,
            publishers,
            categories: self.catalog_service.list_categories(),
        })
    }
}
