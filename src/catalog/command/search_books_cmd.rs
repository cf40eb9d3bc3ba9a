use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::domain::Identifiable;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum BookSearchField {
    Title,
    Author,
    Category,
}

pub(crate) struct SearchBooksCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> SearchBooksCommand<'a> {
    pub(crate) fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchBooksCommandRequest {
    pub(crate) by: BookSearchField,
    pub(crate) term: String,
}

impl SearchBooksCommandRequest {
    pub fn new(by: BookSearchField, term: &str) -> Self {
        Self {
            by,
            term: term.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct SearchBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl<'a> Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand<'a> {
    fn execute(&mut self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        let term = req.term.as_str();
        let found = match req.by {
            BookSearchField::Title => self.catalog_service.search_books_by_title(term),
            BookSearchField::Author => self.catalog_service.search_books_by_author(term),
            BookSearchField::Category => self.catalog_service.search_books_by_category(term),
        };
        let mut books = vec![];
        for book in found {
            books.push(self.catalog_service.describe_book(book.id())?);
        }
        Ok(SearchBooksCommandResponse { books })
    }
}
