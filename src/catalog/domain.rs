pub mod rules;
pub mod service;
pub mod store;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::authors::domain::model::AuthorEntity;
use crate::authors::dto::AuthorDto;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::categories::domain::model::CategoryEntity;
use crate::core::library::{LibraryResult, PublicationKind, StockDirection};
use crate::newspapers::domain::model::NewspaperEntity;
use crate::newspapers::dto::NewspaperDto;
use crate::publishers::domain::model::PublisherEntity;
use crate::publishers::dto::PublisherDto;
use crate::utils::date::display;

/// Input for registering or editing a book. Publisher, authors and category
/// are referenced by id and must already exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookFields {
    pub title: String,
    pub price: f64,
    pub stock: i64,
    pub publisher_id: i64,
    pub page_count: i64,
    pub isbn: String,
    pub author_ids: Vec<i64>,
    pub category_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewspaperFields {
    pub title: String,
    pub price: f64,
    pub stock: i64,
    pub publisher_id: i64,
    #[serde(with = "display")]
    pub published_on: NaiveDate,
}

// CatalogOverview is the complete catalog listing, books first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogOverview {
    pub books: Vec<BookDto>,
    pub newspapers: Vec<NewspaperDto>,
}

/// CatalogService owns the five collections and is the only way to change
/// them. Every mutation validates first and either applies fully or leaves
/// the catalog untouched, then persists all collections.
pub trait CatalogService {
    fn register_author(&mut self, name: &str, nationality: &str, birth_date: NaiveDate) -> LibraryResult<AuthorEntity>;
    fn register_publisher(&mut self, name: &str) -> LibraryResult<PublisherEntity>;
    fn register_category(&mut self, name: &str) -> LibraryResult<CategoryEntity>;
    fn register_book(&mut self, fields: &BookFields) -> LibraryResult<BookEntity>;
    fn register_newspaper(&mut self, fields: &NewspaperFields) -> LibraryResult<NewspaperEntity>;

    fn edit_book(&mut self, id: i64, fields: &BookFields) -> LibraryResult<BookEntity>;
    fn edit_newspaper(&mut self, id: i64, fields: &NewspaperFields) -> LibraryResult<NewspaperEntity>;

    fn delete_book(&mut self, id: i64) -> LibraryResult<BookEntity>;
    fn delete_newspaper(&mut self, id: i64) -> LibraryResult<NewspaperEntity>;

    fn find_book_by_id(&self, id: i64) -> LibraryResult<BookEntity>;
    fn find_newspaper_by_id(&self, id: i64) -> LibraryResult<NewspaperEntity>;
    fn find_author_by_id(&self, id: i64) -> LibraryResult<AuthorEntity>;
    fn find_publisher_by_id(&self, id: i64) -> LibraryResult<PublisherEntity>;
    fn find_category_by_id(&self, id: i64) -> LibraryResult<CategoryEntity>;

    fn search_books_by_title(&self, term: &str) -> Vec<BookEntity>;
    fn search_books_by_author(&self, term: &str) -> Vec<BookEntity>;
    fn search_books_by_category(&self, term: &str) -> Vec<BookEntity>;
    fn search_newspapers_by_title(&self, term: &str) -> Vec<NewspaperEntity>;
    fn search_newspapers_by_date(&self, date: NaiveDate) -> Vec<NewspaperEntity>;

    /// Returns the stock after the change.
    fn adjust_stock(&mut self, kind: PublicationKind, id: i64, quantity: i64, direction: StockDirection) -> LibraryResult<i64>;

    fn list_authors(&self) -> Vec<AuthorEntity>;
    fn list_publishers(&self) -> Vec<PublisherEntity>;
    fn list_categories(&self) -> Vec<CategoryEntity>;
    fn list_books(&self) -> Vec<BookEntity>;
    fn list_newspapers(&self) -> Vec<NewspaperEntity>;

    fn exists_author_named(&self, name: &str) -> bool;
    fn exists_publisher_named(&self, name: &str) -> bool;
    fn exists_category_named(&self, name: &str) -> bool;
    fn exists_book_titled(&self, title: &str) -> bool;
    fn exists_book_with_isbn(&self, isbn: &str) -> bool;
    fn exists_newspaper(&self, title: &str, published_on: NaiveDate) -> bool;

    fn describe_book(&self, id: i64) -> LibraryResult<BookDto>;
    fn describe_newspaper(&self, id: i64) -> LibraryResult<NewspaperDto>;
    fn describe_author(&self, id: i64) -> LibraryResult<AuthorDto>;
    fn describe_publisher(&self, id: i64) -> LibraryResult<PublisherDto>;
    fn catalog_overview(&self) -> CatalogOverview;

    /// Persists every collection and reports the first failure.
    fn save_all(&mut self) -> LibraryResult<()>;
}
