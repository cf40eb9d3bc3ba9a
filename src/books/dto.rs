use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;

// BookDto is a book with its publisher, authors and category resolved to names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub book_id: i64,
    pub title: String,
    pub price: f64,
    pub stock: i64,
    pub publisher: Option<String>,
    pub page_count: i64,
    pub isbn: String,
    pub authors: Vec<String>,
    pub category: Option<String>,
}

impl BookDto {
    pub fn new(book: &BookEntity, publisher: Option<String>, authors: Vec<String>, category: Option<String>) -> Self {
        Self {
            book_id: book.publication.publication_id,
            title: book.publication.title.to_string(),
            price: book.publication.price,
            stock: book.publication.stock,
            publisher,
            page_count: book.page_count,
            isbn: book.isbn.to_string(),
            authors,
            category,
        }
    }
}

impl Display for BookDto {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let authors = if self.authors.is_empty() { "N/A".to_string() } else { self.authors.join(", ") };
        writeln!(f, "--- Book ---")?;
        writeln!(f, "ID: {}", self.book_id)?;
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Price: {:.2}", self.price)?;
        writeln!(f, "Stock: {}", self.stock)?;
        writeln!(f, "Author(s): {}", authors)?;
        writeln!(f, "Publisher: {}", self.publisher.as_deref().unwrap_or("N/A"))?;
        writeln!(f, "Category: {}", self.category.as_deref().unwrap_or("N/A"))?;
        writeln!(f, "ISBN: {}", self.isbn)?;
        writeln!(f, "Pages: {}", self.page_count)?;
        write!(f, "--------------------")
    }
}
