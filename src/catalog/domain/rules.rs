use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};

// digit count of each dash separated ISBN group: DDD-DD-DDD-DDDD-D
const ISBN_GROUPS: [usize; 5] = [3, 2, 3, 4, 1];

pub fn is_valid_isbn(isbn: &str) -> bool {
    let groups: Vec<&str> = isbn.split('-').collect();
    groups.len() == ISBN_GROUPS.len() && groups.iter().zip(ISBN_GROUPS.iter())
        .all(|(group, len)| group.len() == *len && group.bytes().all(|b| b.is_ascii_digit()))
}

pub(crate) fn same_text(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

pub(crate) fn contains_text(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle.to_lowercase().as_str())
}

pub(crate) fn validate_price(price: f64, minimum: f64, what: &str) -> LibraryResult<()> {
    // NaN fails the comparison; infinity would be written to disk as null
    if !price.is_finite() || !(price >= minimum) {
        return Err(LibraryError::invalid_price(
            format!("{} price must be at least {:.2}, got {}", what, minimum, price).as_str()));
    }
    Ok(())
}

pub(crate) fn validate_stock(stock: i64, what: &str) -> LibraryResult<()> {
    if stock < 0 {
        return Err(LibraryError::invalid_stock(
            format!("{} stock cannot be negative, got {}", what, stock).as_str()));
    }
    Ok(())
}

/// Field checks for a book, in the order failures are reported. Returns the
/// trimmed ISBN that gets stored.
pub(crate) fn validate_book_fields(config: &Configuration, price: f64, stock: i64, page_count: i64,
                                   isbn: &str, author_ids: &[i64]) -> LibraryResult<String> {
    validate_price(price, config.min_book_price, "book")?;
    validate_stock(stock, "book")?;
    if page_count < config.min_book_pages {
        return Err(LibraryError::invalid_page_count(
            format!("book must have at least {} pages, got {}", config.min_book_pages, page_count).as_str()));
    }
    let isbn = isbn.trim();
    if isbn.is_empty() {
        return Err(LibraryError::empty_isbn("book ISBN cannot be empty"));
    }
    if !is_valid_isbn(isbn) {
        return Err(LibraryError::invalid_isbn_format(
            format!("invalid ISBN format {:?}, use XXX-XX-XXX-XXXX-X", isbn).as_str()));
    }
    if author_ids.is_empty() {
        return Err(LibraryError::missing_authors("book needs at least one author"));
    }
    Ok(isbn.to_string())
}

pub(crate) fn validate_newspaper_fields(config: &Configuration, price: f64, stock: i64) -> LibraryResult<()> {
    validate_price(price, config.min_newspaper_price, "newspaper")?;
    validate_stock(stock, "newspaper")
}
