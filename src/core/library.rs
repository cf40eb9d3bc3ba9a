use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    DuplicateName {
        message: String,
    },
    DuplicateTitle {
        message: String,
    },
    DuplicateIsbn {
        message: String,
    },
    DuplicateTitleDate {
        message: String,
    },
    InvalidPrice {
        message: String,
    },
    InvalidStock {
        message: String,
    },
    InvalidPageCount {
        message: String,
    },
    EmptyIsbn {
        message: String,
    },
    InvalidIsbnFormat {
        message: String,
    },
    MissingAuthors {
        message: String,
    },
    InsufficientStock {
        message: String,
        available: i64,
        requested: i64,
    },
    InvalidQuantity {
        message: String,
    },
    NotFound {
        message: String,
    },
    // Reading or writing a collection file failed. The in-memory catalog stays
    // authoritative; the next successful save reconciles the files.
    Database {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
}

impl LibraryError {
    pub fn duplicate_name(message: &str) -> LibraryError {
        LibraryError::DuplicateName { message: message.to_string() }
    }

    pub fn duplicate_title(message: &str) -> LibraryError {
        LibraryError::DuplicateTitle { message: message.to_string() }
    }

    pub fn duplicate_isbn(message: &str) -> LibraryError {
        LibraryError::DuplicateIsbn { message: message.to_string() }
    }

    pub fn duplicate_title_date(message: &str) -> LibraryError {
        LibraryError::DuplicateTitleDate { message: message.to_string() }
    }

    pub fn invalid_price(message: &str) -> LibraryError {
        LibraryError::InvalidPrice { message: message.to_string() }
    }

    pub fn invalid_stock(message: &str) -> LibraryError {
        LibraryError::InvalidStock { message: message.to_string() }
    }

    pub fn invalid_page_count(message: &str) -> LibraryError {
        LibraryError::InvalidPageCount { message: message.to_string() }
    }

    pub fn empty_isbn(message: &str) -> LibraryError {
        LibraryError::EmptyIsbn { message: message.to_string() }
    }

    pub fn invalid_isbn_format(message: &str) -> LibraryError {
        LibraryError::InvalidIsbnFormat { message: message.to_string() }
    }

    pub fn missing_authors(message: &str) -> LibraryError {
        LibraryError::MissingAuthors { message: message.to_string() }
    }

    pub fn insufficient_stock(message: &str, available: i64, requested: i64) -> LibraryError {
        LibraryError::InsufficientStock { message: message.to_string(), available, requested }
    }

    pub fn invalid_quantity(message: &str) -> LibraryError {
        LibraryError::InvalidQuantity { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn database(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Database { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    // stable name of the failure, used by the line controller
    pub fn code(&self) -> &'static str {
        match self {
            LibraryError::DuplicateName { .. } => "DuplicateName",
            LibraryError::DuplicateTitle { .. } => "DuplicateTitle",
            LibraryError::DuplicateIsbn { .. } => "DuplicateIsbn",
            LibraryError::DuplicateTitleDate { .. } => "DuplicateTitleDate",
            LibraryError::InvalidPrice { .. } => "InvalidPrice",
            LibraryError::InvalidStock { .. } => "InvalidStock",
            LibraryError::InvalidPageCount { .. } => "InvalidPageCount",
            LibraryError::EmptyIsbn { .. } => "EmptyIsbn",
            LibraryError::InvalidIsbnFormat { .. } => "InvalidIsbnFormat",
            LibraryError::MissingAuthors { .. } => "MissingAuthors",
            LibraryError::InsufficientStock { .. } => "InsufficientStock",
            LibraryError::InvalidQuantity { .. } => "InvalidQuantity",
            LibraryError::NotFound { .. } => "NotFound",
            LibraryError::Database { .. } => "Database",
            LibraryError::Serialization { .. } => "Serialization",
        }
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self,
            LibraryError::DuplicateName { .. } |
            LibraryError::DuplicateTitle { .. } |
            LibraryError::DuplicateIsbn { .. } |
            LibraryError::DuplicateTitleDate { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self,
            LibraryError::InvalidPrice { .. } |
            LibraryError::InvalidStock { .. } |
            LibraryError::InvalidPageCount { .. } |
            LibraryError::EmptyIsbn { .. } |
            LibraryError::InvalidIsbnFormat { .. } |
            LibraryError::MissingAuthors { .. } |
            LibraryError::InsufficientStock { .. } |
            LibraryError::InvalidQuantity { .. })
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::database(
            format!("file io {:?}", err).as_str(), Some(format!("{:?}", err.kind())))
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::InsufficientStock { message, available, requested } => {
                write!(f, "{} (available {}, requested {})", message, available, requested)
            }
            LibraryError::Database { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::DuplicateName { message } |
            LibraryError::DuplicateTitle { message } |
            LibraryError::DuplicateIsbn { message } |
            LibraryError::DuplicateTitleDate { message } |
            LibraryError::InvalidPrice { message } |
            LibraryError::InvalidStock { message } |
            LibraryError::InvalidPageCount { message } |
            LibraryError::EmptyIsbn { message } |
            LibraryError::InvalidIsbnFormat { message } |
            LibraryError::MissingAuthors { message } |
            LibraryError::InvalidQuantity { message } |
            LibraryError::NotFound { message } |
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for catalog operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum PublicationKind {
    Book,
    Newspaper,
}

impl From<String> for PublicationKind {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "newspaper" => PublicationKind::Newspaper,
            _ => PublicationKind::Book,
        }
    }
}

impl Display for PublicationKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            PublicationKind::Book => write!(f, "Book"),
            PublicationKind::Newspaper => write!(f, "Newspaper"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum StockDirection {
    Add,
    Remove,
}

impl From<String> for StockDirection {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "remove" => StockDirection::Remove,
            _ => StockDirection::Add,
        }
    }
}

impl Display for StockDirection {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            StockDirection::Add => write!(f, "Add"),
            StockDirection::Remove => write!(f, "Remove"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{LibraryError, PublicationKind, StockDirection};

    #[test]
    fn test_should_create_duplicate_errors() {
        assert!(matches!(LibraryError::duplicate_name("test"), LibraryError::DuplicateName { message: _ }));
        assert!(matches!(LibraryError::duplicate_title("test"), LibraryError::DuplicateTitle { message: _ }));
        assert!(matches!(LibraryError::duplicate_isbn("test"), LibraryError::DuplicateIsbn { message: _ }));
        assert!(matches!(LibraryError::duplicate_title_date("test"), LibraryError::DuplicateTitleDate { message: _ }));
        assert!(LibraryError::duplicate_isbn("test").is_duplicate());
        assert!(!LibraryError::not_found("test").is_duplicate());
    }

    #[test]
    fn test_should_create_validation_errors() {
        assert!(LibraryError::invalid_price("test").is_validation());
        assert!(LibraryError::invalid_stock("test").is_validation());
        assert!(LibraryError::invalid_page_count("test").is_validation());
        assert!(LibraryError::empty_isbn("test").is_validation());
        assert!(LibraryError::invalid_isbn_format("test").is_validation());
        assert!(LibraryError::missing_authors("test").is_validation());
        assert!(LibraryError::invalid_quantity("test").is_validation());
        assert!(!LibraryError::database("test", None).is_validation());
    }

    #[test]
    fn test_should_report_codes() {
        assert_eq!("DuplicateName", LibraryError::duplicate_name("x").code());
        assert_eq!("InsufficientStock", LibraryError::insufficient_stock("x", 1, 2).code());
        assert_eq!("NotFound", LibraryError::not_found("x").code());
        assert_eq!("Serialization", LibraryError::serialization("x").code());
    }

    #[test]
    fn test_should_format_insufficient_stock() {
        let err = LibraryError::insufficient_stock("not enough copies", 2, 5);
        assert_eq!("not enough copies (available 2, requested 5)", err.to_string());
    }

    #[test]
    fn test_should_convert_io_error() {
        let err = LibraryError::from(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"));
        assert!(matches!(err, LibraryError::Database { message: _, reason_code: Some(_) }));
    }

    #[test]
    fn test_should_format_kinds() {
        for kind in [PublicationKind::Book, PublicationKind::Newspaper] {
            assert_eq!(kind, PublicationKind::from(kind.to_string()));
        }
        for direction in [StockDirection::Add, StockDirection::Remove] {
            assert_eq!(direction, StockDirection::from(direction.to_string()));
        }
    }
}
