use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable {
    fn id(&self) -> i64;
}

// Configuration abstracts config options for the catalog
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub data_dir: String,
    pub min_book_price: f64,
    pub min_newspaper_price: f64,
    pub min_book_pages: i64,
}

impl Configuration {
    pub fn new(data_dir: &str) -> Self {
        Configuration {
            data_dir: data_dir.to_string(),
            min_book_price: 15.00,
            min_newspaper_price: 3.00,
            min_book_pages: 10,
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new("data")
    }
}
