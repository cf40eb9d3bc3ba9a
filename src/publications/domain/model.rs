use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};

// PublicationEntity holds the fields shared by books and newspapers. Its id is
// drawn from the single publication sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicationEntity {
    pub publication_id: i64,
    pub title: String,
    pub price: f64,
    pub stock: i64,
    pub publisher_id: i64,
}

impl PublicationEntity {
    pub fn new(publication_id: i64, title: &str, price: f64, stock: i64, publisher_id: i64) -> Self {
        Self {
            publication_id,
            title: title.to_string(),
            price,
            stock,
            publisher_id,
        }
    }

    /// Adds `quantity` units and returns the new stock.
    pub fn add_stock(&mut self, quantity: i64) -> LibraryResult<i64> {
        if quantity <= 0 {
            return Err(LibraryError::invalid_quantity(
                format!("quantity to add must be greater than zero, got {}", quantity).as_str()));
        }
        self.stock = self.stock.checked_add(quantity).ok_or_else(|| LibraryError::invalid_quantity(
            format!("adding {} to stock {} of '{}' overflows", quantity, self.stock, self.title).as_str()))?;
        Ok(self.stock)
    }

    /// Removes `quantity` units and returns the new stock. Stock is left
    /// untouched when the quantity is invalid or exceeds what is available.
    pub fn remove_stock(&mut self, quantity: i64) -> LibraryResult<i64> {
        if quantity <= 0 {
            return Err(LibraryError::invalid_quantity(
                format!("quantity to remove must be greater than zero, got {}", quantity).as_str()));
        }
        if quantity > self.stock {
            return Err(LibraryError::insufficient_stock(
                format!("insufficient stock for '{}'", self.title).as_str(), self.stock, quantity));
        }
        self.stock -= quantity;
        Ok(self.stock)
    }
}
