use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

// CategoryEntity is a genre label referenced by books (e.g. "Fiction")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryEntity {
    pub category_id: i64,
    pub name: String,
}

impl CategoryEntity {
    pub fn new(category_id: i64, name: &str) -> Self {
        Self {
            category_id,
            name: name.to_string(),
        }
    }
}

impl Identifiable for CategoryEntity {
    fn id(&self) -> i64 {
        self.category_id
    }
}

impl Display for CategoryEntity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ID: {}, Name: {}", self.category_id, self.name)
    }
}
