use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

// PublisherEntity publishes books and newspapers. Publications point at their
// publisher; the reverse list is derived by the catalog service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublisherEntity {
    pub publisher_id: i64,
    pub name: String,
}

impl PublisherEntity {
    pub fn new(publisher_id: i64, name: &str) -> Self {
        Self {
            publisher_id,
            name: name.to_string(),
        }
    }
}

impl Identifiable for PublisherEntity {
    fn id(&self) -> i64 {
        self.publisher_id
    }
}

impl Display for PublisherEntity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ID: {}, Name: {}", self.publisher_id, self.name)
    }
}
