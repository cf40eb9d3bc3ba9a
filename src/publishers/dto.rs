use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::publishers::domain::model::PublisherEntity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublisherDto {
    pub publisher_id: i64,
    pub name: String,
    pub publications: Vec<String>,
}

impl PublisherDto {
    pub fn new(publisher: &PublisherEntity, publications: Vec<String>) -> Self {
        Self {
            publisher_id: publisher.publisher_id,
            name: publisher.name.to_string(),
            publications,
        }
    }
}

impl From<&PublisherEntity> for PublisherDto {
    fn from(other: &PublisherEntity) -> Self {
        PublisherDto::new(other, vec![])
    }
}

impl Display for PublisherDto {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ID: {}, Name: {}, Publications: {}", self.publisher_id, self.name, self.publications.len())
    }
}
