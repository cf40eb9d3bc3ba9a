use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::PublicationKind;
use crate::publications::domain::model::PublicationEntity;
use crate::publications::domain::Publication;
use crate::utils::date::serializer;

// NewspaperEntity is a dated issue; (title, published_on) identifies an issue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewspaperEntity {
    #[serde(flatten)]
    pub publication: PublicationEntity,
    #[serde(with = "serializer")]
    pub published_on: NaiveDate,
}

impl NewspaperEntity {
    pub fn new(publication: PublicationEntity, published_on: NaiveDate) -> Self {
        Self {
            publication,
            published_on,
        }
    }

    pub fn is_issue(&self, title: &str, published_on: NaiveDate) -> bool {
        self.published_on == published_on && self.publication.title.to_lowercase() == title.to_lowercase()
    }
}

impl Identifiable for NewspaperEntity {
    fn id(&self) -> i64 {
        self.publication.publication_id
    }
}

impl Publication for NewspaperEntity {
    fn publication(&self) -> &PublicationEntity {
        &self.publication
    }

    fn publication_mut(&mut self) -> &mut PublicationEntity {
        &mut self.publication
    }

    fn kind(&self) -> PublicationKind {
        PublicationKind::Newspaper
    }
}
