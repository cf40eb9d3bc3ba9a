use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::newspapers::domain::model::NewspaperEntity;
use crate::utils::date::{display, format_display};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewspaperDto {
    pub newspaper_id: i64,
    pub title: String,
    pub price: f64,
    pub stock: i64,
    pub publisher: Option<String>,
    #[serde(with = "display")]
    pub published_on: NaiveDate,
}

impl NewspaperDto {
    pub fn new(newspaper: &NewspaperEntity, publisher: Option<String>) -> Self {
        Self {
            newspaper_id: newspaper.publication.publication_id,
            title: newspaper.publication.title.to_string(),
            price: newspaper.publication.price,
            stock: newspaper.publication.stock,
            publisher,
            published_on: newspaper.published_on,
        }
    }
}

impl Display for NewspaperDto {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Newspaper ---")?;
        writeln!(f, "ID: {}", self.newspaper_id)?;
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Price: {:.2}", self.price)?;
        writeln!(f, "Stock: {}", self.stock)?;
        writeln!(f, "Publisher: {}", self.publisher.as_deref().unwrap_or("N/A"))?;
        writeln!(f, "Published on: {}", format_display(&self.published_on))?;
        write!(f, "--------------------")
    }
}
