use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::utils::date::{format_display, serializer};

// AuthorEntity is a person credited on one or more books. The books an author
// appears on are owned by the books themselves and derived on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorEntity {
    pub author_id: i64,
    pub name: String,
    pub nationality: String,
    #[serde(with = "serializer")]
    pub birth_date: NaiveDate,
}

impl AuthorEntity {
    pub fn new(author_id: i64, name: &str, nationality: &str, birth_date: NaiveDate) -> Self {
        Self {
            author_id,
            name: name.to_string(),
            nationality: nationality.to_string(),
            birth_date,
        }
    }
}

impl Identifiable for AuthorEntity {
    fn id(&self) -> i64 {
        self.author_id
    }
}

impl Display for AuthorEntity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ID: {}, Name: {}, Nationality: {}, Birth date: {}",
               self.author_id, self.name, self.nationality, format_display(&self.birth_date))
    }
}
