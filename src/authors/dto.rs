use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::authors::domain::model::AuthorEntity;
use crate::utils::date::{display, format_display};

// AuthorDto is the author as shown to the operator, with the titles of the
// books that list this author
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorDto {
    pub author_id: i64,
    pub name: String,
    pub nationality: String,
    #[serde(with = "display")]
    pub birth_date: NaiveDate,
    pub books: Vec<String>,
}

impl AuthorDto {
    pub fn new(author: &AuthorEntity, books: Vec<String>) -> Self {
        Self {
            author_id: author.author_id,
            name: author.name.to_string(),
            nationality: author.nationality.to_string(),
            birth_date: author.birth_date,
            books,
        }
    }
}

impl From<&AuthorEntity> for AuthorDto {
    fn from(other: &AuthorEntity) -> Self {
        AuthorDto::new(other, vec![])
    }
}

impl Display for AuthorDto {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let books = if self.books.is_empty() { "N/A".to_string() } else { self.books.join(", ") };
        write!(f, "ID: {}, Name: {}, Nationality: {}, Birth date: {}, Books: {}",
               self.author_id, self.name, self.nationality,
               format_display(&self.birth_date), books)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::authors::domain::model::AuthorEntity;
    use crate::authors::dto::AuthorDto;

    #[test]
    fn test_should_build_author_view() {
        let author = AuthorEntity::new(1, "Machado de Assis", "Brazilian", NaiveDate::from_ymd_opt(1839, 6, 21).unwrap());
        let dto = AuthorDto::new(&author, vec!["Dom Casmurro".to_string()]);
        assert_eq!(vec!["Dom Casmurro".to_string()], dto.books);
        assert!(dto.to_string().ends_with("Books: Dom Casmurro"));
        assert!(AuthorDto::from(&author).to_string().ends_with("Books: N/A"));
    }

    #[test]
    fn test_should_serialize_display_date() {
        let author = AuthorEntity::new(1, "A", "B", NaiveDate::from_ymd_opt(1900, 1, 2).unwrap());
        let json = serde_json::to_value(AuthorDto::from(&author)).expect("serialize");
        assert_eq!("02/01/1900", json["birth_date"].as_str().unwrap());
    }
}
