use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::PublicationKind;
use crate::publications::domain::model::PublicationEntity;
use crate::publications::domain::Publication;

// BookEntity is a catalogued title. It owns its author list and its category
// link; both are stored as ids of records in the other collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    #[serde(flatten)]
    pub publication: PublicationEntity,
    pub page_count: i64,
    pub isbn: String,
    pub author_ids: Vec<i64>,
    pub category_id: i64,
}

impl BookEntity {
    pub fn new(publication: PublicationEntity, page_count: i64, isbn: &str,
               author_ids: &[i64], category_id: i64) -> Self {
        let mut book = Self {
            publication,
            page_count,
            isbn: isbn.to_string(),
            author_ids: vec![],
            category_id,
        };
        book.set_authors(author_ids);
        book
    }

    // replaces the author list, keeping first occurrence order and dropping repeats
    pub fn set_authors(&mut self, author_ids: &[i64]) {
        self.author_ids.clear();
        for author_id in author_ids {
            if !self.author_ids.contains(author_id) {
                self.author_ids.push(*author_id);
            }
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> i64 {
        self.publication.publication_id
    }
}

impl Publication for BookEntity {
    fn publication(&self) -> &PublicationEntity {
        &self.publication
    }

    fn publication_mut(&mut self) -> &mut PublicationEntity {
        &mut self.publication
    }

    fn kind(&self) -> PublicationKind {
        PublicationKind::Book
    }
}

impl Book for BookEntity {
    fn isbn(&self) -> &str {
        self.isbn.as_str()
    }

    fn page_count(&self) -> i64 {
        self.page_count
    }

    fn author_ids(&self) -> &[i64] {
        &self.author_ids
    }

    fn category_id(&self) -> i64 {
        self.category_id
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::books::domain::model::BookEntity;
    use crate::core::domain::Identifiable;
    use crate::core::library::PublicationKind;
    use crate::publications::domain::model::PublicationEntity;
    use crate::publications::domain::Publication;

    fn book() -> BookEntity {
        BookEntity::new(PublicationEntity::new(7, "Vidas Secas", 32.5, 3, 2),
                        176, "978-85-010-6379-1", &[4, 2, 4], 1)
    }

    #[test]
    fn test_should_build_book() {
        let book = book();
        assert_eq!(7, book.id());
        assert_eq!("Vidas Secas", book.title());
        assert_eq!(PublicationKind::Book, book.kind());
        assert_eq!("978-85-010-6379-1", book.isbn());
        assert_eq!(2, book.publisher_id());
    }

    #[test]
    fn test_should_keep_author_order_without_repeats() {
        let mut book = book();
        assert_eq!(&[4, 2], book.author_ids());
        assert!(book.is_written_by(2));
        book.set_authors(&[9]);
        assert_eq!(&[9], book.author_ids());
        assert!(!book.is_written_by(4));
    }

    #[test]
    fn test_should_flatten_publication_fields() {
        let json = serde_json::to_value(book()).expect("serialize");
        assert_eq!(7, json["publication_id"].as_i64().unwrap());
        assert_eq!("Vidas Secas", json["title"].as_str().unwrap());
        let parsed: BookEntity = serde_json::from_value(json).expect("deserialize");
        assert_eq!(book(), parsed);
    }
}
