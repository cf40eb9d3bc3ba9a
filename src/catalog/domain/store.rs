use tracing::info;
use crate::authors::domain::model::AuthorEntity;
use crate::books::domain::model::BookEntity;
use crate::categories::domain::model::CategoryEntity;
use crate::core::domain::Identifiable;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::core::sequence::{IdAllocator, SequenceKind};
use crate::newspapers::domain::model::NewspaperEntity;
use crate::publishers::domain::model::PublisherEntity;

pub const AUTHORS: &str = "authors";
pub const PUBLISHERS: &str = "publishers";
pub const CATEGORIES: &str = "categories";
pub const BOOKS: &str = "books";
pub const NEWSPAPERS: &str = "newspapers";

// CatalogRepositories bundles one repository per collection
pub struct CatalogRepositories {
    pub authors: Box<dyn Repository<AuthorEntity>>,
    pub publishers: Box<dyn Repository<PublisherEntity>>,
    pub categories: Box<dyn Repository<CategoryEntity>>,
    pub books: Box<dyn Repository<BookEntity>>,
    pub newspapers: Box<dyn Repository<NewspaperEntity>>,
}

// CatalogStore holds the live collections in insertion order. Only the
// catalog service owns one; callers get clones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogStore {
    pub(crate) authors: Vec<AuthorEntity>,
    pub(crate) publishers: Vec<PublisherEntity>,
    pub(crate) categories: Vec<CategoryEntity>,
    pub(crate) books: Vec<BookEntity>,
    pub(crate) newspapers: Vec<NewspaperEntity>,
}

impl CatalogStore {
    pub(crate) fn load(repositories: &CatalogRepositories) -> LibraryResult<Self> {
        let store = Self {
            authors: repositories.authors.load()?,
            publishers: repositories.publishers.load()?,
            categories: repositories.categories.load()?,
            books: repositories.books.load()?,
            newspapers: repositories.newspapers.load()?,
        };
        info!(authors = store.authors.len(), publishers = store.publishers.len(),
            categories = store.categories.len(), books = store.books.len(),
            newspapers = store.newspapers.len(), "catalog loaded");
        Ok(store)
    }

    // writes every collection, the first failure is returned after all writes were attempted
    pub(crate) fn save(&self, repositories: &mut CatalogRepositories) -> LibraryResult<()> {
        let results = [
            repositories.books.save(&self.books).map(|_| ()),
            repositories.newspapers.save(&self.newspapers).map(|_| ()),
            repositories.authors.save(&self.authors).map(|_| ()),
            repositories.publishers.save(&self.publishers).map(|_| ()),
            repositories.categories.save(&self.categories).map(|_| ()),
        ];
        for res in results {
            res?;
        }
        Ok(())
    }

    // seeds the allocator so new ids never reuse a loaded one
    pub(crate) fn seed(&self, ids: &mut IdAllocator) {
        ids.fast_forward_past(SequenceKind::Author, self.authors.iter().map(Identifiable::id));
        ids.fast_forward_past(SequenceKind::Publisher, self.publishers.iter().map(Identifiable::id));
        ids.fast_forward_past(SequenceKind::Category, self.categories.iter().map(Identifiable::id));
        ids.fast_forward_past(SequenceKind::Publication,
                              self.books.iter().map(Identifiable::id)
                                  .chain(self.newspapers.iter().map(Identifiable::id)));
    }

    pub(crate) fn author(&self, id: i64) -> Option<&AuthorEntity> {
        self.authors.iter().find(|a| a.author_id == id)
    }

    pub(crate) fn publisher(&self, id: i64) -> Option<&PublisherEntity> {
        self.publishers.iter().find(|p| p.publisher_id == id)
    }

    pub(crate) fn category(&self, id: i64) -> Option<&CategoryEntity> {
        self.categories.iter().find(|c| c.category_id == id)
    }

    pub(crate) fn book(&self, id: i64) -> Option<&BookEntity> {
        self.books.iter().find(|b| b.id() == id)
    }

    pub(crate) fn newspaper(&self, id: i64) -> Option<&NewspaperEntity> {
        self.newspapers.iter().find(|n| n.id() == id)
    }

    pub(crate) fn book_position(&self, id: i64) -> Option<usize> {
        self.books.iter().position(|b| b.id() == id)
    }

    pub(crate) fn newspaper_position(&self, id: i64) -> Option<usize> {
        self.newspapers.iter().position(|n| n.id() == id)
    }
}
