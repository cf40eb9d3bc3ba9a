use std::collections::HashMap;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info, warn};
use crate::authors::domain::model::AuthorEntity;
use crate::authors::dto::AuthorDto;
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::catalog::domain::{BookFields, CatalogOverview, CatalogService, NewspaperFields};
use crate::catalog::domain::rules::{contains_text, same_text, validate_book_fields, validate_newspaper_fields};
use crate::catalog::domain::store::{CatalogRepositories, CatalogStore, AUTHORS, BOOKS, CATEGORIES, NEWSPAPERS, PUBLISHERS};
use crate::categories::domain::model::CategoryEntity;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult, PublicationKind, StockDirection};
use crate::core::sequence::{IdAllocator, SequenceKind};
use crate::gateway::events::EventPublisher;
use crate::newspapers::domain::model::NewspaperEntity;
use crate::newspapers::dto::NewspaperDto;
use crate::publications::domain::Publication;
use crate::publications::domain::model::PublicationEntity;
use crate::publishers::domain::model::PublisherEntity;
use crate::publishers::dto::PublisherDto;
use crate::utils::date::format_display;

const GROUP: &str = "catalog";

pub(crate) struct CatalogServiceImpl {
    config: Configuration,
    ids: IdAllocator,
    store: CatalogStore,
    repositories: CatalogRepositories,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, repositories: CatalogRepositories,
                      events_publisher: Box<dyn EventPublisher>) -> LibraryResult<Self> {
        let store = CatalogStore::load(&repositories)?;
        let mut ids = IdAllocator::new();
        store.seed(&mut ids);
        Ok(Self {
            config: config.clone(),
            ids,
            store,
            repositories,
            events_publisher,
        })
    }

    // a failed automatic save keeps the in-memory change
    fn persist(&mut self) {
        if let Err(err) = self.store.save(&mut self.repositories) {
            warn!(error = %err, code = err.code(), "failed to persist catalog");
        }
    }

    fn publish(&mut self, event: serde_json::Result<DomainEvent>) {
        let res = event.map_err(LibraryError::from)
            .and_then(|event| self.events_publisher.publish(&event));
        if let Err(err) = res {
            warn!(error = %err, "failed to publish catalog event");
        }
    }

    fn added<T: Serialize>(&mut self, collection: &str, id: i64, data: &T) {
        let event = DomainEvent::added(collection, GROUP, id.to_string().as_str(), &HashMap::new(), data);
        self.publish(event);
    }

    fn updated<T: Serialize>(&mut self, collection: &str, id: i64, data: &T) {
        let event = DomainEvent::updated(collection, GROUP, id.to_string().as_str(), &HashMap::new(), data);
        self.publish(event);
    }

    fn deleted<T: Serialize>(&mut self, collection: &str, id: i64, data: &T) {
        let event = DomainEvent::deleted(collection, GROUP, id.to_string().as_str(), &HashMap::new(), data);
        self.publish(event);
    }

    fn require_publisher(&self, id: i64) -> LibraryResult<&PublisherEntity> {
        self.store.publisher(id).ok_or_else(|| LibraryError::not_found(
            format!("publisher {} not found", id).as_str()))
    }

    fn require_author(&self, id: i64) -> LibraryResult<&AuthorEntity> {
        self.store.author(id).ok_or_else(|| LibraryError::not_found(
            format!("author {} not found", id).as_str()))
    }

    fn require_category(&self, id: i64) -> LibraryResult<&CategoryEntity> {
        self.store.category(id).ok_or_else(|| LibraryError::not_found(
            format!("category {} not found", id).as_str()))
    }

    // runs every book check in reporting order; `editing` is skipped by the uniqueness checks
    fn check_book(&self, fields: &BookFields, editing: Option<i64>) -> LibraryResult<String> {
        let isbn = validate_book_fields(&self.config, fields.price, fields.stock, fields.page_count,
                                        fields.isbn.as_str(), &fields.author_ids)?;
        self.require_publisher(fields.publisher_id)?;
        for author_id in &fields.author_ids {
            self.require_author(*author_id)?;
        }
        self.require_category(fields.category_id)?;
        let others = || self.store.books.iter().filter(move |b| Some(b.id()) != editing);
        if others().any(|b| same_text(b.title(), fields.title.as_str())) {
            return Err(LibraryError::duplicate_title(
                format!("a book titled {:?} already exists", fields.title).as_str()));
        }
        if others().any(|b| same_text(b.isbn(), isbn.as_str())) {
            return Err(LibraryError::duplicate_isbn(
                format!("a book with ISBN {} already exists", isbn).as_str()));
        }
        Ok(isbn)
    }

    fn check_newspaper(&self, fields: &NewspaperFields, editing: Option<i64>) -> LibraryResult<()> {
        validate_newspaper_fields(&self.config, fields.price, fields.stock)?;
        self.require_publisher(fields.publisher_id)?;
        if self.store.newspapers.iter()
            .filter(|n| Some(n.id()) != editing)
            .any(|n| n.is_issue(fields.title.as_str(), fields.published_on)) {
            return Err(LibraryError::duplicate_title_date(
                format!("newspaper {:?} of {} already exists", fields.title,
                        format_display(&fields.published_on)).as_str()));
        }
        Ok(())
    }

    fn book_view(&self, book: &BookEntity) -> BookDto {
        let publisher = self.store.publisher(book.publisher_id()).map(|p| p.name.to_string());
        let authors = book.author_ids().iter()
            .filter_map(|id| self.store.author(*id))
            .map(|a| a.name.to_string())
            .collect();
        let category = self.store.category(book.category_id()).map(|c| c.name.to_string());
        BookDto::new(book, publisher, authors, category)
    }

    fn newspaper_view(&self, newspaper: &NewspaperEntity) -> NewspaperDto {
        let publisher = self.store.publisher(newspaper.publisher_id()).map(|p| p.name.to_string());
        NewspaperDto::new(newspaper, publisher)
    }
}

impl CatalogService for CatalogServiceImpl {
    fn register_author(&mut self, name: &str, nationality: &str, birth_date: NaiveDate) -> LibraryResult<AuthorEntity> {
        if self.exists_author_named(name) {
            return Err(LibraryError::duplicate_name(format!("author {:?} already exists", name).as_str()));
        }
        let author = AuthorEntity::new(self.ids.next(SequenceKind::Author), name, nationality, birth_date);
        self.store.authors.push(author.clone());
        info!(author_id = author.author_id, name, "registered author");
        self.persist();
        self.added(AUTHORS, author.author_id, &author);
        Ok(author)
    }

    fn register_publisher(&mut self, name: &str) -> LibraryResult<PublisherEntity> {
        if self.exists_publisher_named(name) {
            return Err(LibraryError::duplicate_name(format!("publisher {:?} already exists", name).as_str()));
        }
        let publisher = PublisherEntity::new(self.ids.next(SequenceKind::Publisher), name);
        self.store.publishers.push(publisher.clone());
        info!(publisher_id = publisher.publisher_id, name, "registered publisher");
        self.persist();
        self.added(PUBLISHERS, publisher.publisher_id, &publisher);
        Ok(publisher)
    }

    fn register_category(&mut self, name: &str) -> LibraryResult<CategoryEntity> {
        if self.exists_category_named(name) {
            return Err(LibraryError::duplicate_name(format!("category {:?} already exists", name).as_str()));
        }
        let category = CategoryEntity::new(self.ids.next(SequenceKind::Category), name);
        self.store.categories.push(category.clone());
        info!(category_id = category.category_id, name, "registered category");
        self.persist();
        self.added(CATEGORIES, category.category_id, &category);
        Ok(category)
    }

    fn register_book(&mut self, fields: &BookFields) -> LibraryResult<BookEntity> {
        let isbn = self.check_book(fields, None)?;
        let publication = PublicationEntity::new(self.ids.next(SequenceKind::Publication), fields.title.as_str(),
                                                 fields.price, fields.stock, fields.publisher_id);
        let book = BookEntity::new(publication, fields.page_count, isbn.as_str(), &fields.author_ids, fields.category_id);
        self.store.books.push(book.clone());
        info!(book_id = book.id(), title = book.title(), isbn = book.isbn(), "registered book");
        self.persist();
        self.added(BOOKS, book.id(), &book);
        Ok(book)
    }

    fn register_newspaper(&mut self, fields: &NewspaperFields) -> LibraryResult<NewspaperEntity> {
        self.check_newspaper(fields, None)?;
        let publication = PublicationEntity::new(self.ids.next(SequenceKind::Publication), fields.title.as_str(),
                                                 fields.price, fields.stock, fields.publisher_id);
        let newspaper = NewspaperEntity::new(publication, fields.published_on);
        self.store.newspapers.push(newspaper.clone());
        info!(newspaper_id = newspaper.id(), title = newspaper.title(), "registered newspaper");
        self.persist();
        self.added(NEWSPAPERS, newspaper.id(), &newspaper);
        Ok(newspaper)
    }

    fn edit_book(&mut self, id: i64, fields: &BookFields) -> LibraryResult<BookEntity> {
        let pos = self.store.book_position(id).ok_or_else(|| LibraryError::not_found(
            format!("book {} not found", id).as_str()))?;
        let isbn = self.check_book(fields, Some(id))?;
        let publication = PublicationEntity::new(id, fields.title.as_str(), fields.price, fields.stock, fields.publisher_id);
        let book = BookEntity::new(publication, fields.page_count, isbn.as_str(), &fields.author_ids, fields.category_id);
        self.store.books[pos] = book.clone();
        info!(book_id = id, title = book.title(), "edited book");
        self.persist();
        self.updated(BOOKS, id, &book);
        Ok(book)
    }

    fn edit_newspaper(&mut self, id: i64, fields: &NewspaperFields) -> LibraryResult<NewspaperEntity> {
        let pos = self.store.newspaper_position(id).ok_or_else(|| LibraryError::not_found(
            format!("newspaper {} not found", id).as_str()))?;
        self.check_newspaper(fields, Some(id))?;
        let publication = PublicationEntity::new(id, fields.title.as_str(), fields.price, fields.stock, fields.publisher_id);
        let newspaper = NewspaperEntity::new(publication, fields.published_on);
        self.store.newspapers[pos] = newspaper.clone();
        info!(newspaper_id = id, title = newspaper.title(), "edited newspaper");
        self.persist();
        self.updated(NEWSPAPERS, id, &newspaper);
        Ok(newspaper)
    }

    fn delete_book(&mut self, id: i64) -> LibraryResult<BookEntity> {
        let pos = self.store.book_position(id).ok_or_else(|| LibraryError::not_found(
            format!("book {} not found", id).as_str()))?;
        let book = self.store.books.remove(pos);
        info!(book_id = id, title = book.title(), "deleted book");
        self.persist();
        self.deleted(BOOKS, id, &book);
        Ok(book)
    }

    fn delete_newspaper(&mut self, id: i64) -> LibraryResult<NewspaperEntity> {
        let pos = self.store.newspaper_position(id).ok_or_else(|| LibraryError::not_found(
            format!("newspaper {} not found", id).as_str()))?;
        let newspaper = self.store.newspapers.remove(pos);
        info!(newspaper_id = id, title = newspaper.title(), "deleted newspaper");
        self.persist();
        self.deleted(NEWSPAPERS, id, &newspaper);
        Ok(newspaper)
    }

    fn find_book_by_id(&self, id: i64) -> LibraryResult<BookEntity> {
        self.store.book(id).cloned().ok_or_else(|| LibraryError::not_found(
            format!("book {} not found", id).as_str()))
    }

    fn find_newspaper_by_id(&self, id: i64) -> LibraryResult<NewspaperEntity> {
        self.store.newspaper(id).cloned().ok_or_else(|| LibraryError::not_found(
            format!("newspaper {} not found", id).as_str()))
    }

    fn find_author_by_id(&self, id: i64) -> LibraryResult<AuthorEntity> {
        self.require_author(id).cloned()
    }

    fn find_publisher_by_id(&self, id: i64) -> LibraryResult<PublisherEntity> {
        self.require_publisher(id).cloned()
    }

    fn find_category_by_id(&self, id: i64) -> LibraryResult<CategoryEntity> {
        self.require_category(id).cloned()
    }

    fn search_books_by_title(&self, term: &str) -> Vec<BookEntity> {
        self.store.books.iter()
            .filter(|b| contains_text(b.title(), term))
            .cloned()
            .collect()
    }

    fn search_books_by_author(&self, term: &str) -> Vec<BookEntity> {
        self.store.books.iter()
            .filter(|b| b.author_ids().iter()
                .filter_map(|id| self.store.author(*id))
                .any(|a| contains_text(a.name.as_str(), term)))
            .cloned()
            .collect()
    }

    fn search_books_by_category(&self, term: &str) -> Vec<BookEntity> {
        self.store.books.iter()
            .filter(|b| self.store.category(b.category_id())
                .map(|c| contains_text(c.name.as_str(), term))
                .unwrap_or(false))
            .cloned()
            .collect()
    }

    fn search_newspapers_by_title(&self, term: &str) -> Vec<NewspaperEntity> {
        self.store.newspapers.iter()
            .filter(|n| contains_text(n.title(), term))
            .cloned()
            .collect()
    }

    fn search_newspapers_by_date(&self, date: NaiveDate) -> Vec<NewspaperEntity> {
        self.store.newspapers.iter()
            .filter(|n| n.published_on == date)
            .cloned()
            .collect()
    }

    fn adjust_stock(&mut self, kind: PublicationKind, id: i64, quantity: i64, direction: StockDirection) -> LibraryResult<i64> {
        let publication: &mut dyn Publication = match kind {
            PublicationKind::Book => {
                let pos = self.store.book_position(id).ok_or_else(|| LibraryError::not_found(
                    format!("book {} not found", id).as_str()))?;
                &mut self.store.books[pos]
            }
            PublicationKind::Newspaper => {
                let pos = self.store.newspaper_position(id).ok_or_else(|| LibraryError::not_found(
                    format!("newspaper {} not found", id).as_str()))?;
                &mut self.store.newspapers[pos]
            }
        };
        let stock = match direction {
            StockDirection::Add => publication.publication_mut().add_stock(quantity)?,
            StockDirection::Remove => publication.publication_mut().remove_stock(quantity)?,
        };
        info!(kind = %kind, id, quantity, direction = %direction, stock, "adjusted stock");
        self.persist();
        match kind {
            PublicationKind::Book => {
                if let Some(book) = self.store.book(id).cloned() {
                    self.updated(BOOKS, id, &book);
                }
            }
            PublicationKind::Newspaper => {
                if let Some(newspaper) = self.store.newspaper(id).cloned() {
                    self.updated(NEWSPAPERS, id, &newspaper);
                }
            }
        }
        Ok(stock)
    }

    fn list_authors(&self) -> Vec<AuthorEntity> {
        self.store.authors.clone()
    }

    fn list_publishers(&self) -> Vec<PublisherEntity> {
        self.store.publishers.clone()
    }

    fn list_categories(&self) -> Vec<CategoryEntity> {
        self.store.categories.clone()
    }

    fn list_books(&self) -> Vec<BookEntity> {
        self.store.books.clone()
    }

    fn list_newspapers(&self) -> Vec<NewspaperEntity> {
        self.store.newspapers.clone()
    }

    fn exists_author_named(&self, name: &str) -> bool {
        self.store.authors.iter().any(|a| same_text(a.name.as_str(), name))
    }

    fn exists_publisher_named(&self, name: &str) -> bool {
        self.store.publishers.iter().any(|p| same_text(p.name.as_str(), name))
    }

    fn exists_category_named(&self, name: &str) -> bool {
        self.store.categories.iter().any(|c| same_text(c.name.as_str(), name))
    }

    fn exists_book_titled(&self, title: &str) -> bool {
        self.store.books.iter().any(|b| same_text(b.title(), title))
    }

    fn exists_book_with_isbn(&self, isbn: &str) -> bool {
        self.store.books.iter().any(|b| same_text(b.isbn(), isbn.trim()))
    }

    fn exists_newspaper(&self, title: &str, published_on: NaiveDate) -> bool {
        self.store.newspapers.iter().any(|n| n.is_issue(title, published_on))
    }

    fn describe_book(&self, id: i64) -> LibraryResult<BookDto> {
        let book = self.store.book(id).ok_or_else(|| LibraryError::not_found(
            format!("book {} not found", id).as_str()))?;
        Ok(self.book_view(book))
    }

    fn describe_newspaper(&self, id: i64) -> LibraryResult<NewspaperDto> {
        let newspaper = self.store.newspaper(id).ok_or_else(|| LibraryError::not_found(
            format!("newspaper {} not found", id).as_str()))?;
        Ok(self.newspaper_view(newspaper))
    }

    fn describe_author(&self, id: i64) -> LibraryResult<AuthorDto> {
        let author = self.require_author(id)?;
        let books = self.store.books.iter()
            .filter(|b| b.is_written_by(id))
            .map(|b| b.title().to_string())
            .collect();
        Ok(AuthorDto::new(author, books))
    }

    fn describe_publisher(&self, id: i64) -> LibraryResult<PublisherDto> {
        let publisher = self.require_publisher(id)?;
        let books = self.store.books.iter()
            .filter(|b| b.publisher_id() == id)
            .map(|b| b.title().to_string());
        let newspapers = self.store.newspapers.iter()
            .filter(|n| n.publisher_id() == id)
            .map(|n| n.title().to_string());
        Ok(PublisherDto::new(publisher, books.chain(newspapers).collect()))
    }

    fn catalog_overview(&self) -> CatalogOverview {
        CatalogOverview {
            books: self.store.books.iter().map(|b| self.book_view(b)).collect(),
            newspapers: self.store.newspapers.iter().map(|n| self.newspaper_view(n)).collect(),
        }
    }

    fn save_all(&mut self) -> LibraryResult<()> {
        self.store.save(&mut self.repositories)?;
        debug!(books = self.store.books.len(), newspapers = self.store.newspapers.len(), "saved catalog");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::catalog::domain::{BookFields, CatalogService, NewspaperFields};
    use crate::catalog::domain::service::CatalogServiceImpl;
    use crate::catalog::domain::store::{CatalogRepositories, AUTHORS, BOOKS, CATEGORIES, NEWSPAPERS, PUBLISHERS};
    use crate::catalog::factory;
    use crate::core::domain::{Configuration, Identifiable};
    use crate::core::events::DomainEventType;
    use crate::core::library::{LibraryError, LibraryResult, PublicationKind, StockDirection};
    use crate::core::repository::{MemoryRepository, Repository, RepositoryStore};
    use crate::gateway::memory::MemoryPublisher;
    use crate::publications::domain::Publication;

    struct FailingRepository;

    impl<Entity> Repository<Entity> for FailingRepository {
        fn name(&self) -> &str {
            "failing"
        }

        fn load(&self) -> LibraryResult<Vec<Entity>> {
            Ok(vec![])
        }

        fn save(&mut self, _entities: &[Entity]) -> LibraryResult<usize> {
            Err(LibraryError::database("disk full", None))
        }
    }

    fn memory_repositories() -> CatalogRepositories {
        CatalogRepositories {
            authors: Box::new(MemoryRepository::new(AUTHORS)),
            publishers: Box::new(MemoryRepository::new(PUBLISHERS)),
            categories: Box::new(MemoryRepository::new(CATEGORIES)),
            books: Box::new(MemoryRepository::new(BOOKS)),
            newspapers: Box::new(MemoryRepository::new(NEWSPAPERS)),
        }
    }

    fn new_service() -> (CatalogServiceImpl, MemoryPublisher) {
        let observer = MemoryPublisher::new();
        let svc = CatalogServiceImpl::new(&Configuration::default(), memory_repositories(), Box::new(observer.clone()))
            .expect("should build service");
        (svc, observer)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // registers one author, publisher and category and returns a valid book input
    fn seed(svc: &mut dyn CatalogService) -> BookFields {
        let author = svc.register_author("Machado de Assis", "Brazilian", date(1839, 6, 21)).expect("should add author");
        let publisher = svc.register_publisher("Garnier").expect("should add publisher");
        let category = svc.register_category("Novel").expect("should add category");
        BookFields {
            title: "Dom Casmurro".to_string(),
            price: 15.0,
            stock: 3,
            publisher_id: publisher.publisher_id,
            page_count: 256,
            isbn: "978-85-359-0277-5".to_string(),
            author_ids: vec![author.author_id],
            category_id: category.category_id,
        }
    }

    fn newspaper_fields(publisher_id: i64) -> NewspaperFields {
        NewspaperFields {
            title: "Jornal do Brasil".to_string(),
            price: 3.0,
            stock: 10,
            publisher_id,
            published_on: date(2024, 5, 1),
        }
    }

    #[test]
    fn test_should_allocate_increasing_ids() {
        let (mut svc, _) = new_service();
        let first = svc.register_author("A", "X", date(1900, 1, 1)).expect("should add author");
        let second = svc.register_author("B", "X", date(1900, 1, 1)).expect("should add author");
        assert_eq!(1, first.author_id);
        assert!(second.author_id > first.author_id);
    }

    #[test]
    fn test_should_share_publication_ids() {
        let (mut svc, _) = new_service();
        let fields = seed(&mut svc);
        let book = svc.register_book(&fields).expect("should add book");
        let newspaper = svc.register_newspaper(&newspaper_fields(fields.publisher_id)).expect("should add newspaper");
        assert_eq!(book.id() + 1, newspaper.id());
    }

    #[test]
    fn test_should_reject_duplicate_names_ignoring_case() {
        let (mut svc, _) = new_service();
        svc.register_publisher("Rocco").expect("should add publisher");
        let res = svc.register_publisher("ROCCO");
        assert!(matches!(res, Err(LibraryError::DuplicateName { .. })));
        assert_eq!(1, svc.list_publishers().len());

        svc.register_category("Poetry").expect("should add category");
        assert!(matches!(svc.register_category("poetry"), Err(LibraryError::DuplicateName { .. })));
        svc.register_author("Clarice", "BR", date(1920, 12, 10)).expect("should add author");
        assert!(matches!(svc.register_author("clarice", "UA", date(1920, 12, 10)), Err(LibraryError::DuplicateName { .. })));
        assert_eq!(1, svc.list_categories().len());
        assert_eq!(1, svc.list_authors().len());
    }

    #[test]
    fn test_should_apply_price_boundary() {
        let (mut svc, _) = new_service();
        let mut fields = seed(&mut svc);
        fields.price = 14.99;
        assert!(matches!(svc.register_book(&fields), Err(LibraryError::InvalidPrice { .. })));
        fields.price = 15.00;
        assert!(svc.register_book(&fields).is_ok());

        let mut paper = newspaper_fields(fields.publisher_id);
        paper.price = 2.99;
        assert!(matches!(svc.register_newspaper(&paper), Err(LibraryError::InvalidPrice { .. })));
        paper.price = 3.00;
        assert!(svc.register_newspaper(&paper).is_ok());
    }

    #[test]
    fn test_should_validate_book_fields() {
        let (mut svc, _) = new_service();
        let fields = seed(&mut svc);
        let mut bad = fields.clone();
        bad.isbn = "9788535902775".to_string();
        assert!(matches!(svc.register_book(&bad), Err(LibraryError::InvalidIsbnFormat { .. })));
        bad = fields.clone();
        bad.isbn = "".to_string();
        assert!(matches!(svc.register_book(&bad), Err(LibraryError::EmptyIsbn { .. })));
        bad = fields.clone();
        bad.page_count = 9;
        assert!(matches!(svc.register_book(&bad), Err(LibraryError::InvalidPageCount { .. })));
        bad = fields.clone();
        bad.stock = -1;
        assert!(matches!(svc.register_book(&bad), Err(LibraryError::InvalidStock { .. })));
        bad = fields.clone();
        bad.author_ids = vec![];
        assert!(matches!(svc.register_book(&bad), Err(LibraryError::MissingAuthors { .. })));
        bad = fields.clone();
        bad.author_ids = vec![99];
        assert!(matches!(svc.register_book(&bad), Err(LibraryError::NotFound { .. })));
        bad = fields;
        bad.publisher_id = 99;
        assert!(matches!(svc.register_book(&bad), Err(LibraryError::NotFound { .. })));
        assert!(svc.list_books().is_empty());
    }

    #[test]
    fn test_should_reject_duplicate_books() {
        let (mut svc, _) = new_service();
        let fields = seed(&mut svc);
        svc.register_book(&fields).expect("should add book");

        let mut same_title = fields.clone();
        same_title.title = "DOM CASMURRO".to_string();
        same_title.isbn = "111-11-111-1111-1".to_string();
        assert!(matches!(svc.register_book(&same_title), Err(LibraryError::DuplicateTitle { .. })));

        let mut same_isbn = fields.clone();
        same_isbn.title = "Quincas Borba".to_string();
        same_isbn.isbn = " 978-85-359-0277-5 ".to_string();
        assert!(matches!(svc.register_book(&same_isbn), Err(LibraryError::DuplicateIsbn { .. })));
        assert_eq!(1, svc.list_books().len());
    }

    #[test]
    fn test_should_exclude_self_when_editing_book() {
        let (mut svc, _) = new_service();
        let fields = seed(&mut svc);
        let a = svc.register_book(&fields).expect("should add book");
        let mut other = fields.clone();
        other.title = "Helena".to_string();
        other.isbn = "222-22-222-2222-2".to_string();
        let b = svc.register_book(&other).expect("should add book");

        let mut edit = fields.clone();
        edit.price = 42.5;
        let edited = svc.edit_book(a.id(), &edit).expect("should keep own title and isbn");
        assert_eq!(42.5, edited.price());

        edit.title = "helena".to_string();
        assert!(matches!(svc.edit_book(a.id(), &edit), Err(LibraryError::DuplicateTitle { .. })));
        edit.title = fields.title.to_string();
        edit.isbn = "222-22-222-2222-2".to_string();
        assert!(matches!(svc.edit_book(a.id(), &edit), Err(LibraryError::DuplicateIsbn { .. })));
        assert!(matches!(svc.edit_book(b.id() + 100, &edit), Err(LibraryError::NotFound { .. })));
        assert_eq!("Dom Casmurro", svc.find_book_by_id(a.id()).expect("should find").title());
    }

    #[test]
    fn test_should_replace_authors_on_edit() {
        let (mut svc, _) = new_service();
        let mut fields = seed(&mut svc);
        let second = svc.register_author("José de Alencar", "Brazilian", date(1829, 5, 1)).expect("should add author");
        fields.author_ids.push(second.author_id);
        let book = svc.register_book(&fields).expect("should add book");
        assert_eq!(2, book.author_ids.len());

        fields.author_ids = vec![second.author_id];
        let edited = svc.edit_book(book.id(), &fields).expect("should edit book");
        assert_eq!(vec![second.author_id], edited.author_ids);
        assert_eq!(book.id(), edited.id());
    }

    #[test]
    fn test_should_check_newspaper_title_and_date() {
        let (mut svc, _) = new_service();
        let publisher = svc.register_publisher("JB").expect("should add publisher");
        let fields = newspaper_fields(publisher.publisher_id);
        let first = svc.register_newspaper(&fields).expect("should add newspaper");

        let mut same = fields.clone();
        same.title = "JORNAL DO BRASIL".to_string();
        assert!(matches!(svc.register_newspaper(&same), Err(LibraryError::DuplicateTitleDate { .. })));
        same.published_on = date(2024, 5, 2);
        let second = svc.register_newspaper(&same).expect("different day is allowed");

        assert!(svc.edit_newspaper(first.id(), &fields).is_ok());
        assert!(matches!(svc.edit_newspaper(second.id(), &fields), Err(LibraryError::DuplicateTitleDate { .. })));
        assert!(svc.exists_newspaper("jornal do brasil", date(2024, 5, 1)));
        assert!(!svc.exists_newspaper("jornal do brasil", date(2024, 5, 3)));
    }

    #[test]
    fn test_should_adjust_stock() {
        let (mut svc, _) = new_service();
        let fields = seed(&mut svc);
        let book = svc.register_book(&fields).expect("should add book");

        assert_eq!(8, svc.adjust_stock(PublicationKind::Book, book.id(), 5, StockDirection::Add).expect("should add"));
        assert_eq!(6, svc.adjust_stock(PublicationKind::Book, book.id(), 2, StockDirection::Remove).expect("should remove"));

        let res = svc.adjust_stock(PublicationKind::Book, book.id(), 7, StockDirection::Remove);
        assert!(matches!(res, Err(LibraryError::InsufficientStock { available: 6, requested: 7, .. })));
        assert!(matches!(svc.adjust_stock(PublicationKind::Book, book.id(), -1, StockDirection::Add),
            Err(LibraryError::InvalidQuantity { .. })));
        assert!(matches!(svc.adjust_stock(PublicationKind::Newspaper, book.id(), 1, StockDirection::Add),
            Err(LibraryError::NotFound { .. })));
        assert_eq!(6, svc.find_book_by_id(book.id()).expect("should find").stock());
    }

    #[test]
    fn test_should_reject_stock_overflow() {
        let (mut svc, _) = new_service();
        let mut fields = seed(&mut svc);
        fields.stock = 1;
        let book = svc.register_book(&fields).expect("should add book");
        let res = svc.adjust_stock(PublicationKind::Book, book.id(), i64::MAX, StockDirection::Add);
        assert!(matches!(res, Err(LibraryError::InvalidQuantity { .. })));
        assert_eq!(1, svc.find_book_by_id(book.id()).expect("should find").stock());
    }

    #[test]
    fn test_should_reject_infinite_prices() {
        let (mut svc, _) = new_service();
        let mut fields = seed(&mut svc);
        fields.price = f64::INFINITY;
        assert!(matches!(svc.register_book(&fields), Err(LibraryError::InvalidPrice { .. })));
        let mut paper = newspaper_fields(fields.publisher_id);
        paper.price = f64::INFINITY;
        assert!(matches!(svc.register_newspaper(&paper), Err(LibraryError::InvalidPrice { .. })));
        assert!(svc.list_books().is_empty());
        assert!(svc.list_newspapers().is_empty());
    }

    #[test]
    fn test_should_delete_publications() {
        let (mut svc, observer) = new_service();
        let fields = seed(&mut svc);
        let book = svc.register_book(&fields).expect("should add book");
        let newspaper = svc.register_newspaper(&newspaper_fields(fields.publisher_id)).expect("should add newspaper");

        assert_eq!(book.id(), svc.delete_book(book.id()).expect("should delete").id());
        assert!(matches!(svc.delete_book(book.id()), Err(LibraryError::NotFound { .. })));
        assert!(svc.delete_newspaper(newspaper.id()).is_ok());
        assert!(svc.list_books().is_empty());
        assert!(svc.list_newspapers().is_empty());

        let events = observer.events();
        assert_eq!(DomainEventType::Deleted, events[events.len() - 1].kind);
        assert_eq!("newspapers", events[events.len() - 1].name.as_str());
    }

    #[test]
    fn test_should_search_ignoring_case_in_insertion_order() {
        let (mut svc, _) = new_service();
        let fields = seed(&mut svc);
        let mut second = fields.clone();
        second.title = "Memórias Póstumas de Brás Cubas".to_string();
        second.isbn = "333-33-333-3333-3".to_string();
        let mut third = fields.clone();
        third.title = "Casa Velha".to_string();
        third.isbn = "444-44-444-4444-4".to_string();
        let b1 = svc.register_book(&fields).expect("should add book");
        svc.register_book(&second).expect("should add book");
        let b3 = svc.register_book(&third).expect("should add book");

        let found: Vec<i64> = svc.search_books_by_title("CAS").iter().map(|b| b.id()).collect();
        assert_eq!(vec![b1.id(), b3.id()], found);
        assert!(svc.search_books_by_title("nothing").is_empty());
        assert_eq!(3, svc.search_books_by_author("machado").len());
        assert_eq!(3, svc.search_books_by_category("NOV").len());
        assert!(svc.search_books_by_category("poetry").is_empty());

        svc.register_newspaper(&newspaper_fields(fields.publisher_id)).expect("should add newspaper");
        assert_eq!(1, svc.search_newspapers_by_title("brasil").len());
        assert_eq!(1, svc.search_newspapers_by_date(date(2024, 5, 1)).len());
        assert!(svc.search_newspapers_by_date(date(2024, 5, 2)).is_empty());
    }

    #[test]
    fn test_should_derive_back_references() {
        let (mut svc, _) = new_service();
        let fields = seed(&mut svc);
        let book = svc.register_book(&fields).expect("should add book");
        svc.register_newspaper(&newspaper_fields(fields.publisher_id)).expect("should add newspaper");

        let author = svc.describe_author(fields.author_ids[0]).expect("should describe author");
        assert_eq!(vec!["Dom Casmurro".to_string()], author.books);
        let publisher = svc.describe_publisher(fields.publisher_id).expect("should describe publisher");
        assert_eq!(2, publisher.publications.len());

        let view = svc.describe_book(book.id()).expect("should describe book");
        assert_eq!(Some("Garnier".to_string()), view.publisher);
        assert_eq!(vec!["Machado de Assis".to_string()], view.authors);
        assert_eq!(Some("Novel".to_string()), view.category);

        let overview = svc.catalog_overview();
        assert_eq!(1, overview.books.len());
        assert_eq!(1, overview.newspapers.len());
    }

    #[test]
    fn test_should_return_copies_from_listing() {
        let (mut svc, _) = new_service();
        let fields = seed(&mut svc);
        svc.register_book(&fields).expect("should add book");
        let mut books = svc.list_books();
        books.clear();
        assert_eq!(1, svc.list_books().len());
        assert!(svc.exists_book_titled("dom casmurro"));
        assert!(svc.exists_book_with_isbn("978-85-359-0277-5"));
        assert!(svc.exists_author_named("MACHADO DE ASSIS"));
        assert!(svc.exists_publisher_named("garnier"));
        assert!(svc.exists_category_named("novel"));
    }

    #[test]
    fn test_should_publish_events() {
        let (mut svc, observer) = new_service();
        let fields = seed(&mut svc);
        let book = svc.register_book(&fields).expect("should add book");
        svc.edit_book(book.id(), &fields).expect("should edit book");
        let events = observer.events();
        assert_eq!(5, events.len());
        assert_eq!(DomainEventType::Updated, events[4].kind);
        assert_eq!(book.id().to_string(), events[4].key);
    }

    #[test]
    fn test_should_keep_change_when_persisting_fails() {
        let repositories = CatalogRepositories {
            authors: Box::new(FailingRepository),
            publishers: Box::new(FailingRepository),
            categories: Box::new(FailingRepository),
            books: Box::new(FailingRepository),
            newspapers: Box::new(FailingRepository),
        };
        let mut svc = CatalogServiceImpl::new(&Configuration::default(), repositories, Box::new(MemoryPublisher::new()))
            .expect("should build service");
        svc.register_publisher("Companhia").expect("automatic save failure is not reported");
        assert_eq!(1, svc.list_publishers().len());
        assert!(matches!(svc.save_all(), Err(LibraryError::Database { .. })));
    }

    #[test]
    fn test_should_round_trip_through_json_files() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = Configuration::new(dir.path().to_str().unwrap());
        let (book, newspaper) = {
            let mut svc = factory::create_catalog_service(&config, RepositoryStore::JsonFile).expect("should build service");
            let fields = seed(svc.as_mut());
            let book = svc.register_book(&fields).expect("should add book");
            let newspaper = svc.register_newspaper(&newspaper_fields(fields.publisher_id)).expect("should add newspaper");
            svc.save_all().expect("should save");
            (book, newspaper)
        };

        let mut reloaded = factory::create_catalog_service(&config, RepositoryStore::JsonFile).expect("should load service");
        assert_eq!(vec![book.clone()], reloaded.list_books());
        assert_eq!(vec![newspaper.clone()], reloaded.list_newspapers());
        assert_eq!(1, reloaded.list_authors().len());
        assert_eq!(1, reloaded.list_publishers().len());
        assert_eq!(1, reloaded.list_categories().len());
        assert_eq!(date(1839, 6, 21), reloaded.list_authors()[0].birth_date);

        let publisher = reloaded.register_publisher("Record").expect("should add publisher");
        assert_eq!(2, publisher.publisher_id);
        let mut paper = newspaper_fields(publisher.publisher_id);
        paper.published_on = date(2024, 6, 1);
        let next = reloaded.register_newspaper(&paper).expect("should add newspaper");
        assert_eq!(newspaper.id() + 1, next.id());
    }

    #[test]
    fn test_should_fail_on_corrupt_collection() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join("books.json"), "not json").expect("should write");
        let config = Configuration::new(dir.path().to_str().unwrap());
        let res = factory::create_catalog_service(&config, RepositoryStore::JsonFile);
        assert!(matches!(res, Err(LibraryError::Serialization { .. })));
    }
}
