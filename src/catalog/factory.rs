use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::catalog::domain::store::{CatalogRepositories, AUTHORS, BOOKS, CATEGORIES, NEWSPAPERS, PUBLISHERS};
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::core::repository::{JsonFileRepository, MemoryRepository, RepositoryStore};
use crate::gateway::factory::create_publisher;

pub fn create_catalog_repositories(config: &Configuration, store: RepositoryStore) -> CatalogRepositories {
    match store {
        RepositoryStore::JsonFile => {
            let dir = config.data_dir.as_str();
            CatalogRepositories {
                authors: Box::new(JsonFileRepository::new(dir, AUTHORS)),
                publishers: Box::new(JsonFileRepository::new(dir, PUBLISHERS)),
                categories: Box::new(JsonFileRepository::new(dir, CATEGORIES)),
                books: Box::new(JsonFileRepository::new(dir, BOOKS)),
                newspapers: Box::new(JsonFileRepository::new(dir, NEWSPAPERS)),
            }
        }
        RepositoryStore::Memory => {
            CatalogRepositories {
                authors: Box::new(MemoryRepository::new(AUTHORS)),
                publishers: Box::new(MemoryRepository::new(PUBLISHERS)),
                categories: Box::new(MemoryRepository::new(CATEGORIES)),
                books: Box::new(MemoryRepository::new(BOOKS)),
                newspapers: Box::new(MemoryRepository::new(NEWSPAPERS)),
            }
        }
    }
}

pub fn create_catalog_service(config: &Configuration, store: RepositoryStore) -> LibraryResult<Box<dyn CatalogService>> {
    let repositories = create_catalog_repositories(config, store);
    let publisher = create_publisher(store.gateway_publisher());
    Ok(Box::new(CatalogServiceImpl::new(config, repositories, publisher)?))
}
