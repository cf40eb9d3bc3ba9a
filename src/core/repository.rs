use std::marker::PhantomData;
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use tracing::debug;
use crate::core::library::LibraryResult;
use crate::gateway::GatewayPublisherVia;
use crate::utils::json::{collection_path, read_collection, write_collection};

// Repository persists one whole collection of entities at a time
pub trait Repository<Entity> {
    // collection name, also the file stem on disk
    fn name(&self) -> &str;

    // loads every record, an absent collection loads as empty
    fn load(&self) -> LibraryResult<Vec<Entity>>;

    // replaces the stored collection, returns number of records written
    fn save(&mut self, entities: &[Entity]) -> LibraryResult<usize>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    JsonFile,
    Memory,
}

impl RepositoryStore {
    pub fn gateway_publisher(&self) -> GatewayPublisherVia {
        match self {
            RepositoryStore::JsonFile => GatewayPublisherVia::Logs,
            RepositoryStore::Memory => GatewayPublisherVia::Memory,
        }
    }
}

#[derive(Debug)]
pub struct JsonFileRepository<Entity> {
    data_dir: String,
    collection: String,
    _entity: PhantomData<Entity>,
}

impl<Entity> JsonFileRepository<Entity> {
    pub fn new(data_dir: &str, collection: &str) -> Self {
        Self {
            data_dir: data_dir.to_string(),
            collection: collection.to_string(),
            _entity: PhantomData,
        }
    }
}

impl<Entity: Serialize + DeserializeOwned> Repository<Entity> for JsonFileRepository<Entity> {
    fn name(&self) -> &str {
        self.collection.as_str()
    }

    fn load(&self) -> LibraryResult<Vec<Entity>> {
        let path = collection_path(self.data_dir.as_str(), self.collection.as_str());
        let records = read_collection(&path)?;
        debug!(collection = self.collection.as_str(), size = records.len(), "loaded collection");
        Ok(records)
    }

    fn save(&mut self, entities: &[Entity]) -> LibraryResult<usize> {
        let path = collection_path(self.data_dir.as_str(), self.collection.as_str());
        write_collection(&path, entities)?;
        debug!(collection = self.collection.as_str(), size = entities.len(), "saved collection");
        Ok(entities.len())
    }
}

#[derive(Debug)]
pub struct MemoryRepository<Entity> {
    collection: String,
    records: Vec<Entity>,
}

impl<Entity> MemoryRepository<Entity> {
    pub fn new(collection: &str) -> Self {
        Self {
            collection: collection.to_string(),
            records: vec![],
        }
    }

    pub fn with_records(collection: &str, records: Vec<Entity>) -> Self {
        Self {
            collection: collection.to_string(),
            records,
        }
    }
}

impl<Entity: Clone> Repository<Entity> for MemoryRepository<Entity> {
    fn name(&self) -> &str {
        self.collection.as_str()
    }

    fn load(&self) -> LibraryResult<Vec<Entity>> {
        Ok(self.records.clone())
    }

    fn save(&mut self, entities: &[Entity]) -> LibraryResult<usize> {
        self.records = entities.to_vec();
        Ok(self.records.len())
    }
}
