//! In-process repository used for development and tests.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use truckreg_core::error::AppError;
use truckreg_core::result::AppResult;
use truckreg_core::{Entity, EntityId, Repository};

#[derive(Debug)]
struct Table<T> {
    next_id: EntityId,
    rows: BTreeMap<EntityId, T>,
}

/// Repository keeping entities in an ordered map.
///
/// Ids are handed out from a counter that never goes backwards, so
/// iteration order is insertion order, like an identity column. Clones
/// share the same table.
#[derive(Debug)]
pub struct MemoryRepository<T> {
    table: Arc<RwLock<Table<T>>>,
}

impl<T> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self {
            table: Arc::new(RwLock::new(Table {
                next_id: 1,
                rows: BTreeMap::new(),
            })),
        }
    }
}

impl<T> Clone for MemoryRepository<T> {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
        }
    }
}

impl<T: Entity + Clone> MemoryRepository<T> {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-filled with the given entities, assigning
    /// ids `1..=n` in order.
    pub fn seeded(items: impl IntoIterator<Item = T>) -> Self {
        let mut rows = BTreeMap::new();
        let mut next_id = 1;
        for item in items {
            rows.insert(next_id, item.with_id(next_id));
            next_id += 1;
        }
        Self {
            table: Arc::new(RwLock::new(Table { next_id, rows })),
        }
    }
}

#[async_trait]
impl<T: Entity + Clone> Repository<T> for MemoryRepository<T> {
    async fn add(&self, item: T) -> AppResult<T> {
        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id += 1;

        let stored = item.with_id(id);
        table.rows.insert(id, stored.clone());
        debug!(id, "Inserted in-memory row");
        Ok(stored)
    }

    async fn get(&self, id: EntityId) -> AppResult<Option<T>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn get_all(&self) -> AppResult<Vec<T>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn exists(&self, id: EntityId) -> AppResult<bool> {
        Ok(self.table.read().await.rows.contains_key(&id))
    }

    async fn edit(&self, item: T) -> AppResult<()> {
        let id = item.id();
        let mut table = self.table.write().await;
        match table.rows.get_mut(&id) {
            Some(row) => {
                *row = item;
                Ok(())
            }
            None => Err(AppError::not_found(format!("Row {id} not found"))),
        }
    }

    async fn delete(&self, id: EntityId) -> AppResult<()> {
        self.table
            .write()
            .await
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(format!("Row {id} not found")))
    }
}
