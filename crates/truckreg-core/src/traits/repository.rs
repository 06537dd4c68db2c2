//! Generic repository trait for store access.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::traits::entity::{Entity, EntityId};

/// Generic CRUD repository over any [`Entity`].
///
/// Implementations commit every mutating call immediately. Only
/// [`Repository::edit`] and [`Repository::delete`] report a missing id as
/// a `NotFound` error; [`Repository::get`] returns `None` instead. Every
/// other failure surfaces as a `Database` error.
#[async_trait]
pub trait Repository<T>: Send + Sync + 'static
where
    T: Entity,
{
    /// Insert a transient entity and return it with its assigned id.
    /// Any id already present on `item` is ignored.
    async fn add(&self, item: T) -> AppResult<T>;

    /// Find an entity by id.
    async fn get(&self, id: EntityId) -> AppResult<Option<T>>;

    /// List every entity in store order.
    async fn get_all(&self) -> AppResult<Vec<T>>;

    /// Check whether an entity with the id exists.
    async fn exists(&self, id: EntityId) -> AppResult<bool>;

    /// Overwrite the attributes stored under `item.id()`.
    async fn edit(&self, item: T) -> AppResult<()>;

    /// Remove the entity with the given id.
    async fn delete(&self, id: EntityId) -> AppResult<()>;
}
