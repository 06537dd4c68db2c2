//! Capability trait for persisted records keyed by a numeric id.

/// Identifier type shared by every persisted record.
pub type EntityId = i32;

/// A record the store assigns a numeric identifier to.
///
/// An id of `0` marks a transient instance that has not been stored yet.
/// The id can only be replaced by building a new value through
/// [`Entity::with_id`]; there is no setter.
pub trait Entity: Send + Sync + 'static {
    /// The store-assigned identifier, or `0` when transient.
    fn id(&self) -> EntityId;

    /// Rebuild this record carrying the given identifier.
    fn with_id(self, id: EntityId) -> Self
    where
        Self: Sized;

    /// Whether the record has been assigned an id by a store.
    fn is_transient(&self) -> bool {
        self.id() == 0
    }
}
