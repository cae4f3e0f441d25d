//! Base store trait for the parent-owned top-level lists.
//!
//! Each back-office screen owns a top-level list (processes, certificates,
//! opportunities, ...) that wizard submissions mutate wholesale: replace
//! the matching item by id, or prepend a new one. This module makes that
//! ownership explicit behind a trait instead of ambient mutable state.
//!
//! # Example
//!
//! ```ignore
//! // Domain-specific store extends the base trait
//! #[async_trait]
//! pub trait ProcessStore: Store<RegulatoryProcess, ProcessId> {
//!     async fn find_by_status(&self, status: ProcessStatus)
//!         -> Result<Vec<RegulatoryProcess>, DomainError>;
//! }
//!
//! // The handler only needs to know about the trait
//! pub struct SubmitProductUpdateHandler {
//!     processes: Arc<dyn ProcessStore>,
//! }
//! ```

use async_trait::async_trait;
use std::fmt::Debug;

use super::DomainError;

/// Trait for entities that expose their identifier.
///
/// Implemented by every aggregate held in a store; lets the generic
/// in-memory adapter locate items for replace-by-id upserts.
pub trait Identified {
    /// The identifier type for the entity.
    type Id: Copy + Eq + Debug + Send + Sync + 'static;

    /// Returns the entity's identifier.
    fn id(&self) -> Self::Id;
}

/// Base trait for top-level list stores.
///
/// # Type Parameters
///
/// - `T`: The entity type held in the list
/// - `ID`: The identifier type for the entity (e.g., `ProcessId`)
///
/// # Semantics
///
/// `upsert` replaces the item with a matching id in place, or prepends a
/// new item when no match exists - mirroring how each screen's list state
/// is replaced wholesale after a wizard submission. `list` returns items
/// in list order (most recently prepended first).
#[async_trait]
pub trait Store<T, ID>: Send + Sync
where
    T: Send + Sync,
    ID: Send + Sync + Debug + 'static,
{
    /// Returns all items in list order.
    async fn list(&self) -> Result<Vec<T>, DomainError>;

    /// Finds an item by its identifier.
    ///
    /// Returns `Ok(None)` if the item doesn't exist.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, DomainError>;

    /// Replaces the item with a matching id, or prepends a new one.
    async fn upsert(&self, entity: &T) -> Result<(), DomainError>;

    /// Removes an item by its identifier.
    ///
    /// # Errors
    ///
    /// Returns an error when the item doesn't exist.
    async fn remove(&self, id: ID) -> Result<(), DomainError>;

    /// Checks if an item with the given id exists.
    ///
    /// Default implementation uses `find_by_id`. Override if a more
    /// efficient check is available.
    async fn exists(&self, id: ID) -> Result<bool, DomainError> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}
