//! Repository port for owner-scoped todo item persistence.

use crate::todo::domain::{ItemQuery, NewTodoItem, TodoItem, TodoItemId, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for todo item repository operations.
pub type TodoRepositoryResult<T> = Result<T, TodoRepositoryError>;

/// Outcome of a version-guarded update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The row matched the expected version and now holds the new content.
    Updated(TodoItem),
    /// No row with this identifier exists for the owner any more.
    NotFound,
    /// The row exists but was changed since it was read.
    Conflict,
}

/// Todo item persistence contract.
///
/// Every read and write is scoped to an owner; implementations never return
/// or touch another user's rows.
#[async_trait]
pub trait TodoItemRepository: Send + Sync {
    /// Returns the owner's items matching the query, in the query's order.
    async fn find_by_owner(&self, query: &ItemQuery) -> TodoRepositoryResult<Vec<TodoItem>>;

    /// Finds one item by identifier, provided `owner_id` owns it.
    ///
    /// Returns `None` when the item is missing or belongs to someone else.
    async fn find_by_owner_and_id(
        &self,
        owner_id: &UserId,
        id: TodoItemId,
    ) -> TodoRepositoryResult<Option<TodoItem>>;

    /// Stores a new item and returns it with its generated identifier.
    async fn insert(&self, item: &NewTodoItem) -> TodoRepositoryResult<TodoItem>;

    /// Writes `item` if the stored row still carries `item.version()`.
    ///
    /// On success the returned item carries the bumped version.
    async fn update(&self, item: &TodoItem) -> TodoRepositoryResult<UpdateOutcome>;

    /// Removes the owner's item; returns whether a row was deleted.
    async fn delete(&self, owner_id: &UserId, id: TodoItemId) -> TodoRepositoryResult<bool>;
}

/// Errors returned by todo item repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TodoRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
