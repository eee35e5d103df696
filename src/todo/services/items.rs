//! Service layer for owner-scoped todo item management.

use crate::todo::{
    domain::{
        ItemQuery, NewTodoItem, TodoDomainError, TodoItem, TodoItemId, TodoItemInput,
        TodoValidationErrors, UserId,
    },
    ports::{TodoItemRepository, TodoRepositoryError, UpdateOutcome},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for editing an existing item.
///
/// The path identifier names the item being edited; the body identifier is
/// the one echoed back by the edit form and must agree with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTodoItemRequest {
    path_id: TodoItemId,
    body_id: Option<TodoItemId>,
    input: TodoItemInput,
}

impl EditTodoItemRequest {
    /// Creates an edit request.
    #[must_use]
    pub const fn new(
        path_id: TodoItemId,
        body_id: Option<TodoItemId>,
        input: TodoItemInput,
    ) -> Self {
        Self {
            path_id,
            body_id,
            input,
        }
    }

    /// Returns the identifier taken from the request path.
    #[must_use]
    pub const fn path_id(&self) -> TodoItemId {
        self.path_id
    }

    /// Returns the submitted field values.
    #[must_use]
    pub const fn input(&self) -> &TodoItemInput {
        &self.input
    }
}

/// Service-level errors for todo item operations.
#[derive(Debug, Error)]
pub enum TodoServiceError {
    /// Submitted values failed validation; nothing was persisted.
    #[error(transparent)]
    Validation(#[from] TodoValidationErrors),

    /// The item does not exist or is owned by someone else.
    #[error("todo item not found: {0}")]
    NotFound(TodoItemId),

    /// The item changed between being read and written.
    #[error("todo item {0} was modified concurrently")]
    Conflict(TodoItemId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TodoRepositoryError),
}

/// Result type for todo item service operations.
pub type TodoServiceResult<T> = Result<T, TodoServiceError>;

/// Todo item orchestration service.
///
/// Every operation takes the owner explicitly; the service never decides
/// who the current user is.
pub struct TodoItemService<R, C>
where
    R: TodoItemRepository + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TodoItemService<R, C>
where
    R: TodoItemRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TodoItemService<R, C>
where
    R: TodoItemRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new todo item service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Lists the owner's items with the query's search and ordering.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Repository`] when the lookup fails.
    pub async fn list(&self, query: &ItemQuery) -> TodoServiceResult<Vec<TodoItem>> {
        Ok(self.repository.find_by_owner(query).await?)
    }

    /// Fetches one owned item.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::NotFound`] when the item is missing or
    /// foreign, or [`TodoServiceError::Repository`] when the lookup fails.
    pub async fn find(&self, owner_id: &UserId, id: TodoItemId) -> TodoServiceResult<TodoItem> {
        self.repository
            .find_by_owner_and_id(owner_id, id)
            .await?
            .ok_or(TodoServiceError::NotFound(id))
    }

    /// Validates `input` and stores it as a new item owned by `owner_id`.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Validation`] when any field constraint or
    /// the done/in-process rule fails, or [`TodoServiceError::Repository`]
    /// when the insert fails.
    pub async fn create(
        &self,
        owner_id: &UserId,
        input: &TodoItemInput,
    ) -> TodoServiceResult<TodoItem> {
        let draft = input.validate()?;
        let new_item = NewTodoItem::new(owner_id.clone(), draft, &*self.clock);
        Ok(self.repository.insert(&new_item).await?)
    }

    /// Applies an edit to an owned item.
    ///
    /// Ownership is taken from `owner_id`, never from the submission. The
    /// submission is validated before anything is written, so a rejected edit
    /// leaves the stored item untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::NotFound`] when the identifiers disagree,
    /// the item is not owned by `owner_id`, or it disappears before the
    /// write; [`TodoServiceError::Validation`] when the submission is
    /// invalid; [`TodoServiceError::Conflict`] when the item changed since it
    /// was read; or [`TodoServiceError::Repository`] on storage failure.
    pub async fn edit(
        &self,
        owner_id: &UserId,
        request: EditTodoItemRequest,
    ) -> TodoServiceResult<TodoItem> {
        let id = request.path_id;
        if request.body_id != Some(id) {
            return Err(TodoServiceError::NotFound(id));
        }

        let mut item = self.find(owner_id, id).await?;
        let draft = request.input.validate()?;
        item.revise(owner_id.clone(), draft, &*self.clock);

        match self.repository.update(&item).await? {
            UpdateOutcome::Updated(updated) => Ok(updated),
            UpdateOutcome::NotFound => Err(TodoServiceError::NotFound(id)),
            UpdateOutcome::Conflict => Err(TodoServiceError::Conflict(id)),
        }
    }

    /// Deletes an owned item.
    ///
    /// Missing or foreign items are ignored; the return value reports
    /// whether anything was removed.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Repository`] when storage fails.
    pub async fn delete(&self, owner_id: &UserId, id: TodoItemId) -> TodoServiceResult<bool> {
        if self
            .repository
            .find_by_owner_and_id(owner_id, id)
            .await?
            .is_none()
        {
            return Ok(false);
        }
        Ok(self.repository.delete(owner_id, id).await?)
    }
}

impl TodoServiceError {
    /// Returns whether this error is the done/in-process rule.
    #[must_use]
    pub fn is_done_without_in_process(&self) -> bool {
        matches!(self, Self::Validation(errors) if errors.contains(&TodoDomainError::DoneWithoutInProcess))
    }
}
