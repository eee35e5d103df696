//! In-memory repository for todo items.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::todo::{
    domain::{ItemQuery, NewTodoItem, TodoItem, TodoItemId, UserId},
    ports::{TodoItemRepository, TodoRepositoryError, TodoRepositoryResult, UpdateOutcome},
};

/// Thread-safe in-memory todo item repository.
///
/// Identifiers are allocated from a monotonically increasing counter, the
/// way a serial column would.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoItemRepository {
    state: Arc<RwLock<InMemoryTodoState>>,
}

#[derive(Debug, Default)]
struct InMemoryTodoState {
    items: BTreeMap<TodoItemId, TodoItem>,
    last_id: i64,
}

impl InMemoryTodoItemRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TodoRepositoryResult<RwLockReadGuard<'_, InMemoryTodoState>> {
        self.state.read().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TodoRepositoryResult<RwLockWriteGuard<'_, InMemoryTodoState>> {
        self.state.write().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

fn owned_by<'a>(item: &'a TodoItem, owner_id: &UserId) -> Option<&'a TodoItem> {
    (item.owner_id() == owner_id).then_some(item)
}

#[async_trait]
impl TodoItemRepository for InMemoryTodoItemRepository {
    async fn find_by_owner(&self, query: &ItemQuery) -> TodoRepositoryResult<Vec<TodoItem>> {
        let state = self.read()?;
        Ok(query.apply(state.items.values()))
    }

    async fn find_by_owner_and_id(
        &self,
        owner_id: &UserId,
        id: TodoItemId,
    ) -> TodoRepositoryResult<Option<TodoItem>> {
        let state = self.read()?;
        Ok(state
            .items
            .get(&id)
            .and_then(|item| owned_by(item, owner_id))
            .cloned())
    }

    async fn insert(&self, item: &NewTodoItem) -> TodoRepositoryResult<TodoItem> {
        let mut state = self.write()?;
        let next = state.last_id.checked_add(1).ok_or_else(|| {
            TodoRepositoryError::persistence(std::io::Error::other("identifier space exhausted"))
        })?;
        let id = TodoItemId::new(next).map_err(TodoRepositoryError::persistence)?;
        let stored = item.clone().into_stored(id);
        state.last_id = next;
        state.items.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, item: &TodoItem) -> TodoRepositoryResult<UpdateOutcome> {
        let mut state = self.write()?;
        let Some(current) = state
            .items
            .get(&item.id())
            .and_then(|existing| owned_by(existing, item.owner_id()))
        else {
            return Ok(UpdateOutcome::NotFound);
        };

        if current.version() != item.version() {
            return Ok(UpdateOutcome::Conflict);
        }

        let updated = item.clone().with_version(item.version().next());
        state.items.insert(item.id(), updated.clone());
        Ok(UpdateOutcome::Updated(updated))
    }

    async fn delete(&self, owner_id: &UserId, id: TodoItemId) -> TodoRepositoryResult<bool> {
        let mut state = self.write()?;
        let is_owned = state
            .items
            .get(&id)
            .is_some_and(|item| item.owner_id() == owner_id);
        if is_owned {
            state.items.remove(&id);
        }
        Ok(is_owned)
    }
}
