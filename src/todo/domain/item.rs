//! Todo item aggregate and the insert model that precedes it.

use super::{ItemDescription, ItemStatus, ItemTitle, RowVersion, TodoDraft, TodoItemId, UserId};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Item that has not been stored yet and therefore has no identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodoItem {
    owner_id: UserId,
    draft: TodoDraft,
    created_at: DateTime<Utc>,
}

impl NewTodoItem {
    /// Creates an insert model owned by `owner_id`.
    #[must_use]
    pub fn new(owner_id: UserId, draft: TodoDraft, clock: &impl Clock) -> Self {
        Self {
            owner_id,
            draft,
            created_at: clock.utc(),
        }
    }

    /// Returns the owner.
    #[must_use]
    pub const fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    /// Returns the validated content.
    #[must_use]
    pub const fn draft(&self) -> &TodoDraft {
        &self.draft
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Converts the insert model into a stored item with the given
    /// store-generated identifier.
    #[must_use]
    pub fn into_stored(self, id: TodoItemId) -> TodoItem {
        let (title, description, due_date, status) = self.draft.into_parts();
        TodoItem {
            id,
            owner_id: self.owner_id,
            title,
            description,
            due_date,
            status,
            version: RowVersion::INITIAL,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

/// Todo item aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    id: TodoItemId,
    owner_id: UserId,
    title: ItemTitle,
    description: Option<ItemDescription>,
    due_date: NaiveDate,
    status: ItemStatus,
    version: RowVersion,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTodoItemData {
    /// Persisted identifier.
    pub id: TodoItemId,
    /// Persisted owner.
    pub owner_id: UserId,
    /// Persisted title.
    pub title: ItemTitle,
    /// Persisted description, if any.
    pub description: Option<ItemDescription>,
    /// Persisted due date.
    pub due_date: NaiveDate,
    /// Persisted progress flags.
    pub status: ItemStatus,
    /// Persisted concurrency token.
    pub version: RowVersion,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl TodoItem {
    /// Reconstructs an item from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTodoItemData) -> Self {
        Self {
            id: data.id,
            owner_id: data.owner_id,
            title: data.title,
            description: data.description,
            due_date: data.due_date,
            status: data.status,
            version: data.version,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the identifier.
    #[must_use]
    pub const fn id(&self) -> TodoItemId {
        self.id
    }

    /// Returns the owner.
    #[must_use]
    pub const fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &ItemTitle {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&ItemDescription> {
        self.description.as_ref()
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Returns the progress flags.
    #[must_use]
    pub const fn status(&self) -> ItemStatus {
        self.status
    }

    /// Returns whether work on the item has started.
    #[must_use]
    pub const fn in_process(&self) -> bool {
        self.status.in_process()
    }

    /// Returns whether the item is complete.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.status.is_done()
    }

    /// Returns the version this copy was read at.
    #[must_use]
    pub const fn version(&self) -> RowVersion {
        self.version
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the content with `draft` and pins ownership to `owner_id`.
    ///
    /// The version is left untouched: it still names the row version the
    /// update must be applied against.
    pub fn revise(&mut self, owner_id: UserId, draft: TodoDraft, clock: &impl Clock) {
        let (title, description, due_date, status) = draft.into_parts();
        self.owner_id = owner_id;
        self.title = title;
        self.description = description;
        self.due_date = due_date;
        self.status = status;
        self.updated_at = clock.utc();
    }

    /// Returns a copy stamped with the version a successful update produced.
    #[must_use]
    pub fn with_version(mut self, version: RowVersion) -> Self {
        self.version = version;
        self
    }
}
