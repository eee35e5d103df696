//! Domain model for personal todo items.
//!
//! Items are owned by exactly one user. The domain validates item content,
//! enforces the done/in-process rule, and describes owner-scoped list
//! queries while keeping storage concerns outside of the domain boundary.

mod draft;
mod error;
mod ids;
mod item;
mod query;

pub use draft::{
    DUE_DATE_FORMAT, ItemDescription, ItemField, ItemStatus, ItemTitle, MAX_DESCRIPTION_CHARS,
    TodoDraft, TodoItemInput, TodoValidationErrors, ValidationIssue, parse_due_date,
};
pub use error::TodoDomainError;
pub use ids::{MAX_OWNER_ID_CHARS, RowVersion, TodoItemId, UserId};
pub use item::{NewTodoItem, PersistedTodoItemData, TodoItem};
pub use query::{ItemQuery, SearchTerm, SortOrder, SortToggles};
