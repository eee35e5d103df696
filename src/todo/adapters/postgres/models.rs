//! Diesel row models for todo item persistence.

use super::schema::todo_items;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

/// Query result row for todo items.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = todo_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TodoItemRow {
    /// Item identifier.
    pub id: i64,
    /// Owner identifier.
    pub owner_id: String,
    /// Item title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Due date.
    pub due_date: NaiveDate,
    /// In-process flag.
    pub in_process: bool,
    /// Completion flag.
    pub is_done: bool,
    /// Concurrency token.
    pub version: i64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for todo items; the identifier comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = todo_items)]
pub struct NewTodoItemRow {
    /// Owner identifier.
    pub owner_id: String,
    /// Item title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Due date.
    pub due_date: NaiveDate,
    /// In-process flag.
    pub in_process: bool,
    /// Completion flag.
    pub is_done: bool,
    /// Initial concurrency token.
    pub version: i64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Initial update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Changeset written by a version-guarded update.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = todo_items)]
#[diesel(treat_none_as_null = true)]
pub struct TodoItemChanges {
    /// Item title.
    pub title: String,
    /// Optional description; `None` clears the column.
    pub description: Option<String>,
    /// Due date.
    pub due_date: NaiveDate,
    /// In-process flag.
    pub in_process: bool,
    /// Completion flag.
    pub is_done: bool,
    /// Version the row moves to.
    pub version: i64,
    /// Update timestamp.
    pub updated_at: DateTime<Utc>,
}
