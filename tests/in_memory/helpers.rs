//! Shared test helpers for in-memory repository integration tests.

use mockable::DefaultClock;
use rstest::fixture;
use std::io;
use todomvc::todo::{
    adapters::memory::InMemoryTodoItemRepository,
    domain::{NewTodoItem, TodoItemInput, UserId},
};
use tokio::runtime::Runtime;

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Provides a fresh in-memory repository for each test.
#[fixture]
pub fn repo() -> InMemoryTodoItemRepository {
    InMemoryTodoItemRepository::new()
}

/// Parses a user identifier.
pub fn user(name: &str) -> UserId {
    UserId::new(name).expect("valid user id")
}

/// Builds an insert model with the given content.
pub fn new_item(owner: &str, title: &str, description: &str, due_date: &str) -> NewTodoItem {
    let draft = TodoItemInput {
        title: title.to_owned(),
        description: description.to_owned(),
        due_date: due_date.to_owned(),
        in_process: false,
        is_done: false,
    }
    .validate()
    .expect("valid item input");
    NewTodoItem::new(user(owner), draft, &DefaultClock)
}
