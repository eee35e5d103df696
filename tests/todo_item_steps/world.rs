//! Shared world state for todo item BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use todomvc::todo::{
    adapters::memory::InMemoryTodoItemRepository,
    domain::{TodoItem, TodoItemInput, UserId},
    services::{TodoItemService, TodoServiceError},
};

/// Service type used by the BDD world.
pub type TestTodoService = TodoItemService<InMemoryTodoItemRepository, DefaultClock>;

/// Scenario world for todo item behaviour tests.
pub struct TodoWorld {
    pub service: TestTodoService,
    pub created: HashMap<String, TodoItem>,
    pub last_list: Vec<TodoItem>,
    pub last_create: Option<Result<TodoItem, TodoServiceError>>,
    pub last_edit: Option<Result<TodoItem, TodoServiceError>>,
}

impl TodoWorld {
    /// Creates a world with an empty item store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: TodoItemService::new(
                Arc::new(InMemoryTodoItemRepository::new()),
                Arc::new(DefaultClock),
            ),
            created: HashMap::new(),
            last_list: Vec::new(),
            last_create: None,
            last_edit: None,
        }
    }

    /// Returns the item created under `title` earlier in the scenario.
    pub fn created_item(&self, title: &str) -> Result<&TodoItem, eyre::Report> {
        self.created
            .get(title)
            .ok_or_else(|| eyre::eyre!("no item titled {title:?} was created in this scenario"))
    }
}

impl Default for TodoWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TodoWorld {
    TodoWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Parses a user identifier named in a step.
pub fn user(name: &str) -> Result<UserId, eyre::Report> {
    UserId::new(name).map_err(|err| eyre::eyre!("invalid user in scenario: {err}"))
}

/// Builds form input from the progress phrase used in steps.
pub fn item_input(
    title: &str,
    due_date: &str,
    progress: &str,
    is_done: bool,
) -> Result<TodoItemInput, eyre::Report> {
    let in_process = match progress {
        "in process" => true,
        "not started" => false,
        other => return Err(eyre::eyre!("unknown progress phrase {other:?}")),
    };
    Ok(TodoItemInput {
        title: title.to_owned(),
        description: String::new(),
        due_date: due_date.to_owned(),
        in_process,
        is_done,
    })
}
