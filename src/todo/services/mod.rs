//! Application services for todo item management.

mod items;

pub use items::{EditTodoItemRequest, TodoItemService, TodoServiceError, TodoServiceResult};
