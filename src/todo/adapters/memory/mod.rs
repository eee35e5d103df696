//! In-memory adapters for todo item management.

mod repository;

pub use repository::InMemoryTodoItemRepository;
