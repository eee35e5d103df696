//! Todomvc: a personal todo list web application.
//!
//! Signed-in users create, view, edit, delete, search, and sort their own
//! todo items through server-rendered pages.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`todo`]: Todo item domain, repository ports, adapters, and services
//! - [`web`]: HTTP routes, views, identity, and anti-forgery handling

pub mod todo;
pub mod web;
