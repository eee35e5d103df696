//! HTTP surface of the todo application.
//!
//! An axum router serving server-rendered pages. Identity comes from an
//! upstream authenticator through [`identity::IdentityProvider`]; every
//! form is protected by an anti-forgery token from [`csrf::CsrfTokens`].

pub mod auth;
pub mod config;
pub mod csrf;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod identity;
pub mod routes;
pub mod state;
pub mod views;

pub use config::{AppConfig, ConfigError};
pub use routes::create_router;
pub use state::{AppState, AppTodoService};
