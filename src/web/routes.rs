//! Route table.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | / | `index` |
//! | GET | /health | `health` |
//! | GET | /error | `error_page` |
//! | GET | /items | `list` |
//! | GET | /items/new | `create_form` |
//! | POST | /items | `create` |
//! | GET | /items/{id} | `detail` |
//! | POST | /items/{id} | `edit` |
//! | GET | /items/{id}/edit | `edit_form` |
//! | GET | /items/{id}/delete | `delete_confirm` |
//! | POST | /items/{id}/delete | `delete` |
//!
//! Every `/items` route sits behind [`require_identity`].

use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use super::auth::require_identity;
use super::handlers::{
    create, create_form, delete, delete_confirm, detail, edit, edit_form, error_page, health,
    index, list,
};
use super::state::AppState;

/// Builds the application router.
pub fn create_router(state: AppState) -> Router {
    let items = Router::new()
        .route("/items", get(list).post(create))
        .route("/items/new", get(create_form))
        .route("/items/{id}", get(detail).post(edit))
        .route("/items/{id}/edit", get(edit_form))
        .route("/items/{id}/delete", get(delete_confirm).post(delete))
        .route_layer(from_fn_with_state(state.clone(), require_identity));

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/error", get(error_page))
        .merge(items)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
