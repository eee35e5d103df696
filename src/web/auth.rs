//! Authentication middleware for the item routes.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use super::error::WebError;
use super::identity::RequestContext;
use super::state::AppState;

/// Resolves the caller and stores a [`RequestContext`] in the request
/// extensions; anonymous requests are answered with 401.
pub async fn require_identity(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(user_id) = state.identity().resolve(request.headers()) else {
        tracing::warn!(
            method = %request.method(),
            path = request.uri().path(),
            "rejected unauthenticated request"
        );
        return WebError::Unauthenticated.into_response();
    };

    let context = RequestContext::new(user_id);
    tracing::debug!(
        request_id = %context.request_id(),
        user_id = %context.user_id(),
        "request authenticated"
    );
    request.extensions_mut().insert(context);
    next.run(request).await
}
