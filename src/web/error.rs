//! HTTP-facing errors.

use std::sync::LazyLock;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use super::views::{ViewError, ViewRenderer};
use crate::todo::services::TodoServiceError;

static ERROR_VIEWS: LazyLock<Option<ViewRenderer>> = LazyLock::new(|| {
    ViewRenderer::new()
        .inspect_err(|err| tracing::error!(error = %err, "error page templates failed to load"))
        .ok()
});

/// Errors a handler turns into an HTTP response.
#[derive(Debug, Error)]
pub enum WebError {
    /// No owned item exists at the requested identifier.
    #[error("not found")]
    NotFound,

    /// The request carried no usable identity.
    #[error("authentication required")]
    Unauthenticated,

    /// The anti-forgery token was missing or wrong.
    #[error("anti-forgery token missing or invalid")]
    Forgery,

    /// The request body or query could not be bound.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Storage, rendering, or concurrency failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl WebError {
    /// Returns the status code sent for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Forgery | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    const fn public_message(&self) -> &'static str {
        match self {
            Self::NotFound => "The requested item could not be found.",
            Self::Unauthenticated => "You must be signed in to manage your TODOs.",
            Self::Forgery => "The form has expired or was not issued by this site.",
            Self::BadRequest(_) => "The request could not be understood.",
            Self::Internal(_) => "Something went wrong. Please try again later.",
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.public_message();
        let body = ERROR_VIEWS
            .as_ref()
            .and_then(|views| {
                views
                    .error(message)
                    .inspect_err(|err| tracing::error!(error = %err, "error page failed to render"))
                    .ok()
            })
            .unwrap_or_else(|| fallback_page(status, message));
        (status, Html(body)).into_response()
    }
}

fn fallback_page(status: StatusCode, message: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><title>{code}</title></head>\
         <body><h1>{code}</h1><p>{message}</p></body></html>",
        code = status.as_u16(),
    )
}

impl From<TodoServiceError> for WebError {
    fn from(err: TodoServiceError) -> Self {
        match err {
            TodoServiceError::NotFound(_) => Self::NotFound,
            TodoServiceError::Validation(errors) => Self::BadRequest(errors.to_string()),
            TodoServiceError::Conflict(id) => {
                tracing::error!(item_id = %id, "todo item was modified concurrently");
                Self::Internal(format!("concurrent modification of item {id}"))
            }
            TodoServiceError::Repository(source) => {
                tracing::error!(error = %source, "todo item storage failed");
                Self::Internal(source.to_string())
            }
        }
    }
}

impl From<ViewError> for WebError {
    fn from(err: ViewError) -> Self {
        tracing::error!(error = %err, "view rendering failed");
        Self::Internal(err.to_string())
    }
}
