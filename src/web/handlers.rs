//! Request handlers for the item pages.
//!
//! Handlers translate HTTP into service calls. The owner always comes from
//! the [`RequestContext`] installed by the authentication middleware.

use axum::Extension;
use axum::Json;
use axum::extract::rejection::{FormRejection, QueryRejection};
use axum::extract::{Form, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Serialize;

use super::error::WebError;
use super::forms::{DeleteForm, ErrorParams, ListParams, TodoItemForm};
use super::identity::RequestContext;
use super::state::AppState;
use super::views::{FormErrors, FormPage, FormView, ItemPage, ListPage};
use crate::todo::domain::{ItemQuery, SearchTerm, SortOrder, SortToggles, TodoItemId};
use crate::todo::services::{EditTodoItemRequest, TodoServiceError};

/// Location the list page falls back to when items cannot be loaded.
pub const ITEMS_UNAVAILABLE_LOCATION: &str = "/error?reason=items-unavailable";

const ITEMS_UNAVAILABLE_MESSAGE: &str =
    "An error occurred while loading your TODOs. Please try again later.";
const GENERIC_ERROR_MESSAGE: &str = "An error occurred while processing your request.";

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// `GET /health`
#[expect(clippy::unused_async, reason = "axum handlers are async")]
pub async fn health() -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse {
        status: "healthy".to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
    };
    (StatusCode::OK, Json(response))
}

/// `GET /`
#[expect(clippy::unused_async, reason = "axum handlers are async")]
pub async fn index() -> Redirect {
    Redirect::to("/items")
}

/// `GET /error`
///
/// # Errors
///
/// Returns [`WebError::Internal`] when the page fails to render.
#[expect(clippy::unused_async, reason = "axum handlers are async")]
pub async fn error_page(
    State(state): State<AppState>,
    params: Result<Query<ErrorParams>, QueryRejection>,
) -> Result<Html<String>, WebError> {
    let reason = params.ok().and_then(|Query(params)| params.reason);
    let message = match reason.as_deref() {
        Some("items-unavailable") => ITEMS_UNAVAILABLE_MESSAGE,
        _ => GENERIC_ERROR_MESSAGE,
    };
    Ok(Html(state.views().error(message)?))
}

/// `GET /items`
///
/// Storage failures are logged and answered with a redirect to the error
/// page.
///
/// # Errors
///
/// Returns [`WebError::BadRequest`] for a malformed query string and
/// [`WebError::Internal`] when the page fails to render.
pub async fn list(
    State(state): State<AppState>,
    Extension(context): Extension<RequestContext>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Response, WebError> {
    let Query(params) = params.map_err(|rejection| WebError::BadRequest(rejection.body_text()))?;
    let query = ItemQuery::for_owner(context.user_id().clone())
        .with_search(SearchTerm::parse(params.search.as_deref()))
        .with_sort(SortOrder::from_key(params.sort.as_deref()));

    let items = match state.items().list(&query).await {
        Ok(items) => items,
        Err(err) => {
            tracing::error!(
                request_id = %context.request_id(),
                error = %err,
                "failed to load todo items"
            );
            return Ok(Redirect::to(ITEMS_UNAVAILABLE_LOCATION).into_response());
        }
    };

    let html = state.views().list(ListPage {
        items: &items,
        search: params.search.as_deref().unwrap_or_default(),
        toggles: SortToggles::for_key(params.sort.as_deref()),
    })?;
    Ok(Html(html).into_response())
}

/// `GET /items/{id}`
///
/// # Errors
///
/// Returns [`WebError::NotFound`] unless the caller owns an item at `id`.
pub async fn detail(
    State(state): State<AppState>,
    Extension(context): Extension<RequestContext>,
    Path(raw_id): Path<String>,
) -> Result<Html<String>, WebError> {
    show_item(&state, &context, &raw_id, ItemPage::Details).await
}

/// `GET /items/{id}/delete`
///
/// # Errors
///
/// Returns [`WebError::NotFound`] unless the caller owns an item at `id`.
pub async fn delete_confirm(
    State(state): State<AppState>,
    Extension(context): Extension<RequestContext>,
    Path(raw_id): Path<String>,
) -> Result<Html<String>, WebError> {
    show_item(&state, &context, &raw_id, ItemPage::Delete).await
}

/// `GET /items/new`
///
/// # Errors
///
/// Returns [`WebError::Internal`] when the page fails to render.
#[expect(clippy::unused_async, reason = "axum handlers are async")]
pub async fn create_form(
    State(state): State<AppState>,
    Extension(context): Extension<RequestContext>,
) -> Result<Response, WebError> {
    render_form(
        &state,
        &context,
        FormPage::Create,
        &FormView::default(),
        &FormErrors::default(),
        StatusCode::OK,
    )
}

/// `POST /items`
///
/// # Errors
///
/// Returns [`WebError::BadRequest`] for unbindable bodies,
/// [`WebError::Forgery`] for a bad token, and [`WebError::Internal`] when
/// storage fails.
pub async fn create(
    State(state): State<AppState>,
    Extension(context): Extension<RequestContext>,
    form: Result<Form<TodoItemForm>, FormRejection>,
) -> Result<Response, WebError> {
    let form = bind(&context, form)?;
    verify_token(&state, &context, &form.csrf_token)?;

    match state.items().create(context.user_id(), &form.to_input()).await {
        Ok(item) => {
            tracing::info!(
                request_id = %context.request_id(),
                item_id = %item.id(),
                "todo item created"
            );
            Ok(Redirect::to("/items").into_response())
        }
        Err(TodoServiceError::Validation(errors)) => render_form(
            &state,
            &context,
            FormPage::Create,
            &FormView::from(&form),
            &FormErrors::from(&errors),
            StatusCode::UNPROCESSABLE_ENTITY,
        ),
        Err(err) => Err(err.into()),
    }
}

/// `GET /items/{id}/edit`
///
/// # Errors
///
/// Returns [`WebError::NotFound`] unless the caller owns an item at `id`.
pub async fn edit_form(
    State(state): State<AppState>,
    Extension(context): Extension<RequestContext>,
    Path(raw_id): Path<String>,
) -> Result<Response, WebError> {
    let id = TodoItemId::parse(&raw_id).ok_or(WebError::NotFound)?;
    let item = state.items().find(context.user_id(), id).await?;
    render_form(
        &state,
        &context,
        FormPage::Edit,
        &FormView::from(&item),
        &FormErrors::default(),
        StatusCode::OK,
    )
}

/// `POST /items/{id}`
///
/// # Errors
///
/// Returns [`WebError::NotFound`] when the identifiers disagree or the item
/// is not owned by the caller, [`WebError::Forgery`] for a bad token, and
/// [`WebError::Internal`] on a concurrent modification or storage failure.
pub async fn edit(
    State(state): State<AppState>,
    Extension(context): Extension<RequestContext>,
    Path(raw_id): Path<String>,
    form: Result<Form<TodoItemForm>, FormRejection>,
) -> Result<Response, WebError> {
    let form = bind(&context, form)?;
    verify_token(&state, &context, &form.csrf_token)?;
    let id = TodoItemId::parse(&raw_id).ok_or(WebError::NotFound)?;

    let request = EditTodoItemRequest::new(id, form.item_id(), form.to_input());
    match state.items().edit(context.user_id(), request).await {
        Ok(item) => {
            tracing::info!(
                request_id = %context.request_id(),
                item_id = %item.id(),
                version = item.version().value(),
                "todo item updated"
            );
            Ok(Redirect::to("/items").into_response())
        }
        Err(TodoServiceError::Validation(errors)) => render_form(
            &state,
            &context,
            FormPage::Edit,
            &FormView::from(&form),
            &FormErrors::from(&errors),
            StatusCode::UNPROCESSABLE_ENTITY,
        ),
        Err(err) => Err(err.into()),
    }
}

/// `POST /items/{id}/delete`
///
/// Missing or foreign items are ignored.
///
/// # Errors
///
/// Returns [`WebError::Forgery`] for a bad token and [`WebError::Internal`]
/// when storage fails.
pub async fn delete(
    State(state): State<AppState>,
    Extension(context): Extension<RequestContext>,
    Path(raw_id): Path<String>,
    form: Result<Form<DeleteForm>, FormRejection>,
) -> Result<Redirect, WebError> {
    let form = bind(&context, form)?;
    verify_token(&state, &context, &form.csrf_token)?;

    if let Some(id) = TodoItemId::parse(&raw_id) {
        let removed = state.items().delete(context.user_id(), id).await?;
        tracing::info!(
            request_id = %context.request_id(),
            item_id = %id,
            removed,
            "todo item delete processed"
        );
    }
    Ok(Redirect::to("/items"))
}

async fn show_item(
    state: &AppState,
    context: &RequestContext,
    raw_id: &str,
    page: ItemPage,
) -> Result<Html<String>, WebError> {
    let id = TodoItemId::parse(raw_id).ok_or(WebError::NotFound)?;
    let item = state.items().find(context.user_id(), id).await?;
    let token = state.csrf().token_for(context.user_id());
    Ok(Html(state.views().item(page, &item, &token)?))
}

fn render_form(
    state: &AppState,
    context: &RequestContext,
    page: FormPage,
    values: &FormView,
    errors: &FormErrors,
    status: StatusCode,
) -> Result<Response, WebError> {
    let token = state.csrf().token_for(context.user_id());
    let html = state.views().form(page, values, errors, &token)?;
    Ok((status, Html(html)).into_response())
}

fn bind<T>(
    context: &RequestContext,
    form: Result<Form<T>, FormRejection>,
) -> Result<T, WebError> {
    form.map(|Form(value)| value).map_err(|rejection| {
        tracing::warn!(
            request_id = %context.request_id(),
            reason = %rejection.body_text(),
            "rejected unbindable form"
        );
        WebError::BadRequest(rejection.body_text())
    })
}

fn verify_token(
    state: &AppState,
    context: &RequestContext,
    submitted: &str,
) -> Result<(), WebError> {
    state
        .csrf()
        .verify(context.user_id(), submitted)
        .map_err(|_| {
            tracing::warn!(
                request_id = %context.request_id(),
                "rejected form with invalid anti-forgery token"
            );
            WebError::Forgery
        })
}
