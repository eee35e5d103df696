//! Server-rendered HTML views.
//!
//! Templates are compiled into the binary and rendered with `minijinja`;
//! `.html` templates are auto-escaped.

use crate::todo::domain::{
    DUE_DATE_FORMAT, ItemField, SortToggles, TodoItem, TodoValidationErrors,
};
use minijinja::{Environment, context};
use serde::Serialize;
use thiserror::Error;

use super::forms::TodoItemForm;

const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../../templates/layout.html")),
    ("error.html", include_str!("../../templates/error.html")),
    ("items/index.html", include_str!("../../templates/items/index.html")),
    ("items/details.html", include_str!("../../templates/items/details.html")),
    ("items/_fields.html", include_str!("../../templates/items/_fields.html")),
    ("items/create.html", include_str!("../../templates/items/create.html")),
    ("items/edit.html", include_str!("../../templates/items/edit.html")),
    ("items/delete.html", include_str!("../../templates/items/delete.html")),
];

/// Template loading or rendering failure.
#[derive(Debug, Error)]
#[error("failed to render template '{template}': {reason}")]
pub struct ViewError {
    template: String,
    reason: String,
}

impl ViewError {
    fn new(template: &str, error: &minijinja::Error) -> Self {
        Self {
            template: template.to_owned(),
            reason: error.to_string(),
        }
    }
}

/// Display model of a stored item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemView {
    id: i64,
    title: String,
    description: Option<String>,
    due_date: String,
    in_process: bool,
    is_done: bool,
}

impl From<&TodoItem> for ItemView {
    fn from(item: &TodoItem) -> Self {
        Self {
            id: item.id().value(),
            title: item.title().as_str().to_owned(),
            description: item
                .description()
                .map(|description| description.as_str().to_owned()),
            due_date: item.due_date().format(DUE_DATE_FORMAT).to_string(),
            in_process: item.in_process(),
            is_done: item.is_done(),
        }
    }
}

/// Values shown in a create or edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormView {
    id: String,
    title: String,
    description: String,
    due_date: String,
    in_process: bool,
    is_done: bool,
}

impl From<&TodoItem> for FormView {
    fn from(item: &TodoItem) -> Self {
        Self {
            id: item.id().to_string(),
            title: item.title().as_str().to_owned(),
            description: item
                .description()
                .map(|description| description.as_str().to_owned())
                .unwrap_or_default(),
            due_date: item.due_date().format(DUE_DATE_FORMAT).to_string(),
            in_process: item.in_process(),
            is_done: item.is_done(),
        }
    }
}

impl From<&TodoItemForm> for FormView {
    fn from(form: &TodoItemForm) -> Self {
        Self {
            id: form.id.clone().unwrap_or_default(),
            title: form.title.clone(),
            description: form.description.clone(),
            due_date: form.due_date.clone(),
            in_process: form.in_process,
            is_done: form.is_done,
        }
    }
}

/// Validation messages grouped the way forms display them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormErrors {
    summary: Vec<String>,
    title: Vec<String>,
    description: Vec<String>,
    due_date: Vec<String>,
}

impl From<&TodoValidationErrors> for FormErrors {
    fn from(errors: &TodoValidationErrors) -> Self {
        Self {
            summary: errors.form_messages().collect(),
            title: errors.messages_for(ItemField::Title).collect(),
            description: errors.messages_for(ItemField::Description).collect(),
            due_date: errors.messages_for(ItemField::DueDate).collect(),
        }
    }
}

#[derive(Serialize)]
struct ToggleView {
    title: &'static str,
    date: &'static str,
    status: &'static str,
}

impl From<SortToggles> for ToggleView {
    fn from(toggles: SortToggles) -> Self {
        Self {
            title: toggles.title,
            date: toggles.date,
            status: toggles.status,
        }
    }
}

/// Inputs of the list page.
#[derive(Debug, Clone, Copy)]
pub struct ListPage<'a> {
    /// Items in display order.
    pub items: &'a [TodoItem],
    /// Search string echoed into the search box.
    pub search: &'a str,
    /// Column header toggles.
    pub toggles: SortToggles,
}

/// Which form page is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPage {
    /// The create page.
    Create,
    /// The edit page.
    Edit,
}

impl FormPage {
    const fn template(self) -> &'static str {
        match self {
            Self::Create => "items/create.html",
            Self::Edit => "items/edit.html",
        }
    }
}

/// Which single-item page is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemPage {
    /// Read-only details.
    Details,
    /// Delete confirmation.
    Delete,
}

impl ItemPage {
    const fn template(self) -> &'static str {
        match self {
            Self::Details => "items/details.html",
            Self::Delete => "items/delete.html",
        }
    }
}

/// Owns the template environment.
#[derive(Debug)]
pub struct ViewRenderer {
    environment: Environment<'static>,
}

impl ViewRenderer {
    /// Loads every embedded template.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError`] when a template fails to parse.
    pub fn new() -> Result<Self, ViewError> {
        let mut environment = Environment::new();
        for (name, source) in TEMPLATES {
            environment
                .add_template(name, source)
                .map_err(|err| ViewError::new(name, &err))?;
        }
        Ok(Self { environment })
    }

    /// Renders the item list.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError`] when rendering fails.
    pub fn list(&self, page: ListPage<'_>) -> Result<String, ViewError> {
        let items: Vec<ItemView> = page.items.iter().map(ItemView::from).collect();
        self.render(
            "items/index.html",
            context! {
                items,
                search => page.search,
                toggles => ToggleView::from(page.toggles),
            },
        )
    }

    /// Renders a single item as details or as a delete confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError`] when rendering fails.
    pub fn item(
        &self,
        page: ItemPage,
        item: &TodoItem,
        csrf_token: &str,
    ) -> Result<String, ViewError> {
        self.render(
            page.template(),
            context! {
                item => ItemView::from(item),
                csrf_token,
            },
        )
    }

    /// Renders a create or edit form.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError`] when rendering fails.
    pub fn form(
        &self,
        page: FormPage,
        values: &FormView,
        errors: &FormErrors,
        csrf_token: &str,
    ) -> Result<String, ViewError> {
        self.render(
            page.template(),
            context! {
                form => values,
                errors,
                csrf_token,
            },
        )
    }

    /// Renders the generic error page.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError`] when rendering fails.
    pub fn error(&self, message: &str) -> Result<String, ViewError> {
        self.render("error.html", context! { message })
    }

    fn render(&self, name: &str, ctx: minijinja::Value) -> Result<String, ViewError> {
        self.environment
            .get_template(name)
            .and_then(|template| template.render(ctx))
            .map_err(|err| ViewError::new(name, &err))
    }
}
