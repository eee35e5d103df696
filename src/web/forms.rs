//! Form and query-string bindings.
//!
//! Item forms bind a fixed field set; anything else is refused by the
//! extractor before a handler runs.

use crate::todo::domain::{TodoItemId, TodoItemInput};
use serde::{Deserialize, Deserializer, de};

/// Fields accepted by the create and edit endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TodoItemForm {
    /// Identifier echoed by the edit form. Ignored on create.
    #[serde(default)]
    pub id: Option<String>,
    /// Item title.
    #[serde(default)]
    pub title: String,
    /// Item description.
    #[serde(default)]
    pub description: String,
    /// Due date as `YYYY-MM-DD`.
    #[serde(default)]
    pub due_date: String,
    /// In-process checkbox.
    #[serde(default, deserialize_with = "checkbox")]
    pub in_process: bool,
    /// Done checkbox.
    #[serde(default, deserialize_with = "checkbox")]
    pub is_done: bool,
    /// Anti-forgery token.
    #[serde(default)]
    pub csrf_token: String,
}

impl TodoItemForm {
    /// Returns the body identifier, if it parses.
    #[must_use]
    pub fn item_id(&self) -> Option<TodoItemId> {
        self.id.as_deref().and_then(TodoItemId::parse)
    }

    /// Returns the bindable item values.
    #[must_use]
    pub fn to_input(&self) -> TodoItemInput {
        TodoItemInput {
            title: self.title.clone(),
            description: self.description.clone(),
            due_date: self.due_date.clone(),
            in_process: self.in_process,
            is_done: self.is_done,
        }
    }
}

/// Body of the delete confirmation form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeleteForm {
    /// Anti-forgery token.
    #[serde(default)]
    pub csrf_token: String,
}

/// Query string of the list page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    /// Substring filter.
    pub search: Option<String>,
    /// Sort key.
    pub sort: Option<String>,
}

/// Query string of the error page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorParams {
    /// Machine-readable cause.
    pub reason: Option<String>,
}

fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "1" => Ok(true),
        "false" | "off" | "0" | "" => Ok(false),
        other => Err(de::Error::invalid_value(
            de::Unexpected::Str(other),
            &"a checkbox value",
        )),
    }
}
