//! Validated item content and request-input validation.

use super::TodoDomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Maximum number of characters accepted in an item description.
pub const MAX_DESCRIPTION_CHARS: usize = 500;

/// Calendar date format accepted from forms and rendered in views.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Non-empty item title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemTitle(String);

impl ItemTitle {
    /// Creates a validated title, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::EmptyTitle`] when the title is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, TodoDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TodoDomainError::EmptyTitle);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Item description bounded by [`MAX_DESCRIPTION_CHARS`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemDescription(String);

impl ItemDescription {
    /// Creates a validated description.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::DescriptionTooLong`] when the value holds
    /// more than [`MAX_DESCRIPTION_CHARS`] characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TodoDomainError> {
        let raw = value.into();
        let length = raw.chars().count();
        if length > MAX_DESCRIPTION_CHARS {
            return Err(TodoDomainError::DescriptionTooLong { length });
        }
        Ok(Self(raw))
    }

    /// Builds an optional description from raw input, treating blank input
    /// as absent.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::DescriptionTooLong`] for oversized input.
    pub fn from_input(raw: &str) -> Result<Option<Self>, TodoDomainError> {
        if raw.trim().is_empty() {
            return Ok(None);
        }
        Self::new(raw).map(Some)
    }

    /// Returns the description as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Progress flags of an item.
///
/// An item can only be done while it is in process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemStatus {
    in_process: bool,
    is_done: bool,
}

impl ItemStatus {
    /// Status of an item nobody has started.
    pub const NOT_STARTED: Self = Self {
        in_process: false,
        is_done: false,
    };

    /// Creates a validated status.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::DoneWithoutInProcess`] when `is_done` is set
    /// without `in_process`.
    pub const fn new(in_process: bool, is_done: bool) -> Result<Self, TodoDomainError> {
        if is_done && !in_process {
            return Err(TodoDomainError::DoneWithoutInProcess);
        }
        Ok(Self {
            in_process,
            is_done,
        })
    }

    /// Returns whether work on the item has started.
    #[must_use]
    pub const fn in_process(self) -> bool {
        self.in_process
    }

    /// Returns whether the item is complete.
    #[must_use]
    pub const fn is_done(self) -> bool {
        self.is_done
    }
}

/// Validated, owner-free content of an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDraft {
    title: ItemTitle,
    description: Option<ItemDescription>,
    due_date: NaiveDate,
    status: ItemStatus,
}

impl TodoDraft {
    /// Creates a draft from already validated parts.
    #[must_use]
    pub const fn new(
        title: ItemTitle,
        description: Option<ItemDescription>,
        due_date: NaiveDate,
        status: ItemStatus,
    ) -> Self {
        Self {
            title,
            description,
            due_date,
            status,
        }
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &ItemTitle {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&ItemDescription> {
        self.description.as_ref()
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Returns the progress flags.
    #[must_use]
    pub const fn status(&self) -> ItemStatus {
        self.status
    }

    pub(crate) fn into_parts(
        self,
    ) -> (ItemTitle, Option<ItemDescription>, NaiveDate, ItemStatus) {
        (self.title, self.description, self.due_date, self.status)
    }
}

/// Bindable item fields, exactly as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoItemInput {
    /// Submitted title.
    pub title: String,
    /// Submitted description; blank means absent.
    pub description: String,
    /// Submitted due date in `YYYY-MM-DD` form.
    pub due_date: String,
    /// Submitted in-process flag.
    pub in_process: bool,
    /// Submitted completion flag.
    pub is_done: bool,
}

impl TodoItemInput {
    /// Validates every field, collecting all issues rather than stopping at
    /// the first.
    ///
    /// # Errors
    ///
    /// Returns [`TodoValidationErrors`] listing each failed constraint,
    /// including the done/in-process rule.
    pub fn validate(&self) -> Result<TodoDraft, TodoValidationErrors> {
        let mut errors = TodoValidationErrors::default();

        let title = errors.capture(ItemField::Title, ItemTitle::new(self.title.as_str()));
        let description = errors.capture(
            ItemField::Description,
            ItemDescription::from_input(&self.description),
        );
        let due_date = errors.capture(ItemField::DueDate, parse_due_date(&self.due_date));
        let status = match ItemStatus::new(self.in_process, self.is_done) {
            Ok(flags) => Some(flags),
            Err(error) => {
                errors.push_form(error);
                None
            }
        };

        match (title, description, due_date, status) {
            (Some(valid_title), Some(valid_description), Some(valid_due_date), Some(flags)) => Ok(
                TodoDraft::new(valid_title, valid_description, valid_due_date, flags),
            ),
            _ => Err(errors),
        }
    }
}

/// Parses a due date from form input.
///
/// # Errors
///
/// Returns [`TodoDomainError::MissingDueDate`] for blank input and
/// [`TodoDomainError::InvalidDueDate`] for anything that is not
/// `YYYY-MM-DD`.
pub fn parse_due_date(raw: &str) -> Result<NaiveDate, TodoDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TodoDomainError::MissingDueDate);
    }
    NaiveDate::parse_from_str(trimmed, DUE_DATE_FORMAT)
        .map_err(|_| TodoDomainError::InvalidDueDate(trimmed.to_owned()))
}

/// Item fields that carry their own validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemField {
    /// The title field.
    Title,
    /// The description field.
    Description,
    /// The due date field.
    DueDate,
}

impl ItemField {
    /// Returns the form field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::DueDate => "due_date",
        }
    }
}

/// One failed constraint; `field` is `None` for form-level rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Field the issue belongs to.
    pub field: Option<ItemField>,
    /// The violated constraint.
    pub error: TodoDomainError,
}

/// Every constraint an item submission failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("todo item failed validation with {} issue(s)", .issues.len())]
pub struct TodoValidationErrors {
    issues: Vec<ValidationIssue>,
}

impl TodoValidationErrors {
    /// Creates a collection holding one form-level issue.
    #[must_use]
    pub fn form(error: TodoDomainError) -> Self {
        let mut errors = Self::default();
        errors.push_form(error);
        errors
    }

    /// Returns all recorded issues in the order they were found.
    #[must_use]
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Returns whether no issue was recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns whether any issue is the given domain error.
    #[must_use]
    pub fn contains(&self, error: &TodoDomainError) -> bool {
        self.issues.iter().any(|issue| &issue.error == error)
    }

    /// Returns the messages attached to `field`.
    pub fn messages_for(&self, field: ItemField) -> impl Iterator<Item = String> + '_ {
        self.issues
            .iter()
            .filter(move |issue| issue.field == Some(field))
            .map(|issue| issue.error.to_string())
    }

    /// Returns the form-level messages.
    pub fn form_messages(&self) -> impl Iterator<Item = String> + '_ {
        self.issues
            .iter()
            .filter(|issue| issue.field.is_none())
            .map(|issue| issue.error.to_string())
    }

    fn push_form(&mut self, error: TodoDomainError) {
        self.issues.push(ValidationIssue { field: None, error });
    }

    fn capture<T>(&mut self, field: ItemField, result: Result<T, TodoDomainError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.issues.push(ValidationIssue {
                    field: Some(field),
                    error,
                });
                None
            }
        }
    }
}
