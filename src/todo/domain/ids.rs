//! Identifier and validated scalar types for the todo domain.

use super::TodoDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-generated identifier for a todo item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoItemId(i64);

impl TodoItemId {
    /// Creates a validated item identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::InvalidItemId`] when the value is zero or
    /// negative.
    pub const fn new(value: i64) -> Result<Self, TodoDomainError> {
        if value <= 0 {
            return Err(TodoDomainError::InvalidItemId(value));
        }
        Ok(Self(value))
    }

    /// Parses an identifier from request input.
    ///
    /// Returns `None` for blank, non-numeric, or non-positive values.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim()
            .parse::<i64>()
            .ok()
            .and_then(|value| Self::new(value).ok())
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TodoItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maximum length of a [`UserId`], in characters.
pub const MAX_OWNER_ID_CHARS: usize = 450;

/// Opaque identifier of the owning user, issued by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a validated user identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::EmptyOwnerId`] when the value is blank and
    /// [`TodoDomainError::OwnerIdTooLong`] when it exceeds
    /// [`MAX_OWNER_ID_CHARS`].
    pub fn new(value: impl Into<String>) -> Result<Self, TodoDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TodoDomainError::EmptyOwnerId);
        }
        let length = trimmed.chars().count();
        if length > MAX_OWNER_ID_CHARS {
            return Err(TodoDomainError::OwnerIdTooLong { length });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Optimistic concurrency token stored with each item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowVersion(i64);

impl RowVersion {
    /// Version assigned to freshly inserted rows.
    pub const INITIAL: Self = Self(0);

    /// Creates a validated row version.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::InvalidRowVersion`] when the value is
    /// negative.
    pub const fn new(value: i64) -> Result<Self, TodoDomainError> {
        if value < 0 {
            return Err(TodoDomainError::InvalidRowVersion(value));
        }
        Ok(Self(value))
    }

    /// Returns the version that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for RowVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
