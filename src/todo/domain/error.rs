//! Error types for todo item domain validation.

use super::{MAX_DESCRIPTION_CHARS, MAX_OWNER_ID_CHARS};
use thiserror::Error;

/// Errors returned while constructing domain todo values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoDomainError {
    /// The item identifier is not a positive integer.
    #[error("invalid item identifier {0}, expected a positive integer")]
    InvalidItemId(i64),

    /// The owner identifier is empty after trimming.
    #[error("owner identifier must not be empty")]
    EmptyOwnerId,

    /// The owner identifier exceeds the stored column width.
    #[error("owner identifier cannot exceed {max} characters", max = MAX_OWNER_ID_CHARS)]
    OwnerIdTooLong {
        /// Character count of the rejected identifier.
        length: usize,
    },

    /// The title is empty after trimming.
    #[error("The Title field is required.")]
    EmptyTitle,

    /// The description exceeds the stored column width.
    #[error("Description cannot exceed {max} characters", max = MAX_DESCRIPTION_CHARS)]
    DescriptionTooLong {
        /// Character count of the rejected description.
        length: usize,
    },

    /// The due date is missing.
    #[error("The Due Date field is required.")]
    MissingDueDate,

    /// The due date is not a `YYYY-MM-DD` calendar date.
    #[error("The value '{0}' is not a valid due date.")]
    InvalidDueDate(String),

    /// The item was marked done without being in process.
    #[error("A task cannot be marked as done unless it is in process.")]
    DoneWithoutInProcess,

    /// The row version is negative.
    #[error("invalid row version {0}")]
    InvalidRowVersion(i64),
}
