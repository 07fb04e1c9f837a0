//! Error types for task domain validation and parsing.

use super::TaskId;
use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task text is empty after trimming.
    #[error("task text must not be empty")]
    EmptyText,

    /// No task with the given identifier exists in the collection.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Two tasks share the same identifier.
    #[error("duplicate task identifier: {0}")]
    DuplicateId(TaskId),
}

/// Error returned while parsing a filter mode from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown filter mode '{0}', expected all, active, or completed")]
pub struct ParseFilterModeError(pub String);
