//! Error taxonomy for task records, the document store and the repository.
//!
//! Every failure the core can produce is a variant of [`TaskError`]. Validation
//! errors raised while building a [`Task`](super::task::Task) propagate to the
//! caller unchanged; the command layer only intercepts [`TaskError::InvalidTaskId`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    /// Priority outside `low`, `medium`, `high`.
    #[error("Invalid priority value: {0}")]
    PriorityInvalid(String),

    /// Status outside `todo`, `in_progress`, `done`.
    #[error("Invalid status value: {0}")]
    StatusInvalid(String),

    /// No stored task carries this id.
    #[error("Invalid task id {0}")]
    InvalidTaskId(u64),

    /// Reserved for stricter owner validation.
    #[error("Invalid owner: {0}")]
    InvalidOwner(String),

    /// Reserved for stricter summary validation.
    #[error("Task summary is missing")]
    MissingSummary,

    #[error("Invalid sort target: {0}. Must be one of owner, status, priority, due_date")]
    SortTargetInvalid(String),

    #[error("Task does not have the property '{field}' to sort by")]
    MissingProperty { field: &'static str },

    #[error("Invalid due date: {0}. Expected YYYY-MM-DD")]
    DueDateInvalid(String),

    #[error("Invalid summary pattern: {0}")]
    SummaryPatternInvalid(#[from] regex::Error),

    /// The largest stored id leaves no room for another.
    #[error("No task id left after {0}")]
    IdExhausted(u64),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Malformed store file, unknown record keys or mistyped record values.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TaskError>;
