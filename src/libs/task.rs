//! Task record, its closed enumerations and the filter criteria used by `list`.
//!
//! A [`Task`] is a transient view of one stored document. Every field is
//! optional so the same type carries both complete records and partial
//! update payloads.
//!
//! ## Usage
//!
//! ```rust
//! use taskorg::libs::task::{Priority, Status, Task};
//!
//! let task = Task {
//!     owner: Some("Alice".to_string()),
//!     status: Some(Status::Todo),
//!     priority: Some(Priority::High),
//!     ..Task::default()
//! };
//! let restored = Task::from_document(&task.to_document().unwrap()).unwrap();
//! assert_eq!(task, restored);
//! ```

use crate::db::db::Document;
use crate::libs::error::{Result, TaskError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Storage and CLI representation of due dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Status {
    Todo,
    InProgress,
    Done,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::InProgress => "in_progress",
            Status::Done => "done",
        }
    }

    /// Distance from completion: `todo` ranks highest, `done` lowest.
    pub fn rank(&self) -> u8 {
        match self {
            Status::Todo => 2,
            Status::InProgress => 1,
            Status::Done => 0,
        }
    }
}

impl FromStr for Status {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "todo" => Ok(Status::Todo),
            "in_progress" => Ok(Status::InProgress),
            "done" => Ok(Status::Done),
            _ => Err(TaskError::StatusInvalid(s.to_string())),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Status {
    type Error = TaskError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        status.as_str().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn rank(&self) -> u8 {
        match self {
            Priority::Low => 0,
            Priority::Medium => 1,
            Priority::High => 2,
        }
    }
}

impl FromStr for Priority {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(TaskError::PriorityInvalid(s.to_string())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Priority {
    type Error = TaskError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Priority> for String {
    fn from(priority: Priority) -> Self {
        priority.as_str().to_string()
    }
}

/// Rank of a priority string: `low` 0, `medium` 1, `high` 2.
pub fn priority_rank(value: &str) -> Result<u8> {
    Ok(value.parse::<Priority>()?.rank())
}

/// Rank of a status string: `todo` 2, `in_progress` 1, `done` 0.
pub fn status_rank(value: &str) -> Result<u8> {
    Ok(value.parse::<Status>()?.rank())
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_due_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| TaskError::DueDateInvalid(value.to_string()))
}

/// Due dates serialize as `YYYY-MM-DD`; absent fields serialize as `null`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Task {
    pub id: Option<u64>,
    pub owner: Option<String>,
    pub summary: Option<String>,
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    pub due_date: Option<NaiveDate>,
    pub tags: Option<Vec<String>>,
}

/// Tasks compare by content only; `id` is not part of equality, so two
/// stored tasks with identical fields are equal.
impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner
            && self.summary == other.summary
            && self.status == other.status
            && self.priority == other.priority
            && self.due_date == other.due_date
            && self.tags == other.tags
    }
}

impl Task {
    pub fn new(owner: &str, summary: &str, priority: Priority, due_date: NaiveDate, tags: Vec<String>) -> Self {
        Task {
            id: None,
            owner: Some(owner.to_string()),
            summary: Some(summary.to_string()),
            status: Some(Status::Todo),
            priority: Some(priority),
            due_date: Some(due_date),
            tags: Some(tags),
        }
    }

    /// A payload that only changes the status.
    pub fn with_status(status: Status) -> Self {
        Task {
            status: Some(status),
            ..Task::default()
        }
    }

    /// Builds a task from a stored or user-supplied mapping.
    ///
    /// Null values count as absent. Status and priority are validated
    /// case-insensitively and stored in canonical lowercase form; unknown keys
    /// and mistyped values fail deserialization.
    pub fn from_document(doc: &Document) -> Result<Self> {
        // Surface the typed errors before serde folds them into its own.
        if let Some(Value::String(status)) = doc.get("status") {
            status.parse::<Status>()?;
        }
        if let Some(Value::String(priority)) = doc.get("priority") {
            priority.parse::<Priority>()?;
        }
        if let Some(Value::String(due_date)) = doc.get("due_date") {
            parse_due_date(due_date)?;
        }

        Ok(serde_json::from_value(Value::Object(doc.clone()))?)
    }

    /// Mapping with every field present; absent fields are `null`.
    pub fn to_document(&self) -> Result<Document> {
        Ok(serde_json::from_value(serde_json::to_value(self)?)?)
    }
}

/// Conjunctive filter criteria for `list`. Empty collections and `None`
/// disable that dimension; values inside one collection are alternatives.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub owners: Vec<String>,
    /// Case-insensitive regular expression searched in the summary.
    pub summary: Option<String>,
    pub statuses: Vec<Status>,
    pub priorities: Vec<Priority>,
    /// Inclusive upper bound on the due date.
    pub due_date: Option<NaiveDate>,
    pub tags: Vec<String>,
}
