//! `Display` for [`Message`]: the single place where user-facing text lives.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded(id) => format!("Task {} added", id),
            Message::TaskUpdated(id) => format!("Task {} updated", id),
            Message::TaskStarted(id) => format!("Task {} is in progress", id),
            Message::TaskFinished(id) => format!("Task {} is done", id),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::AllTasksDeleted(count) => format!("Deleted {} task(s).", count),
            Message::InvalidTaskId(id) => format!("Error: Invalid task id {}", id),
            Message::NoTasksFound => "No tasks found.".to_string(),
            Message::NoChangesDetected => "No changes given, nothing to update.".to_string(),
            Message::ConfirmDeleteAll(count) => format!("Are you sure you want to delete ALL {} tasks?", count),

            // === STORE MESSAGES ===
            Message::TaskCount(count) => count.to_string(),
            Message::DbPath(path) => path.clone(),

            // === GENERAL MESSAGES ===
            Message::Version(version) => version.clone(),
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };

        write!(f, "{}", text)
    }
}
