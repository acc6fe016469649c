#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded(u64),
    TaskUpdated(u64),
    TaskStarted(u64),
    TaskFinished(u64),
    TaskDeleted(u64),
    AllTasksDeleted(usize), // count
    InvalidTaskId(u64),
    NoTasksFound,
    NoChangesDetected,
    ConfirmDeleteAll(usize), // count

    // === STORE MESSAGES ===
    TaskCount(usize),
    DbPath(String),

    // === GENERAL MESSAGES ===
    Version(String),
    OperationCancelled,
}
