use super::db::Db;
use crate::libs::data_storage::DataStorage;
use crate::libs::error::{Result, TaskError};
use crate::libs::task::{Status, Task, TaskFilter};
use regex::RegexBuilder;
use std::path::{Path, PathBuf};

pub const DB_FILE_NAME: &str = ".Tasks_db.json";

/// Task operations on top of the document store.
pub struct Tasks {
    db: Db,
    db_dir: PathBuf,
}

impl Tasks {
    /// Opens the task database in the configured storage directory.
    pub fn new() -> Result<Tasks> {
        Self::open(DataStorage::new())
    }

    pub fn open(storage: DataStorage) -> Result<Tasks> {
        let db = Db::open(&storage.get_path(DB_FILE_NAME)?)?;

        Ok(Tasks {
            db,
            db_dir: storage.base_path().to_path_buf(),
        })
    }

    /// Stores the task and writes the assigned id back into the record.
    pub fn add(&mut self, task: &Task) -> Result<u64> {
        let mut doc = task.to_document()?;
        doc.remove("id");
        let id = self.db.create(doc)?;
        self.db.update(id, Task { id: Some(id), ..Task::default() }.to_document()?)?;

        Ok(id)
    }

    pub fn get(&self, id: u64) -> Result<Task> {
        let doc = self.db.read(id).ok_or(TaskError::InvalidTaskId(id))?;
        Task::from_document(doc)
    }

    /// Tasks matching every active criterion, in id order.
    pub fn list(&self, filter: &TaskFilter) -> Result<Vec<Task>> {
        let summary = filter
            .summary
            .as_deref()
            .map(|pattern| RegexBuilder::new(pattern).case_insensitive(true).build())
            .transpose()?;

        let mut selected = Vec::new();
        for (_, doc) in self.db.read_all() {
            let task = Task::from_document(doc)?;

            if !filter.owners.is_empty() && !task.owner.as_ref().is_some_and(|o| filter.owners.contains(o)) {
                continue;
            }
            if let Some(re) = &summary {
                if !task.summary.as_deref().is_some_and(|s| re.is_match(s)) {
                    continue;
                }
            }
            if !filter.statuses.is_empty() && !task.status.is_some_and(|s| filter.statuses.contains(&s)) {
                continue;
            }
            if !filter.priorities.is_empty() && !task.priority.is_some_and(|p| filter.priorities.contains(&p)) {
                continue;
            }
            if let Some(limit) = filter.due_date {
                if !task.due_date.is_some_and(|due| due <= limit) {
                    continue;
                }
            }
            if !filter.tags.is_empty() {
                let tags = task.tags.as_deref().unwrap_or_default();
                if !tags.iter().any(|tag| filter.tags.contains(tag)) {
                    continue;
                }
            }

            selected.push(task);
        }

        Ok(selected)
    }

    /// Applies the present fields of `changes` to the stored task. The id never changes.
    pub fn update(&mut self, id: u64, changes: &Task) -> Result<()> {
        let mut doc = changes.to_document()?;
        doc.remove("id");
        self.db.update(id, doc)
    }

    pub fn start(&mut self, id: u64) -> Result<()> {
        self.update(id, &Task::with_status(Status::InProgress))
    }

    pub fn finish(&mut self, id: u64) -> Result<()> {
        self.update(id, &Task::with_status(Status::Done))
    }

    pub fn delete(&mut self, id: u64) -> Result<()> {
        self.db.delete(id)
    }

    pub fn delete_all(&mut self) -> Result<()> {
        self.db.delete_all()
    }

    pub fn count(&self) -> usize {
        self.db.count()
    }

    /// Directory holding the database file.
    pub fn path(&self) -> &Path {
        &self.db_dir
    }

    pub fn close(self) -> Result<()> {
        self.db.close()
    }
}
