//! Generic document store persisted as a single JSON file.
//!
//! Documents are JSON objects keyed by positive integer ids. The whole table
//! is held in memory and the file is rewritten after every mutation:
//!
//! ```text
//! {"_default": {"1": {"id": 1, "owner": "Alice", ...}, "2": {...}}}
//! ```

use crate::libs::error::{Result, TaskError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

pub type Document = Map<String, Value>;

#[derive(Debug, Default, Serialize, Deserialize)]
struct Tables {
    #[serde(rename = "_default", default)]
    documents: BTreeMap<u64, Document>,
}

#[derive(Debug)]
pub struct Db {
    path: PathBuf,
    tables: Tables,
}

impl Db {
    /// Opens the store at `path`, treating a missing or empty file as an empty store.
    pub fn open(path: &Path) -> Result<Db> {
        let tables = match fs::read_to_string(path) {
            Ok(content) if content.trim().is_empty() => Tables::default(),
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Tables::default(),
            Err(e) => return Err(e.into()),
        };
        tracing::debug!(path = %path.display(), documents = tables.documents.len(), "opened document store");

        Ok(Db {
            path: path.to_path_buf(),
            tables,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Inserts a document and returns its freshly assigned id.
    pub fn create(&mut self, doc: Document) -> Result<u64> {
        let id = match self.tables.documents.keys().next_back() {
            Some(&last) => last.checked_add(1).ok_or(TaskError::IdExhausted(last))?,
            None => 1,
        };
        self.tables.documents.insert(id, doc);
        self.flush()?;
        tracing::debug!(id, "inserted document");

        Ok(id)
    }

    pub fn read(&self, id: u64) -> Option<&Document> {
        self.tables.documents.get(&id)
    }

    /// All documents in id order.
    pub fn read_all(&self) -> impl Iterator<Item = (u64, &Document)> {
        self.tables.documents.iter().map(|(id, doc)| (*id, doc))
    }

    /// Merges the non-null fields of `changes` into the document at `id`.
    pub fn update(&mut self, id: u64, changes: Document) -> Result<()> {
        let doc = self.tables.documents.get_mut(&id).ok_or(TaskError::InvalidTaskId(id))?;
        for (key, value) in changes.into_iter().filter(|(_, value)| !value.is_null()) {
            doc.insert(key, value);
        }
        self.flush()?;
        tracing::debug!(id, "updated document");

        Ok(())
    }

    pub fn delete(&mut self, id: u64) -> Result<()> {
        self.tables.documents.remove(&id).ok_or(TaskError::InvalidTaskId(id))?;
        self.flush()?;
        tracing::debug!(id, "deleted document");

        Ok(())
    }

    pub fn delete_all(&mut self) -> Result<()> {
        self.tables.documents.clear();
        self.flush()?;
        tracing::debug!("truncated document store");

        Ok(())
    }

    pub fn count(&self) -> usize {
        self.tables.documents.len()
    }

    /// Releases the store. Mutations are already on disk, so a session that
    /// only read never creates or rewrites the file.
    pub fn close(self) -> Result<()> {
        tracing::debug!(path = %self.path.display(), "closed document store");

        Ok(())
    }

    fn flush(&self) -> Result<()> {
        // Atomic-ish write via temp + rename.
        let tmp = self.path.with_extension("json.tmp");
        let mut file = File::create(&tmp)?;
        serde_json::to_writer(&mut file, &self.tables)?;
        file.flush()?;
        fs::rename(tmp, &self.path)?;

        Ok(())
    }
}
