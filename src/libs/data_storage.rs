use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Overrides the database directory.
pub const DB_DIR_ENV: &str = "TASKS_DB_DIR";
/// Directory under the user's home used when `TASKS_DB_DIR` is not set.
pub const DEFAULT_DIR_NAME: &str = "tasks_db";

#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    /// Resolves the database directory from `.env`, the environment, then the home directory.
    pub fn new() -> Self {
        let _ = dotenv::dotenv();

        let base_path = match var(DB_DIR_ENV) {
            Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => {
                let home = match OS {
                    "windows" => var("USERPROFILE").unwrap_or_else(|_| ".".into()),
                    _ => var("HOME").unwrap_or_else(|_| ".".into()),
                };
                Path::new(&home).join(DEFAULT_DIR_NAME)
            }
        };

        Self { base_path }
    }

    pub fn from_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path of `file_name` inside the storage directory, creating the directory if needed.
    pub fn get_path(&self, file_name: &str) -> io::Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}
