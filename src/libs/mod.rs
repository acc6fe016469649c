//! Core library modules for taskorg.
//!
//! - **Task Record**: [`task`] defines the task model, status and priority enums, and filter criteria
//! - **Sorting**: [`sort`] resolves sort keys and orders task lists
//! - **Errors**: [`error`] holds the task error taxonomy
//! - **Storage location**: [`data_storage`] resolves where the database lives
//! - **Presentation**: [`view`] renders tables, [`messages`] holds user-facing text
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskorg::db::tasks::Tasks;
//! use taskorg::libs::task::{Priority, Task};
//!
//! let date = chrono::NaiveDate::from_ymd_opt(2023, 10, 31).unwrap();
//! let task = Task::new("Alice", "Ship v1", Priority::High, date, vec!["work".to_string()]);
//! let mut tasks = Tasks::new()?;
//! let id = tasks.add(&task)?;
//! tasks.close()?;
//! # Ok::<(), taskorg::libs::error::TaskError>(())
//! ```

pub mod data_storage;
pub mod error;
pub mod messages;
pub mod sort;
pub mod task;
pub mod view;
