//! Persistence layer for taskorg.
//!
//! A JSON-file document store ([`db::Db`]) keyed by integer ids, and the task
//! repository ([`tasks::Tasks`]) that layers validation, filtering and status
//! transitions on top of it.

/// Generic document store: create, read, update, delete by integer id.
pub mod db;

/// Task operations: add, get, list with filters, update, start, finish, delete.
pub mod tasks;
