//! # Taskorg
//!
//! A small command-line task tracker. Tasks live in a local JSON document
//! database and can be added, listed, filtered, sorted, updated, started,
//! finished and deleted.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskorg::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
