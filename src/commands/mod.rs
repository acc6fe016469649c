pub mod add;
pub mod config;
pub mod count;
pub mod delete;
pub mod finish;
pub mod list;
pub mod start;
pub mod update;
pub mod version;

use crate::db::tasks::Tasks;
use crate::libs::data_storage::DataStorage;
use crate::libs::error::TaskError;
use crate::libs::messages::Message;
use crate::{msg_error, msg_success};
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "Add a new task to the database")]
    Add(add::AddArgs),
    #[command(about = "Remove the task with the given id")]
    Delete(delete::DeleteArgs),
    #[command(about = "Filter and list tasks")]
    List(list::ListArgs),
    #[command(about = "Modify a task with new info")]
    Update(update::UpdateArgs),
    #[command(about = "Set a task's status to in_progress")]
    Start(start::StartArgs),
    #[command(about = "Set a task's status to done")]
    Finish(finish::FinishArgs),
    #[command(about = "Show the path to the tasks database")]
    Config,
    #[command(about = "Show the number of tasks in the database")]
    Count,
    #[command(about = "Show the taskorg version")]
    Version,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn menu() -> anyhow::Result<()> {
        let cli = Self::parse();
        match cli.command {
            Some(Commands::Add(args)) => add::cmd(args),
            Some(Commands::Delete(args)) => delete::cmd(args),
            Some(Commands::List(args)) => list::cmd(args),
            Some(Commands::Update(args)) => update::cmd(args),
            Some(Commands::Start(args)) => start::cmd(args),
            Some(Commands::Finish(args)) => finish::cmd(args),
            Some(Commands::Config) => config::cmd(),
            Some(Commands::Count) => count::cmd(),
            Some(Commands::Version) => version::cmd(),
            None => list::cmd(list::ListArgs::default()),
        }
    }
}

/// Runs one session against the configured storage directory.
pub fn with_tasks<T>(f: impl FnOnce(&mut Tasks) -> Result<T, TaskError>) -> anyhow::Result<T> {
    with_tasks_in(DataStorage::new(), f)
}

/// Runs one store session: opens the database, runs `f`, and closes the
/// database on every path before returning.
pub fn with_tasks_in<T>(storage: DataStorage, f: impl FnOnce(&mut Tasks) -> Result<T, TaskError>) -> anyhow::Result<T> {
    let mut tasks = Tasks::open(storage)?;
    let result = f(&mut tasks);
    let closed = tasks.close();
    let value = result?;
    closed?;

    Ok(value)
}

/// Prints `success` on success and a notice for an unknown id; other errors propagate.
pub fn report(result: Result<(), TaskError>, success: Message) -> Result<(), TaskError> {
    match result {
        Ok(()) => {
            msg_success!(success);
            Ok(())
        }
        Err(TaskError::InvalidTaskId(id)) => {
            msg_error!(Message::InvalidTaskId(id));
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Splits a comma-separated option into trimmed, non-empty values.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
