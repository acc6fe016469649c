use super::{split_list, with_tasks};
use crate::libs::error::TaskError;
use crate::libs::messages::Message;
use crate::libs::task::{parse_due_date, Priority, Task};
use crate::msg_success;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Owner of the task
    owner: String,
    /// Task description
    summary: String,
    /// Due date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    due_date: Option<String>,
    /// Tags for the task, separated by commas
    #[arg(short, long)]
    tags: Option<String>,
    /// Pick one from three priorities: low, medium, high
    #[arg(short, long, default_value = "low")]
    priority: String,
}

impl AddArgs {
    /// New `todo` task; the due date falls back to `today`.
    pub fn task(&self, today: NaiveDate) -> Result<Task, TaskError> {
        let due_date = match self.due_date.as_deref() {
            Some(date) => parse_due_date(date)?,
            None => today,
        };
        let priority: Priority = self.priority.parse()?;
        let tags = self.tags.as_deref().map(split_list).unwrap_or_default();

        Ok(Task::new(&self.owner, &self.summary, priority, due_date, tags))
    }
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let task = args.task(Local::now().date_naive())?;

    let id = with_tasks(|tasks| tasks.add(&task))?;
    msg_success!(Message::TaskAdded(id));

    Ok(())
}
