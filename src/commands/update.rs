use super::{report, split_list, with_tasks};
use crate::libs::messages::Message;
use crate::libs::task::{parse_due_date, Priority, Task};
use crate::msg_info;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Id of the task to modify
    id: u64,
    #[arg(short, long)]
    owner: Option<String>,
    #[arg(short, long)]
    summary: Option<String>,
    /// New due date (YYYY-MM-DD)
    #[arg(short, long)]
    due_date: Option<String>,
    /// New tags, separated by commas; replaces the existing tags
    #[arg(short, long)]
    tags: Option<String>,
    /// low, medium or high
    #[arg(short, long)]
    priority: Option<String>,
}

pub fn cmd(args: UpdateArgs) -> Result<()> {
    let changes = Task {
        owner: args.owner,
        summary: args.summary,
        priority: args.priority.as_deref().map(str::parse::<Priority>).transpose()?,
        due_date: args.due_date.as_deref().map(parse_due_date).transpose()?,
        tags: args.tags.as_deref().map(split_list),
        ..Task::default()
    };
    let id = args.id;

    with_tasks(|tasks| {
        if changes == Task::default() {
            // Still reject unknown ids when there is nothing to change.
            return match tasks.get(id) {
                Ok(_) => {
                    msg_info!(Message::NoChangesDetected);
                    Ok(())
                }
                Err(e) => report(Err(e), Message::TaskUpdated(id)),
            };
        }
        report(tasks.update(id, &changes), Message::TaskUpdated(id))
    })
}
