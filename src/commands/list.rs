use super::{split_list, with_tasks};
use crate::libs::error::TaskError;
use crate::libs::messages::Message;
use crate::libs::sort::{sort_tasks, SortField, SortOrder};
use crate::libs::task::{parse_due_date, Priority, Status, TaskFilter};
use crate::libs::view::View;
use crate::{msg_debug, msg_info};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Pick one column for sorting: owner, status, priority, due_date
    #[arg(long, default_value = "due_date")]
    sort: String,
    /// Sort direction
    #[arg(long, value_enum, default_value_t = SortOrder::Ascending)]
    order: SortOrder,
    /// Filter by status, e.g. todo,in_progress,done
    #[arg(long = "status")]
    statuses: Option<String>,
    /// Filter by owners, separated by commas
    #[arg(short = 'o', long = "owner")]
    owners: Option<String>,
    /// Case-insensitive pattern searched in the summary
    #[arg(short, long)]
    summary: Option<String>,
    /// Only tasks due on or before this date (YYYY-MM-DD)
    #[arg(short, long)]
    due_date: Option<String>,
    /// Filter by tags, separated by commas
    #[arg(short, long)]
    tags: Option<String>,
    /// Filter by priorities, separated by commas
    #[arg(short = 'p', long = "priority")]
    priorities: Option<String>,
}

impl Default for ListArgs {
    fn default() -> Self {
        ListArgs {
            sort: "due_date".to_string(),
            order: SortOrder::Ascending,
            statuses: None,
            owners: None,
            summary: None,
            due_date: None,
            tags: None,
            priorities: None,
        }
    }
}

impl ListArgs {
    /// Validated filter criteria; unknown statuses or priorities are errors.
    pub fn filter(&self) -> Result<TaskFilter, TaskError> {
        let list = |value: &Option<String>| value.as_deref().map(split_list).unwrap_or_default();

        Ok(TaskFilter {
            owners: list(&self.owners),
            summary: self.summary.clone(),
            statuses: list(&self.statuses).iter().map(|s| s.parse::<Status>()).collect::<Result<Vec<_>, _>>()?,
            priorities: list(&self.priorities).iter().map(|p| p.parse::<Priority>()).collect::<Result<Vec<_>, _>>()?,
            due_date: self.due_date.as_deref().map(parse_due_date).transpose()?,
            tags: list(&self.tags),
        })
    }
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let field: SortField = args.sort.parse()?;
    let filter = args.filter()?;

    let tasks = with_tasks(|tasks| tasks.list(&filter))?;
    msg_debug!("{} task(s) matched, sorting by {}", tasks.len(), field.name());
    let tasks = sort_tasks(tasks, field, args.order)?;

    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }
    View::tasks(&tasks);

    Ok(())
}
