use super::task::{Task, DATE_FORMAT};
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "Owner", "Summary", "Status", "Priority", "Due Date", "Tags"]);
        for task in tasks {
            table.add_row(row![
                task.id.map(|id| id.to_string()).unwrap_or_default(),
                task.owner.as_deref().unwrap_or_default(),
                task.summary.as_deref().unwrap_or_default(),
                task.status.map(|s| s.as_str()).unwrap_or_default(),
                task.priority.map(|p| p.as_str()).unwrap_or_default(),
                task.due_date.map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_default(),
                task.tags.as_ref().map(|tags| tags.join(", ")).unwrap_or_default()
            ]);
        }
        table.printstd();
    }
}
