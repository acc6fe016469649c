use super::error::{Result, TaskError};
use super::task::Task;
use chrono::NaiveDate;
use clap::ValueEnum;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Owner,
    Status,
    Priority,
    DueDate,
}

impl FromStr for SortField {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "owner" => Ok(SortField::Owner),
            "status" => Ok(SortField::Status),
            "priority" => Ok(SortField::Priority),
            "due_date" => Ok(SortField::DueDate),
            _ => Err(TaskError::SortTargetInvalid(s.to_string())),
        }
    }
}

impl SortField {
    pub fn name(&self) -> &'static str {
        match self {
            SortField::Owner => "owner",
            SortField::Status => "status",
            SortField::Priority => "priority",
            SortField::DueDate => "due_date",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Comparable key for one task. Keys from the same field share a variant.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    Rank(u8),
    Text(String),
    Date(NaiveDate),
}

/// Status and priority sort by rank, the rest by stored value.
pub fn sort_key(task: &Task, field: SortField) -> Result<SortKey> {
    let missing = || TaskError::MissingProperty { field: field.name() };
    match field {
        SortField::Owner => task.owner.clone().map(SortKey::Text).ok_or_else(missing),
        SortField::Status => task.status.map(|s| SortKey::Rank(s.rank())).ok_or_else(missing),
        SortField::Priority => task.priority.map(|p| SortKey::Rank(p.rank())).ok_or_else(missing),
        SortField::DueDate => task.due_date.map(SortKey::Date).ok_or_else(missing),
    }
}

/// Stable sort; tasks with equal keys keep their relative order in both directions.
pub fn sort_tasks(tasks: Vec<Task>, field: SortField, order: SortOrder) -> Result<Vec<Task>> {
    let mut keyed = tasks
        .into_iter()
        .map(|task| sort_key(&task, field).map(|key| (key, task)))
        .collect::<Result<Vec<_>>>()?;

    match order {
        SortOrder::Ascending => keyed.sort_by(|a, b| a.0.cmp(&b.0)),
        SortOrder::Descending => keyed.sort_by(|a, b| b.0.cmp(&a.0)),
    }

    Ok(keyed.into_iter().map(|(_, task)| task).collect())
}
