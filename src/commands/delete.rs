use super::{report, with_tasks};
use crate::libs::messages::Message;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Id of the task to remove
    #[arg(required_unless_present = "all", conflicts_with = "all")]
    id: Option<u64>,
    /// Remove every task
    #[arg(long)]
    all: bool,
    /// Skip the confirmation prompt for --all
    #[arg(short, long, requires = "all")]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    match args.id {
        Some(id) => with_tasks(|tasks| report(tasks.delete(id), Message::TaskDeleted(id))),
        None => delete_all(args.yes),
    }
}

fn delete_all(skip_confirmation: bool) -> Result<()> {
    let deleted = with_tasks(|tasks| {
        let count = tasks.count();
        let confirmed = skip_confirmation
            || Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::ConfirmDeleteAll(count).to_string())
                .default(false)
                .interact()
                .map_err(|dialoguer::Error::IO(err)| err)?;

        if !confirmed {
            return Ok(None);
        }
        tasks.delete_all()?;

        Ok(Some(count))
    })?;

    match deleted {
        Some(count) => msg_success!(Message::AllTasksDeleted(count)),
        None => msg_info!(Message::OperationCancelled),
    }

    Ok(())
}
