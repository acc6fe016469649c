use super::{report, with_tasks};
use crate::libs::messages::Message;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct FinishArgs {
    /// Id of the task to finish
    id: u64,
}

pub fn cmd(args: FinishArgs) -> Result<()> {
    with_tasks(|tasks| report(tasks.finish(args.id), Message::TaskFinished(args.id)))
}
