use super::{report, with_tasks};
use crate::libs::messages::Message;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StartArgs {
    /// Id of the task to start
    id: u64,
}

pub fn cmd(args: StartArgs) -> Result<()> {
    with_tasks(|tasks| report(tasks.start(args.id), Message::TaskStarted(args.id)))
}
