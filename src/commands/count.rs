use super::with_tasks;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let count = with_tasks(|tasks| Ok(tasks.count()))?;
    msg_print!(Message::TaskCount(count));

    Ok(())
}
