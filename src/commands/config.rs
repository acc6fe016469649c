use super::with_tasks;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let path = with_tasks(|tasks| Ok(tasks.path().display().to_string()))?;
    msg_print!(Message::DbPath(path));

    Ok(())
}
