use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    msg_print!(Message::Version(env!("CARGO_PKG_VERSION").to_string()));

    Ok(())
}
