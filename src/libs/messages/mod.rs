//! User-facing text and output macros.
//!
//! Every line the CLI prints is a [`Message`] variant rendered through its
//! `Display` impl and emitted by one of the `msg_*` macros.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
