//! Output macros that switch between console printing and `tracing`.
//!
//! With `TASKORG_DEBUG` or `RUST_LOG` set, messages become structured log
//! events; otherwise they go straight to stdout (stderr for errors).
//!
//! ```rust
//! use taskorg::libs::messages::Message;
//! use taskorg::{msg_error, msg_success};
//!
//! msg_success!(Message::TaskAdded(1));
//! msg_error!(Message::InvalidTaskId(42));
//! ```

use std::sync::OnceLock;

/// Environment variable that turns on debug output.
pub const DEBUG_ENV: &str = "TASKORG_DEBUG";

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Debug mode is read once per process.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var(DEBUG_ENV).is_ok() || std::env::var("RUST_LOG").is_ok())
}

#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
}

/// Only emitted in debug mode.
#[macro_export]
macro_rules! msg_debug {
    ($($arg:tt)*) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", format!($($arg)*));
        }
    };
}
