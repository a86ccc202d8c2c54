//! Convenient macros for application messaging and logging.
//!
//! The macros hide the difference between debug mode (structured logging
//! through `tracing`) and normal mode (plain console output), so call sites
//! only state the kind of message they print.
//!
//! ## Debug Mode Detection
//!
//! Debug mode is enabled when either environment variable is set:
//! - **`DEVTRACK_DEBUG`**: application-specific debug flag
//! - **`RUST_LOG`**: standard Rust logging configuration
//!
//! ## Output Routing
//!
//! ```text
//! msg_info!(..) ──▶ debug mode? ──yes──▶ tracing::info!
//!                        │
//!                        └────no───▶ println! / eprintln!
//! ```
//!
//! ## Macro Categories
//!
//! - **`msg_print!`**: plain message
//! - **`msg_success!`**: ✅ prefix
//! - **`msg_info!`**: ℹ️ prefix
//! - **`msg_error!`**: ❌ prefix, stderr in normal mode
//! - **`msg_debug!`**: 🔍 prefix, silent outside debug mode
//! - **`msg_error_anyhow!`**: builds an `anyhow::Error` from a message
//!
//! ## Usage
//!
//! ```rust,ignore
//! use devtrack::{msg_error, msg_print, msg_success};
//! use devtrack::libs::messages::Message;
//!
//! msg_print!(Message::ReportProjects, true);
//! msg_success!(Message::SessionRecorded);
//! msg_error!(Message::QueryFailed("no such table: projects".to_string()));
//! ```

use std::sync::OnceLock;

/// Cached result of debug mode detection.
static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Checks if debug mode is enabled, with caching for performance.
///
/// The environment is inspected once per process; every later call is a
/// plain memory read.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("DEVTRACK_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a general message with automatic debug mode routing.
///
/// ```rust,ignore
/// msg_print!(Message::ReportProjects);
/// // Output: "Projects and total coding time:"
///
/// msg_print!(Message::ReportProjects, true);
/// // Output: "\nProjects and total coding time:\n"
/// ```
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a success message with ✅ prefix and automatic routing.
///
/// ```text
/// ✅ Session added successfully!
/// ✅ Configuration saved successfully
/// ```
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

/// Prints an error message with ❌ prefix and automatic routing.
///
/// In normal mode errors go to stderr so report output on stdout stays clean
/// for redirection.
///
/// ```rust,ignore
/// msg_error!(Message::QueryFailed(e.to_string()));
/// // Output to stderr: "❌ Query failed: no such table: projects"
/// ```
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

/// Prints an informational message with ℹ️ prefix and automatic routing.
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

/// Debug-only message display with 🔍 prefix.
///
/// ```rust,ignore
/// msg_debug!(format!("Running report: {:?}", report));
/// // Debug mode output: "🔍 Running report: Projects"
/// // Normal mode output: (nothing)
/// ```
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Creates an `anyhow::Error` from a message with ❌ prefix.
///
/// ```rust,ignore
/// use anyhow::Result;
/// use devtrack::{msg_error_anyhow, libs::messages::Message};
///
/// fn parse(text: &str) -> Result<Config> {
///     serde_json::from_str(text).map_err(|e| msg_error_anyhow!(Message::ConfigParseError(e.to_string())))
/// }
/// ```
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}
