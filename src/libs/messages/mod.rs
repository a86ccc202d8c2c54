//! User-facing messages.
//!
//! All text printed by devtrack is a [`Message`] variant. The `Display`
//! implementation in [`display`] is the single place where wording lives and
//! the `msg_*` macros in [`macros`] route it to the terminal or to `tracing`.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
