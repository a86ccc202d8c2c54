//! Core library modules for devtrack.
//!
//! ## Features
//!
//! - **Tabular Results**: backend-neutral table shared by every report
//! - **Rendering**: fixed-width console layout, boxed tables, CSV and JSON
//! - **Messaging**: typed user-facing messages and output macros
//! - **Configuration**: JSON settings in the platform data directory

pub mod config;
pub mod data_storage;
pub mod export;
pub mod messages;
pub mod session;
pub mod table;
pub mod view;
