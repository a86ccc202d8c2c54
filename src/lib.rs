//! # devtrack - Developer activity reporting
//!
//! A command-line reporting tool over a store of programmer activity:
//! developers, projects, languages, editors and coding sessions.
//!
//! ## Features
//!
//! - **Report Catalog**: nine parameterized read-only reports
//! - **Session Recording**: add a coding session by human-readable names
//! - **Interactive Menu**: pick reports and enter parameters with prompts
//! - **Output Formats**: fixed-width text, boxed tables, CSV and JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use devtrack::commands::Cli;
//! use std::process::ExitCode;
//!
//! fn main() -> anyhow::Result<ExitCode> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
