//! Database layer for devtrack.
//!
//! Works against an existing, populated SQLite store of developer activity.
//! Nothing here creates or migrates schema.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use devtrack::db::{db::Db, reports::Report, sessions::Sessions};
//! use devtrack::libs::session::NewSession;
//!
//! let db = Db::open("activity.db")?;
//! let projects = Report::Projects.run(&db)?;
//! Sessions::new(&db).record(&NewSession::new("Alpha", "alice", "Go", "VSCode", 45, "main", "linux"))?;
//! # Ok::<(), devtrack::db::error::DbError>(())
//! ```
//!
//! ## Expected Schema
//!
//! | Table | Columns |
//! |---|---|
//! | `developers` | `developer_id`, `nickname` |
//! | `projects` | `project_id`, `name` |
//! | `languages` | `language_id`, `name` |
//! | `editors` | `editor_id`, `name` |
//! | `activity_sessions` | `activity_id`, `developer_id`, `project_id`, `language_id`, `editor_id`, `start_time`, `duration_minutes`, `branch`, `os` |
//! | `daily_metrics` | `day`, `developer_id`, `coding_minutes` |
//!
//! `sql/schema.sql` holds a reference definition.

/// Connection lifecycle and single-statement execution.
pub mod db;

/// Error type shared by the database layer.
pub mod error;

/// Read-only report catalog.
pub mod reports;

/// Activity session recorder.
pub mod sessions;
