//! Recording of new activity sessions.
//!
//! The only write path of devtrack. A [`NewSession`] names its developer,
//! project, language and editor; every name is resolved to its key before
//! anything is written, so an unknown name fails the request and leaves
//! `activity_sessions` untouched.
//!
//! ## Resolution Rules
//!
//! - **Developer**: by `nickname` (unique)
//! - **Project**: by `name` (unique)
//! - **Language**: by `name` (unique)
//! - **Editor**: by `name`, which may repeat; the lowest `editor_id` wins
//!
//! ```rust,no_run
//! use devtrack::db::{db::Db, sessions::Sessions};
//! use devtrack::libs::session::NewSession;
//!
//! let db = Db::open("activity.db")?;
//! let session = NewSession::new("Alpha", "alice", "Go", "VSCode", 45, "main", "linux");
//! Sessions::new(&db).record(&session)?;
//! # Ok::<(), devtrack::db::error::DbError>(())
//! ```

use super::db::Db;
use super::error::{DbError, DbResult};
use crate::libs::session::NewSession;
use chrono::Local;
use rusqlite::{params, OptionalExtension};
use tracing::debug;

/// Format of `start_time` values written by the recorder.
pub const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const SELECT_DEVELOPER_ID: &str = "SELECT developer_id FROM developers WHERE nickname = ?1";
const SELECT_PROJECT_ID: &str = "SELECT project_id FROM projects WHERE name = ?1";
const SELECT_LANGUAGE_ID: &str = "SELECT language_id FROM languages WHERE name = ?1";
const SELECT_EDITOR_ID: &str = "SELECT editor_id FROM editors WHERE name = ?1 ORDER BY editor_id ASC LIMIT 1";

const INSERT_SESSION: &str = "INSERT INTO activity_sessions
(developer_id, project_id, language_id, editor_id, start_time, duration_minutes, branch, os)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";

/// Keys a [`NewSession`] resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedKeys {
    pub developer_id: i64,
    pub project_id: i64,
    pub language_id: i64,
    pub editor_id: i64,
}

pub struct Sessions<'a> {
    db: &'a Db,
}

impl<'a> Sessions<'a> {
    pub fn new(db: &'a Db) -> Self {
        Sessions { db }
    }

    /// Inserts one activity session stamped with the current local time.
    ///
    /// # Errors
    ///
    /// - [`DbError::Unresolved`] if any name does not match a row; nothing is written
    /// - [`DbError::Query`] with the driver's message if the insert fails
    /// - [`DbError::NotConnected`] if the connection was closed
    pub fn record(&self, session: &NewSession) -> DbResult<()> {
        let keys = self.resolve(session)?;
        let start_time = Local::now().format(START_TIME_FORMAT).to_string();

        self.db.execute(
            INSERT_SESSION,
            params![
                keys.developer_id,
                keys.project_id,
                keys.language_id,
                keys.editor_id,
                start_time,
                session.duration_minutes,
                session.branch,
                session.os,
            ],
        )?;

        debug!(?keys, %start_time, "session recorded");
        Ok(())
    }

    /// Maps the four names of a session to their keys.
    pub fn resolve(&self, session: &NewSession) -> DbResult<ResolvedKeys> {
        Ok(ResolvedKeys {
            developer_id: self.lookup(SELECT_DEVELOPER_ID, "Developer", &session.developer)?,
            project_id: self.lookup(SELECT_PROJECT_ID, "Project", &session.project)?,
            language_id: self.lookup(SELECT_LANGUAGE_ID, "Language", &session.language)?,
            editor_id: self.lookup(SELECT_EDITOR_ID, "Editor", &session.editor)?,
        })
    }

    fn lookup(&self, sql: &str, entity: &'static str, name: &str) -> DbResult<i64> {
        self.db
            .conn()?
            .query_row(sql, [name], |row| row.get(0))
            .optional()?
            .ok_or_else(|| DbError::Unresolved {
                entity,
                name: name.to_string(),
            })
    }
}
