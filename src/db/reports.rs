//! Catalog of read-only activity reports.
//!
//! Each report is a [`Report`] variant carrying its typed parameters. Running a
//! report executes exactly one bound statement through [`Db::query_table`] and
//! returns a [`Table`]; ordering and aggregation are part of every report's
//! contract, ties always have an explicit tie-break.
//!
//! Unknown names (a nickname nobody has, a language with no sessions) produce
//! an empty table, not an error. Only driver failures are `Err`.
//!
//! ```rust,no_run
//! use devtrack::db::{db::Db, reports::Report};
//!
//! let db = Db::open("activity.db")?;
//! let top = Report::TopLanguages { limit: 3 }.run(&db)?;
//! assert!(top.len() <= 3);
//! # Ok::<(), devtrack::db::error::DbError>(())
//! ```

use super::db::Db;
use super::error::DbResult;
use crate::libs::messages::Message;
use crate::libs::table::Table;
use rusqlite::ToSql;

/// Fixed number of rows shown by the recent-sessions report.
pub const RECENT_SESSIONS_LIMIT: i64 = 10;

const SELECT_PROJECTS: &str = "SELECT p.name, SUM(a.duration_minutes) AS total_minutes
FROM projects p
LEFT JOIN activity_sessions a ON p.project_id = a.project_id
GROUP BY p.project_id, p.name
ORDER BY total_minutes DESC NULLS LAST, p.name ASC";

const SELECT_RECENT_SESSIONS: &str = "SELECT d.nickname, p.name AS project, l.name AS language,
       e.name AS editor, a.duration_minutes, a.start_time
FROM activity_sessions a
JOIN developers d ON a.developer_id = d.developer_id
JOIN projects p ON a.project_id = p.project_id
JOIN languages l ON a.language_id = l.language_id
JOIN editors e ON a.editor_id = e.editor_id
ORDER BY a.start_time DESC, a.activity_id DESC
LIMIT ?1";

const SELECT_SESSIONS_BY_LANGUAGE: &str = "SELECT d.nickname, p.name AS project, a.duration_minutes, a.start_time
FROM activity_sessions a
JOIN developers d ON a.developer_id = d.developer_id
JOIN projects p ON a.project_id = p.project_id
JOIN languages l ON a.language_id = l.language_id
WHERE l.name = ?1
  AND a.duration_minutes >= ?2
ORDER BY a.start_time DESC, a.activity_id DESC";

const SELECT_PROJECT_TOTALS: &str = "SELECT p.name, SUM(a.duration_minutes) AS total_minutes,
       COUNT(a.activity_id) AS session_count
FROM projects p
LEFT JOIN activity_sessions a ON p.project_id = a.project_id
GROUP BY p.project_id, p.name
ORDER BY total_minutes DESC NULLS LAST, p.name ASC";

const SELECT_AVERAGE_SESSION: &str = "SELECT d.nickname, AVG(a.duration_minutes) AS avg_minutes
FROM developers d
JOIN activity_sessions a ON d.developer_id = a.developer_id
WHERE d.nickname = ?1
GROUP BY d.nickname";

const SELECT_TOP_LANGUAGES: &str = "SELECT l.name, SUM(a.duration_minutes) AS total_minutes
FROM languages l
JOIN activity_sessions a ON l.language_id = a.language_id
GROUP BY l.language_id, l.name
ORDER BY total_minutes DESC, l.name ASC
LIMIT ?1";

const SELECT_EDITOR_SHARE: &str = "SELECT e.name, SUM(a.duration_minutes) AS total_minutes,
       ROUND(100.0 * SUM(a.duration_minutes) /
             (SELECT SUM(duration_minutes) FROM activity_sessions), 2) AS percent
FROM editors e
JOIN activity_sessions a ON e.editor_id = a.editor_id
GROUP BY e.name
HAVING SUM(a.duration_minutes) > 0
ORDER BY total_minutes DESC, e.name ASC";

const SELECT_BUSY_DAYS: &str = "SELECT dm.day, d.nickname, dm.coding_minutes
FROM daily_metrics dm
JOIN developers d ON dm.developer_id = d.developer_id
WHERE dm.coding_minutes >= ?1
ORDER BY dm.coding_minutes DESC, dm.day DESC, d.nickname ASC";

const SELECT_PROJECT_LEADERBOARD: &str = "SELECT p.name, SUM(a.duration_minutes) AS total_minutes
FROM projects p
JOIN activity_sessions a ON p.project_id = a.project_id
WHERE a.developer_id = (
  SELECT developer_id FROM developers WHERE nickname = ?1
)
GROUP BY p.project_id, p.name
ORDER BY total_minutes DESC, p.name ASC";

/// A report request with its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// Every project with its total minutes; projects without sessions last.
    Projects,
    /// The ten newest sessions with developer, project, language and editor.
    RecentSessions,
    /// Sessions in one language lasting at least `min_minutes`, newest first.
    SessionsByLanguage { language: String, min_minutes: i64 },
    /// Every project with total minutes and session count.
    ProjectTotals,
    /// Mean session length of one developer.
    AverageSession { nickname: String },
    /// Languages ranked by total minutes, at most `limit` rows.
    TopLanguages { limit: i64 },
    /// Minutes per editor and their share of all recorded minutes.
    EditorShare,
    /// Developer days with at least `min_minutes` of coding.
    BusyDays { min_minutes: i64 },
    /// Per-project minutes for one developer.
    ProjectLeaderboard { nickname: String },
}

impl Report {
    /// Heading printed above the report output.
    pub fn title(&self) -> Message {
        match self {
            Report::Projects => Message::ReportProjects,
            Report::RecentSessions => Message::ReportRecentSessions,
            Report::SessionsByLanguage { language, min_minutes } => Message::ReportSessionsByLanguage(language.clone(), *min_minutes),
            Report::ProjectTotals => Message::ReportProjectTotals,
            Report::AverageSession { nickname } => Message::ReportAverageSession(nickname.clone()),
            Report::TopLanguages { limit } => Message::ReportTopLanguages(*limit),
            Report::EditorShare => Message::ReportEditorShare,
            Report::BusyDays { min_minutes } => Message::ReportBusyDays(*min_minutes),
            Report::ProjectLeaderboard { nickname } => Message::ReportProjectLeaderboard(nickname.clone()),
        }
    }

    fn sql(&self) -> &'static str {
        match self {
            Report::Projects => SELECT_PROJECTS,
            Report::RecentSessions => SELECT_RECENT_SESSIONS,
            Report::SessionsByLanguage { .. } => SELECT_SESSIONS_BY_LANGUAGE,
            Report::ProjectTotals => SELECT_PROJECT_TOTALS,
            Report::AverageSession { .. } => SELECT_AVERAGE_SESSION,
            Report::TopLanguages { .. } => SELECT_TOP_LANGUAGES,
            Report::EditorShare => SELECT_EDITOR_SHARE,
            Report::BusyDays { .. } => SELECT_BUSY_DAYS,
            Report::ProjectLeaderboard { .. } => SELECT_PROJECT_LEADERBOARD,
        }
    }

    /// Executes the report.
    pub fn run(&self, db: &Db) -> DbResult<Table> {
        // SQLite reads a negative LIMIT as "no limit"
        let top_limit = match self {
            Report::TopLanguages { limit } => (*limit).max(0),
            _ => 0,
        };

        let params: Vec<&dyn ToSql> = match self {
            Report::RecentSessions => vec![&RECENT_SESSIONS_LIMIT as &dyn ToSql],
            Report::SessionsByLanguage { language, min_minutes } => vec![language as &dyn ToSql, min_minutes as &dyn ToSql],
            Report::AverageSession { nickname } | Report::ProjectLeaderboard { nickname } => vec![nickname as &dyn ToSql],
            Report::TopLanguages { .. } => vec![&top_limit as &dyn ToSql],
            Report::BusyDays { min_minutes } => vec![min_minutes as &dyn ToSql],
            Report::Projects | Report::ProjectTotals | Report::EditorShare => vec![],
        };

        db.query_table(self.sql(), &params)
    }
}
