//! Shared fixture: a temporary SQLite database built from the reference
//! schema and seeded with a small, known data set.
//!
//! | id | developer | project | language | editor (id) | start_time          | minutes |
//! |----|-----------|---------|----------|-------------|---------------------|---------|
//! | 1  | alice     | Alpha   | Go       | VSCode (1)  | 2024-03-01 09:00:00 | 60      |
//! | 2  | alice     | Alpha   | Rust     | Vim (2)     | 2024-03-01 14:00:00 | 30      |
//! | 3  | alice     | Beta    | Go       | VSCode (1)  | 2024-03-02 10:00:00 | 90      |
//! | 4  | bob       | Beta    | Python   | VSCode (3)  | 2024-03-02 11:00:00 | 140     |
//! | 5  | bob       | Alpha   | Rust     | Vim (2)     | 2024-03-03 08:00:00 | 110     |
//! | 6  | bob       | Alpha   | Go       | VSCode (1)  | 2024-03-03 16:00:00 | 15      |
//!
//! carol, Gamma and Emacs exist without any sessions. Editor id 3 repeats the
//! name "VSCode".

#![allow(dead_code)]

use devtrack::db::db::Db;
use rusqlite::Connection;
use std::path::PathBuf;
use tempfile::TempDir;
use test_context::TestContext;

pub const SCHEMA: &str = include_str!("../../sql/schema.sql");

const SEED: &str = "
INSERT INTO developers (developer_id, nickname) VALUES (1, 'alice'), (2, 'bob'), (3, 'carol');
INSERT INTO projects (project_id, name) VALUES (1, 'Alpha'), (2, 'Beta'), (3, 'Gamma');
INSERT INTO languages (language_id, name) VALUES (1, 'Go'), (2, 'Python'), (3, 'Rust');
INSERT INTO editors (editor_id, name) VALUES (1, 'VSCode'), (2, 'Vim'), (3, 'VSCode'), (4, 'Emacs');
INSERT INTO activity_sessions
    (activity_id, developer_id, project_id, language_id, editor_id, start_time, duration_minutes, branch, os)
VALUES
    (1, 1, 1, 1, 1, '2024-03-01 09:00:00', 60, 'main', 'linux'),
    (2, 1, 1, 3, 2, '2024-03-01 14:00:00', 30, 'feature/parser', 'linux'),
    (3, 1, 2, 1, 1, '2024-03-02 10:00:00', 90, 'main', 'macos'),
    (4, 2, 2, 2, 3, '2024-03-02 11:00:00', 140, 'develop', 'windows'),
    (5, 2, 1, 3, 2, '2024-03-03 08:00:00', 110, 'main', 'linux'),
    (6, 2, 1, 1, 1, '2024-03-03 16:00:00', 15, 'hotfix', 'linux');
";

pub struct ActivityDbContext {
    _temp_dir: TempDir,
    pub path: PathBuf,
}

impl ActivityDbContext {
    pub fn descriptor(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }

    pub fn open(&self) -> Db {
        Db::open(&self.descriptor()).unwrap()
    }

    /// Direct rusqlite handle for checks that bypass devtrack.
    pub fn raw(&self) -> Connection {
        Connection::open(&self.path).unwrap()
    }

    pub fn session_count(&self) -> i64 {
        self.raw()
            .query_row("SELECT COUNT(*) FROM activity_sessions", [], |row| row.get(0))
            .unwrap()
    }
}

impl TestContext for ActivityDbContext {
    fn setup() -> Self {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("activity.db");

        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(SCHEMA).unwrap();
        conn.execute_batch(SEED).unwrap();
        conn.close().unwrap();

        ActivityDbContext { _temp_dir: temp_dir, path }
    }
}
