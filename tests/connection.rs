mod common;

#[cfg(test)]
mod tests {
    use crate::common::ActivityDbContext;
    use devtrack::db::db::Db;
    use devtrack::db::error::DbError;
    use devtrack::db::reports::Report;
    use std::fs;
    use test_context::test_context;

    #[test_context(ActivityDbContext)]
    #[test]
    fn test_connect_and_disconnect(ctx: &mut ActivityDbContext) {
        let mut db = Db::new();
        assert!(!db.is_connected());

        db.connect(&ctx.descriptor()).unwrap();
        assert!(db.is_connected());

        db.disconnect();
        assert!(!db.is_connected());
        db.disconnect();
        assert!(!db.is_connected());
    }

    #[test_context(ActivityDbContext)]
    #[test]
    fn test_queries_after_disconnect_fail(ctx: &mut ActivityDbContext) {
        let mut db = ctx.open();
        db.disconnect();

        assert!(matches!(Report::Projects.run(&db), Err(DbError::NotConnected)));
        assert!(matches!(db.execute("DELETE FROM activity_sessions", &[]), Err(DbError::NotConnected)));
        assert_eq!(ctx.session_count(), 6);
    }

    #[test_context(ActivityDbContext)]
    #[test]
    fn test_missing_database_is_connection_error(ctx: &mut ActivityDbContext) {
        let missing = ctx.path.with_file_name("missing.db");
        let err = Db::open(&missing.to_string_lossy()).err().unwrap();

        assert!(err.is_connection());
        assert!(!err.to_string().is_empty());
        assert!(!missing.exists());
    }

    #[test_context(ActivityDbContext)]
    #[test]
    fn test_non_database_file_is_connection_error(ctx: &mut ActivityDbContext) {
        let bogus = ctx.path.with_file_name("notes.txt");
        fs::write(&bogus, "plain text, not a database\n".repeat(64)).unwrap();

        let mut db = Db::new();
        let err = db.connect(&bogus.to_string_lossy()).unwrap_err();
        assert!(err.is_connection());
        assert!(!db.is_connected());
    }

    #[test_context(ActivityDbContext)]
    #[test]
    fn test_uri_descriptor(ctx: &mut ActivityDbContext) {
        let uri = format!("file:{}?mode=ro", ctx.descriptor());
        let db = Db::open(&uri).unwrap();

        assert_eq!(Report::Projects.run(&db).unwrap().len(), 3);
        assert!(matches!(db.execute("DELETE FROM activity_sessions", &[]), Err(DbError::Query(_))));
        assert_eq!(ctx.session_count(), 6);
    }

    #[test_context(ActivityDbContext)]
    #[test]
    fn test_reconnect_replaces_handle(ctx: &mut ActivityDbContext) {
        let other = ctx.path.with_file_name("other.db");
        fs::copy(&ctx.path, &other).unwrap();

        let mut db = ctx.open();
        db.connect(&other.to_string_lossy()).unwrap();
        assert!(db.is_connected());

        db.execute("DELETE FROM activity_sessions", &[]).unwrap();
        assert!(Report::RecentSessions.run(&db).unwrap().is_empty());
        assert_eq!(ctx.session_count(), 6);
    }

    #[test_context(ActivityDbContext)]
    #[test]
    fn test_foreign_keys_enforced(ctx: &mut ActivityDbContext) {
        let db = ctx.open();
        let result = db.execute(
            "INSERT INTO activity_sessions (developer_id, project_id, language_id, editor_id, start_time, duration_minutes)
             VALUES (99, 1, 1, 1, '2024-05-01 10:00:00', 10)",
            &[],
        );
        assert!(matches!(result, Err(DbError::Query(_))));
        assert_eq!(ctx.session_count(), 6);
    }

    #[test_context(ActivityDbContext)]
    #[test]
    fn test_cells_use_sqlite_text_form(ctx: &mut ActivityDbContext) {
        let db = ctx.open();
        let table = db
            .query_table("SELECT 45.0 AS whole, 0.1 + 0.2 AS sum, 2.0 / 3 AS third, NULL AS missing, 'main' AS branch, 7 AS count", &[])
            .unwrap();

        assert_eq!(table.cell(0, "whole"), Some("45.0"));
        assert_eq!(table.cell(0, "sum"), Some("0.3"));
        assert_eq!(table.cell(0, "third"), Some("0.666666666666667"));
        assert_eq!(table.cell(0, "missing"), None);
        assert_eq!(table.cell(0, "branch"), Some("main"));
        assert_eq!(table.cell(0, "count"), Some("7"));
    }

    #[test_context(ActivityDbContext)]
    #[test]
    fn test_malformed_statement_keeps_connection(ctx: &mut ActivityDbContext) {
        let db = ctx.open();
        assert!(db.query_table("SELECT FROM nowhere", &[]).is_err());
        assert!(db.is_connected());
        assert_eq!(Report::Projects.run(&db).unwrap().len(), 3);
    }
}
