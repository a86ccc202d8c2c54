use super::error::{DbError, DbResult};
use crate::libs::table::Table;
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags, ToSql};
use tracing::{debug, warn};

/// Cheap statement that fails on a dead handle or a file that is not a database.
const LIVENESS_PROBE: &str = "SELECT count(*) FROM sqlite_master";

/// Foreign keys are off by default in SQLite and must be enabled per connection.
const ENABLE_FOREIGN_KEYS: &str = "PRAGMA foreign_keys = ON";

/// Lets SQLite produce the text of a REAL exactly as it would print it.
const REAL_AS_TEXT: &str = "SELECT CAST(?1 AS TEXT)";

/// Owner of the single database connection.
///
/// The lifecycle is explicit: [`Db::connect`] (or [`Db::open`]), use through
/// [`Db::query_table`] / [`Db::execute`], then [`Db::disconnect`]. Dropping a
/// `Db` disconnects it. There is no pooling and no reconnect; a new
/// `connect` replaces the previous handle.
///
/// ```rust,no_run
/// use devtrack::db::db::Db;
///
/// let mut db = Db::open("activity.db")?;
/// assert!(db.is_connected());
/// let projects = db.query_table("SELECT name FROM projects", &[])?;
/// db.disconnect();
/// # Ok::<(), devtrack::db::error::DbError>(())
/// ```
#[derive(Default)]
pub struct Db {
    conn: Option<Connection>,
}

impl Db {
    pub fn new() -> Self {
        Self { conn: None }
    }

    /// Creates a `Db` and connects it in one step.
    pub fn open(descriptor: &str) -> DbResult<Self> {
        let mut db = Self::new();
        db.connect(descriptor)?;
        Ok(db)
    }

    /// Opens a connection with a driver-specific descriptor.
    ///
    /// The descriptor is a SQLite path or `file:` URI and is handed to the
    /// driver unchanged. The database must already exist. After opening, the
    /// handle is probed and foreign-key enforcement is switched on for the
    /// session; if either step fails the handle is released and nothing is
    /// kept.
    pub fn connect(&mut self, descriptor: &str) -> DbResult<()> {
        self.disconnect();

        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_URI | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(descriptor, flags).map_err(|e| DbError::Connection(e.to_string()))?;

        if let Err(e) = Self::verify(&conn) {
            drop(conn);
            return Err(DbError::Connection(e.to_string()));
        }

        debug!(descriptor, "connected");
        self.conn = Some(conn);
        Ok(())
    }

    fn verify(conn: &Connection) -> rusqlite::Result<()> {
        conn.query_row(LIVENESS_PROBE, [], |row| row.get::<_, i64>(0))?;
        conn.execute_batch(ENABLE_FOREIGN_KEYS)?;
        Ok(())
    }

    /// Releases the connection if one is held. Safe to call repeatedly.
    pub fn disconnect(&mut self) {
        if let Some(conn) = self.conn.take() {
            if let Err((_, e)) = conn.close() {
                warn!(error = %e, "closing connection failed, handle dropped");
            }
            debug!("disconnected");
        }
    }

    /// True only if a handle is held and it answers a probe right now.
    pub fn is_connected(&self) -> bool {
        self.conn
            .as_ref()
            .is_some_and(|conn| conn.query_row(LIVENESS_PROBE, [], |_| Ok(())).is_ok())
    }

    pub(crate) fn conn(&self) -> DbResult<&Connection> {
        self.conn.as_ref().ok_or(DbError::NotConnected)
    }

    /// Runs one read statement with bound parameters and collects the result.
    ///
    /// Zero matching rows is a successful, empty [`Table`]. The prepared
    /// statement and its row cursor live only inside this call and are
    /// released on every return path.
    pub fn query_table(&self, sql: &str, params: &[&dyn ToSql]) -> DbResult<Table> {
        let conn = self.conn()?;
        debug!(sql, params = params.len(), "query");

        let mut stmt = conn.prepare(sql)?;
        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
        let column_count = columns.len();
        let mut table = Table::new(columns);

        let mut rows = stmt.query(params)?;
        while let Some(row) = rows.next()? {
            let mut cells = Vec::with_capacity(column_count);
            for index in 0..column_count {
                cells.push(cell_text(conn, row.get_ref(index)?)?);
            }
            table.push_row(cells);
        }

        debug!(rows = table.len(), "query done");
        Ok(table)
    }

    /// Runs one write statement with bound parameters and returns the number
    /// of affected rows.
    pub fn execute(&self, sql: &str, params: &[&dyn ToSql]) -> DbResult<usize> {
        let conn = self.conn()?;
        debug!(sql, params = params.len(), "execute");
        Ok(conn.execute(sql, params)?)
    }
}

/// Text form of one result cell, NULL staying `None`.
///
/// Reals are converted by SQLite itself so averages and percentages read the
/// same as in any other SQLite client.
fn cell_text(conn: &Connection, value: ValueRef<'_>) -> rusqlite::Result<Option<String>> {
    Ok(match value {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => {
            let mut stmt = conn.prepare_cached(REAL_AS_TEXT)?;
            Some(stmt.query_row([f], |row| row.get(0))?)
        }
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
    })
}

impl Drop for Db {
    fn drop(&mut self) {
        self.disconnect();
    }
}
