use thiserror::Error;

/// Failures of the connection, catalog and recorder.
///
/// `Connection` is fatal at startup. Every other variant is a query-level
/// failure the interactive loop reports and survives. An empty result is
/// never an error.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("{0}")]
    Connection(String),

    #[error("no open database connection")]
    NotConnected,

    #[error(transparent)]
    Query(#[from] rusqlite::Error),

    #[error("{entity} '{name}' not found")]
    Unresolved { entity: &'static str, name: String },
}

impl DbError {
    /// True for failures that happened while establishing the connection.
    pub fn is_connection(&self) -> bool {
        matches!(self, DbError::Connection(_))
    }
}

pub type DbResult<T> = Result<T, DbError>;
