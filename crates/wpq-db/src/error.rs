//! Error types for wpq-db.

use miette::Diagnostic;
use thiserror::Error;

/// Error type for query composition and execution.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Database is not usable: {0}")]
    #[diagnostic(
        code(wpq_db::configuration),
        help("Check the database path and the table prefix in your config file")
    )]
    ConfigurationError(String),

    #[error("Database connection failed: {0}")]
    #[diagnostic(
        code(wpq_db::connection),
        help("Check if the database file exists and is accessible")
    )]
    ConnectionError(String),

    #[error("Database query failed: {0}")]
    #[diagnostic(code(wpq_db::query))]
    QueryError(String),

    #[error("Invalid argument: {0}")]
    #[diagnostic(code(wpq_db::invalid_argument))]
    InvalidArgument(String),

    #[error("Invalid call sequence: {0}")]
    #[diagnostic(
        code(wpq_db::caller_misuse),
        help("Start the query with taxonomy_for() before narrowing it to categories or tags")
    )]
    CallerMisuse(String),

    #[error("Column `{column}` {reason}")]
    #[diagnostic(code(wpq_db::column))]
    ColumnError { column: String, reason: String },
}

impl From<rusqlite::Error> for DbError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(_, Some(message)) => DbError::QueryError(message),
            other => DbError::QueryError(other.to_string()),
        }
    }
}

/// Result type alias for wpq-db operations.
pub type Result<T> = std::result::Result<T, DbError>;
