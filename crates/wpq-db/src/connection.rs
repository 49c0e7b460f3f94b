//! SQLite-backed database client.
//!
//! [`SqliteClient`] opens a WordPress database (typically an export of the
//! MySQL schema into SQLite) and executes pending queries with the table
//! prefix of that installation applied.

use std::{
    path::Path,
    sync::{Arc, Mutex, MutexGuard},
};

use rusqlite::{types::Value, Connection, OpenFlags, ToSql};
use tracing::{debug, trace};
use wpq_utils::ident::is_valid_prefix;

use crate::{
    client::DatabaseClient,
    error::{DbError, Result},
    query::PendingQuery,
    row::{Row, RowSet},
    schema::Entity,
};

/// Table prefix of a stock WordPress installation.
pub const DEFAULT_TABLE_PREFIX: &str = "wp_";

/// A [`DatabaseClient`] over a shared rusqlite connection.
#[derive(Clone)]
pub struct SqliteClient {
    conn: Arc<Mutex<Connection>>,
    prefix: String,
}

impl SqliteClient {
    /// Opens the database at `path` read-only.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::ConfigurationError`] if the file cannot be opened,
    /// the prefix is invalid, or the database has no `<prefix>posts` table.
    pub fn open<P: AsRef<Path>>(path: P, prefix: &str) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|err| {
            DbError::ConfigurationError(format!("cannot open {}: {err}", path.display()))
        })?;

        debug!(path = %path.display(), prefix, "opened database");
        Self::from_connection(conn, prefix)
    }

    /// Wraps an already open connection.
    ///
    /// # Errors
    ///
    /// Same validation as [`SqliteClient::open`].
    pub fn from_connection(conn: Connection, prefix: &str) -> Result<Self> {
        if !is_valid_prefix(prefix) {
            return Err(DbError::ConfigurationError(format!(
                "table prefix `{prefix}` may only contain ASCII letters, digits and underscores"
            )));
        }

        let posts_table = Entity::Posts.prefixed(prefix);
        let found: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
                [&posts_table],
                |row| row.get(0),
            )
            .map_err(|err| DbError::ConfigurationError(err.to_string()))?;

        if found == 0 {
            return Err(DbError::ConfigurationError(format!(
                "table `{posts_table}` not found; is this a WordPress database with prefix `{prefix}`?"
            )));
        }

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            prefix: prefix.to_string(),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|err| DbError::ConnectionError(err.to_string()))
    }
}

impl DatabaseClient for SqliteClient {
    fn select_query(&self, query: &PendingQuery) -> Result<RowSet> {
        let (sql, params) = query.build_sql(&self.prefix);
        debug!(sql = sql, params = params.len(), "executing select");

        let conn = self.lock()?;
        let mut stmt = conn.prepare(&sql)?;
        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();

        let params_ref: Vec<&dyn ToSql> = params.iter().map(|v| v as &dyn ToSql).collect();
        let rows = stmt.query_map(params_ref.as_slice(), |sql_row| {
            let mut row = Row::with_capacity(columns.len());
            for (idx, name) in columns.iter().enumerate() {
                row.push(name.as_str(), sql_row.get::<_, Value>(idx)?);
            }
            Ok(row)
        })?;

        let rows = rows.collect::<rusqlite::Result<RowSet>>()?;
        trace!(rows = rows.len(), "select finished");
        Ok(rows)
    }

    fn count(&self, query: &PendingQuery) -> Result<u64> {
        let (sql, params) = query.build_count_sql(&self.prefix);
        debug!(sql = sql, params = params.len(), "executing count");

        let conn = self.lock()?;
        let mut stmt = conn.prepare(&sql)?;

        let params_ref: Vec<&dyn ToSql> = params.iter().map(|v| v as &dyn ToSql).collect();
        let count: i64 = stmt.query_row(params_ref.as_slice(), |row| row.get(0))?;
        u64::try_from(count).map_err(|err| DbError::QueryError(err.to_string()))
    }
}
