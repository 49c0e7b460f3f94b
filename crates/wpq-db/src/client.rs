//! The database collaborator the composer executes against.

use crate::{
    error::Result,
    query::PendingQuery,
    row::{Row, RowSet},
};

/// Executes rendered queries and materializes their results.
///
/// The composer never talks to a driver directly; it hands a
/// [`PendingQuery`] to an implementation of this trait. Errors raised by the
/// implementation are propagated to the caller unchanged.
pub trait DatabaseClient {
    /// Runs the query and returns every matching row.
    fn select_query(&self, query: &PendingQuery) -> Result<RowSet>;

    /// Runs the query and returns its first row, if any.
    ///
    /// A limit already set on the query still applies, so `LIMIT 0` yields `None`.
    fn row(&self, query: &PendingQuery) -> Result<Option<Row>> {
        let limit = query.limit_value().map_or(1, |limit| limit.min(1));
        let rows = self.select_query(&query.clone().limit(limit))?;
        Ok(rows.into_iter().next())
    }

    /// Counts the rows matched by the query's joins and filters.
    fn count(&self, query: &PendingQuery) -> Result<u64>;
}
