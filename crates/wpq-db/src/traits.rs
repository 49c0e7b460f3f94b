//! Core traits that power the query composer.
//!
//! These traits define the contract for:
//! - Building SQL expressions (`Expression`)
//! - Converting result rows into Rust types (`FromRow`)

use rusqlite::types::Value;

use crate::{error::Result, row::Row};

/// A trait for types that can be rendered into SQL fragments.
///
/// Implementors include:
/// - [`super::expr::Col`]: a table column
/// - [`super::expr::Filter`]: an equality predicate
pub trait Expression {
    /// Converts this expression into a SQL string fragment and appends bound parameters.
    ///
    /// # Parameters
    ///
    /// - `prefix`: the table prefix of the WordPress installation (e.g. `wp_`).
    /// - `params`: a mutable vector to which bound values are pushed.
    ///
    /// # Returns
    ///
    /// A SQL string fragment using `?` as placeholders for parameters.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wpq_db::expr::Col;
    /// use wpq_db::traits::Expression as _;
    ///
    /// let expr = Col::new("meta_key").eq("_thumbnail_id".to_string());
    /// let mut params = vec![];
    /// let sql = expr.to_sql("wp_", &mut params);
    /// assert_eq!(sql, "meta_key = ?");
    /// ```
    fn to_sql(&self, prefix: &str, params: &mut Vec<Value>) -> String;
}

/// A trait for types that can be constructed from a result [`Row`].
///
/// This is used by [`crate::QueryComposer::fetch_one_as`] and
/// [`crate::QueryComposer::fetch_all_as`] to map query results.
///
/// # Example
///
/// ```rust
/// use wpq_db::{FromRow, Row};
///
/// struct Title {
///     title: String,
/// }
///
/// impl FromRow for Title {
///     fn from_row(row: &Row) -> wpq_db::Result<Self> {
///         Ok(Title {
///             title: row.get_str("post_title")?.to_string(),
///         })
///     }
/// }
/// ```
pub trait FromRow: Sized {
    fn from_row(row: &Row) -> Result<Self>;
}
