//! Materialized result rows.
//!
//! Rows are produced by a [`DatabaseClient`](crate::client::DatabaseClient)
//! and are read-only for the composer. Column lookup is case-insensitive, like
//! SQL identifiers, so `id` finds a column declared as `ID`.

use std::fmt;

use rusqlite::types::Value;
use serde::{ser::SerializeMap, Serialize, Serializer};

use crate::error::{DbError, Result};

/// An ordered list of rows returned by a query.
pub type RowSet = Vec<Row>;

/// A single result record: ordered `(column, value)` pairs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: Vec<(String, Value)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, column: impl Into<String>, value: Value) {
        self.cells.push((column.into(), value));
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.cells.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Returns the value of `column`, or `None` if the row has no such column.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.cells
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(column))
            .map(|(_, value)| value)
    }

    fn require(&self, column: &str) -> Result<&Value> {
        self.get(column).ok_or_else(|| DbError::ColumnError {
            column: column.to_string(),
            reason: "is not part of the row".to_string(),
        })
    }

    pub fn get_i64(&self, column: &str) -> Result<i64> {
        match self.require(column)? {
            Value::Integer(value) => Ok(*value),
            other => Err(type_mismatch(column, "an integer", other)),
        }
    }

    pub fn get_str(&self, column: &str) -> Result<&str> {
        match self.require(column)? {
            Value::Text(value) => Ok(value),
            other => Err(type_mismatch(column, "text", other)),
        }
    }

    pub fn get_opt_str(&self, column: &str) -> Result<Option<&str>> {
        match self.require(column)? {
            Value::Null => Ok(None),
            Value::Text(value) => Ok(Some(value)),
            other => Err(type_mismatch(column, "text or null", other)),
        }
    }
}

fn type_mismatch(column: &str, expected: &str, found: &Value) -> DbError {
    DbError::ColumnError {
        column: column.to_string(),
        reason: format!("is not {expected} (found {:?})", found.data_type()),
    }
}

/// Renders a cell for plain-text output.
pub struct DisplayValue<'a>(pub &'a Value);

impl fmt::Display for DisplayValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::Null => Ok(()),
            Value::Integer(value) => write!(f, "{value}"),
            Value::Real(value) => write!(f, "{value}"),
            Value::Text(value) => f.write_str(value),
            Value::Blob(bytes) => write!(f, "<{} bytes>", bytes.len()),
        }
    }
}

struct SerializeValue<'a>(&'a Value);

impl Serialize for SerializeValue<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.0 {
            Value::Null => serializer.serialize_none(),
            Value::Integer(value) => serializer.serialize_i64(*value),
            Value::Real(value) => serializer.serialize_f64(*value),
            Value::Text(value) => serializer.serialize_str(value),
            Value::Blob(bytes) => serializer.serialize_bytes(bytes),
        }
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (name, value) in &self.cells {
            map.serialize_entry(name, &SerializeValue(value))?;
        }
        map.end()
    }
}
