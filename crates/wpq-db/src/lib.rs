pub mod client;
pub mod composer;
pub mod connection;
pub mod error;
pub mod expr;
pub mod fields;
pub mod macros;
pub mod models;
pub mod order;
pub mod query;
pub mod row;
pub mod schema;
pub mod traits;

#[cfg(test)]
mod test_utils;

pub use client::DatabaseClient;
pub use composer::QueryComposer;
pub use connection::{SqliteClient, DEFAULT_TABLE_PREFIX};
pub use error::{DbError, Result};
pub use fields::{FieldList, DEFAULT_POST_FIELDS};
pub use order::{CategoryOrder, PostOrder};
pub use query::*;
pub use row::{DisplayValue, Row, RowSet};
pub use rusqlite::types::Value;
pub use schema::Entity;
pub use traits::FromRow;
