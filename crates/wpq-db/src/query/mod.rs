//! The pending query.
//!
//! A [`PendingQuery`] is the accumulated, not yet executed state of a
//! composed query: target entity, projection, joins, filters, ordering and
//! pagination. It renders itself into a SQL string plus bound parameters for
//! a [`DatabaseClient`](crate::client::DatabaseClient) to execute.
//!
//! # Submodules
//!
//! - [`clause`]: join and ordering clauses.
//! - [`select`]: implementation of [`PendingQuery`].

pub mod clause;
pub mod select;

pub use clause::{Join, OrderClause};
pub use select::{PendingQuery, QueryKind};
