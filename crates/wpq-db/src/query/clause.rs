//! Representation of query clauses.

use rusqlite::types::Value;

use crate::{expr::Col, schema::Entity, traits::Expression};

/// `JOIN <entity> ON <left> = <right>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Join {
    pub entity: Entity,
    pub left: Col,
    pub right: Col,
}

impl Expression for Join {
    fn to_sql(&self, prefix: &str, params: &mut Vec<Value>) -> String {
        format!(
            "JOIN {} ON {} = {}",
            self.entity.prefixed(prefix),
            self.left.to_sql(prefix, params),
            self.right.to_sql(prefix, params)
        )
    }
}

/// An ORDER BY clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderClause {
    pub column: Col,
    pub desc: bool,
}

impl Expression for OrderClause {
    fn to_sql(&self, prefix: &str, params: &mut Vec<Value>) -> String {
        format!(
            "{} {}",
            self.column.to_sql(prefix, params),
            if self.desc { "DESC" } else { "ASC" }
        )
    }
}
