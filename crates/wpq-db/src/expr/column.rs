//! Represents a database column.
//!
//! `Col` ties a column name to the [`Entity`] it belongs to. It implements
//! [`Expression`], so it can be used directly in filters, joins and ordering.

use rusqlite::types::Value;

use crate::{expr::ops::Filter, schema::Entity, traits::Expression};

/// A reference to a database column, optionally qualified by its table.
///
/// # Example
///
/// ```rust
/// use wpq_db::{expr::Col, schema::Entity};
///
/// const NAME: Col = Col::qualified(Entity::Terms, "name");
/// assert_eq!(NAME.bare(), Col::new("name"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Col {
    pub entity: Option<Entity>,
    pub name: &'static str,
}

impl Col {
    /// Creates an unqualified column reference.
    pub const fn new(name: &'static str) -> Self {
        Self {
            entity: None,
            name,
        }
    }

    /// Creates a column reference qualified by `entity`.
    pub const fn qualified(entity: Entity, name: &'static str) -> Self {
        Self {
            entity: Some(entity),
            name,
        }
    }

    /// Drops the table qualification.
    pub const fn bare(self) -> Self {
        Self::new(self.name)
    }

    /// Creates a SQL `=` condition.
    pub fn eq<V: Into<Value>>(self, value: V) -> Filter {
        Filter::new(self, value.into())
    }

    /// Column reference as it appears in SQL, with the table prefix applied.
    pub fn qualified_name(&self, prefix: &str) -> String {
        match self.entity {
            Some(entity) => format!("{}.{}", entity.prefixed(prefix), self.name),
            None => self.name.to_string(),
        }
    }
}

impl Expression for Col {
    fn to_sql(&self, prefix: &str, _params: &mut Vec<Value>) -> String {
        self.qualified_name(prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified_name_applies_prefix() {
        let col = Col::qualified(Entity::TermTaxonomy, "taxonomy");
        assert_eq!(col.qualified_name("wp_"), "wp_term_taxonomy.taxonomy");
        assert_eq!(col.qualified_name(""), "term_taxonomy.taxonomy");
        assert_eq!(col.bare().qualified_name("wp_"), "taxonomy");
    }

    #[test]
    fn test_column_expression_binds_nothing() {
        let mut params = vec![];
        let sql = Col::new("post_date").to_sql("wp_", &mut params);
        assert_eq!(sql, "post_date");
        assert!(params.is_empty());
    }
}
