//! The pending query implementation.

use rusqlite::types::Value;

use crate::{
    expr::{Col, Filter},
    fields::FieldList,
    query::clause::{Join, OrderClause},
    schema::Entity,
    traits::Expression,
};

/// What started the pending query.
///
/// A query is `Idle` until one of the base-selection calls of the composer
/// (`select_posts`, `posts`, `meta_value`, `taxonomy_for`) starts it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QueryKind {
    #[default]
    Idle,
    Posts,
    Meta,
    Taxonomy,
}

/// Accumulated state of a SELECT statement.
///
/// Every builder method takes the query by value and returns the updated
/// value, so a clone is an independent snapshot.
///
/// # Example
///
/// ```rust
/// use wpq_db::{expr::Col, fields::FieldList, query::PendingQuery, schema::Entity};
///
/// let (sql, params) = PendingQuery::new(Entity::Posts)
///     .select(FieldList::new(["id", "post_title"]).unwrap())
///     .filter(Col::new("post_status").eq("publish".to_string()))
///     .order_by(Col::new("post_date"), true)
///     .limit(10)
///     .build_sql("wp_");
///
/// assert_eq!(
///     sql,
///     "SELECT id, post_title FROM wp_posts WHERE post_status = ? ORDER BY post_date DESC LIMIT 10"
/// );
/// assert_eq!(params.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PendingQuery {
    kind: QueryKind,
    entity: Entity,
    fields: FieldList,
    joins: Vec<Join>,
    filters: Vec<Filter>,
    order: Option<OrderClause>,
    limit: Option<u64>,
    offset: Option<u64>,
}

impl Default for PendingQuery {
    fn default() -> Self {
        Self::new(Entity::Posts)
    }
}

impl PendingQuery {
    /// Starts an empty query on the given entity, selecting `*`.
    pub fn new(entity: Entity) -> Self {
        Self {
            kind: QueryKind::Idle,
            entity,
            fields: FieldList::all(),
            joins: vec![],
            filters: vec![],
            order: None,
            limit: None,
            offset: None,
        }
    }

    pub fn with_kind(mut self, kind: QueryKind) -> Self {
        self.kind = kind;
        self
    }

    /// Replaces the projection.
    pub fn select(mut self, fields: FieldList) -> Self {
        self.fields = fields;
        self
    }

    /// Adds a `JOIN entity ON left = right` clause.
    pub fn join(mut self, entity: Entity, left: Col, right: Col) -> Self {
        self.joins.push(Join {
            entity,
            left,
            right,
        });
        self
    }

    /// Adds a WHERE condition. Conditions are combined with `AND` in call order.
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Sets the ORDER BY clause, replacing any previous one.
    pub fn order_by(mut self, column: Col, desc: bool) -> Self {
        self.order = Some(OrderClause {
            column,
            desc,
        });
        self
    }

    /// Limit the number of results
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set query offset; `None` clears it.
    pub fn offset(mut self, offset: Option<u64>) -> Self {
        self.offset = offset;
        self
    }

    /// Replaces the `FROM` entity and keeps every other clause.
    pub fn retarget(mut self, entity: Entity) -> Self {
        self.entity = entity;
        self
    }

    pub fn kind(&self) -> QueryKind {
        self.kind
    }

    pub fn entity(&self) -> Entity {
        self.entity
    }

    pub fn fields(&self) -> &FieldList {
        &self.fields
    }

    pub fn joins(&self) -> &[Join] {
        &self.joins
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn order(&self) -> Option<&OrderClause> {
        self.order.as_ref()
    }

    pub fn limit_value(&self) -> Option<u64> {
        self.limit
    }

    pub fn offset_value(&self) -> Option<u64> {
        self.offset
    }

    /// Renders the SELECT statement with `prefix` applied to every table name.
    pub fn build_sql(&self, prefix: &str) -> (String, Vec<Value>) {
        let mut params = vec![];
        let mut sql = format!(
            "SELECT {} FROM {}",
            self.fields.to_sql(prefix),
            self.entity.prefixed(prefix)
        );

        self.push_joins_and_filters(prefix, &mut sql, &mut params);

        if let Some(order) = &self.order {
            sql.push_str(" ORDER BY ");
            sql.push_str(&order.to_sql(prefix, &mut params));
        }

        match (self.limit, self.offset) {
            (Some(limit), Some(offset)) => {
                sql.push_str(&format!(" LIMIT {} OFFSET {}", limit, offset))
            }
            (Some(limit), None) => sql.push_str(&format!(" LIMIT {}", limit)),
            // SQLite only accepts OFFSET after a LIMIT; -1 means unbounded
            (None, Some(offset)) => sql.push_str(&format!(" LIMIT -1 OFFSET {}", offset)),
            (None, None) => {}
        }

        (sql, params)
    }

    /// Renders `SELECT COUNT(*)` over the same joins and filters.
    pub fn build_count_sql(&self, prefix: &str) -> (String, Vec<Value>) {
        let mut params = vec![];
        let mut sql = format!("SELECT COUNT(*) FROM {}", self.entity.prefixed(prefix));

        self.push_joins_and_filters(prefix, &mut sql, &mut params);

        (sql, params)
    }

    fn push_joins_and_filters(&self, prefix: &str, sql: &mut String, params: &mut Vec<Value>) {
        for join in &self.joins {
            sql.push(' ');
            sql.push_str(&join.to_sql(prefix, params));
        }

        if !self.filters.is_empty() {
            sql.push_str(" WHERE ");
            let conditions = self
                .filters
                .iter()
                .map(|filter| filter.to_sql(prefix, params))
                .collect::<Vec<_>>();
            sql.push_str(&conditions.join(" AND "));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{term_taxonomy, terms};

    #[test]
    fn test_idle_query_selects_everything() {
        let (sql, params) = PendingQuery::default().build_sql("wp_");
        assert_eq!(sql, "SELECT * FROM wp_posts");
        assert!(params.is_empty());
    }

    #[test]
    fn test_joins_and_filters_keep_call_order() {
        let query = PendingQuery::new(Entity::Terms)
            .select([terms::NAME].into_iter().collect())
            .join(Entity::TermTaxonomy, terms::TERM_ID, term_taxonomy::TERM_ID)
            .filter(term_taxonomy::TAXONOMY.eq("category".to_string()))
            .filter(terms::SLUG.eq("news".to_string()));

        let (sql, params) = query.build_sql("wp_");
        assert_eq!(
            sql,
            "SELECT wp_terms.name FROM wp_terms \
             JOIN wp_term_taxonomy ON wp_terms.term_id = wp_term_taxonomy.term_id \
             WHERE wp_term_taxonomy.taxonomy = ? AND wp_terms.slug = ?"
        );
        assert_eq!(
            params,
            vec![Value::Text("category".into()), Value::Text("news".into())]
        );
    }

    #[test]
    fn test_limit_and_offset() {
        let base = PendingQuery::default();

        let (sql, _) = base.clone().limit(5).offset(Some(10)).build_sql("");
        assert!(sql.ends_with(" LIMIT 5 OFFSET 10"));

        let (sql, _) = base.clone().offset(Some(3)).build_sql("");
        assert!(sql.ends_with(" LIMIT -1 OFFSET 3"));

        let (sql, _) = base.limit(5).offset(Some(10)).offset(None).build_sql("");
        assert!(sql.ends_with(" LIMIT 5"));
    }

    #[test]
    fn test_order_by_replaces_previous() {
        let (sql, _) = PendingQuery::default()
            .order_by(Col::new("post_title"), false)
            .order_by(Col::new("post_date"), true)
            .build_sql("");
        assert_eq!(sql, "SELECT * FROM posts ORDER BY post_date DESC");
    }

    #[test]
    fn test_count_ignores_order_and_pagination() {
        let (sql, params) = PendingQuery::new(Entity::Comments)
            .filter(Col::new("comment_post_ID").eq(4))
            .order_by(Col::new("comment_date"), true)
            .limit(1)
            .build_count_sql("wp_");
        assert_eq!(
            sql,
            "SELECT COUNT(*) FROM wp_comments WHERE comment_post_ID = ?"
        );
        assert_eq!(params, vec![Value::Integer(4)]);
    }

    #[test]
    fn test_retarget_keeps_clauses() {
        let query = PendingQuery::new(Entity::Posts)
            .filter(Col::new("post_id").eq(1))
            .retarget(Entity::PostMeta);
        assert_eq!(query.entity(), Entity::PostMeta);
        assert_eq!(query.filters().len(), 1);
    }

    #[test]
    fn test_clone_is_independent_snapshot() {
        let base = PendingQuery::default().filter(Col::new("post_type").eq("post".to_string()));
        let narrowed = base.clone().filter(Col::new("ID").eq(1));

        assert_eq!(base.filters().len(), 1);
        assert_eq!(narrowed.filters().len(), 2);
    }
}
