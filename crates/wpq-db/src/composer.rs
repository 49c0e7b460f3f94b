//! The fluent query composer.
//!
//! [`QueryComposer`] wraps a [`DatabaseClient`] and builds one
//! [`PendingQuery`] through chained calls. Builder methods consume the
//! composer and return the updated value; terminal methods borrow it, so a
//! composed query can be executed any number of times.
//!
//! ```rust,ignore
//! let composer = QueryComposer::new(Arc::new(SqliteClient::open("blog.sqlite", "wp_")?));
//!
//! let recent = composer
//!     .clone()
//!     .select_posts(None, None)
//!     .latest(5, PostOrder::PostDate)?
//!     .fetch_all()?;
//!
//! let tags = composer.taxonomy_for(42).as_tag()?.fetch_all()?;
//! ```

use std::sync::Arc;

use rusqlite::types::Value;
use tracing::{debug, trace};

use crate::{
    client::DatabaseClient,
    error::{DbError, Result},
    fields::FieldList,
    order::{CategoryOrder, PostOrder},
    query::{PendingQuery, QueryKind},
    row::{Row, RowSet},
    schema::{comments, postmeta, posts, term_relationships, term_taxonomy, terms, Entity},
    traits::FromRow,
};

const CATEGORY_TAXONOMY: &str = "category";
const TAG_TAXONOMY: &str = "post_tag";

// SQLite integers are signed; an id above i64::MAX cannot be stored, so
// clamping keeps the lookup a guaranteed miss.
fn id_value(id: u64) -> Value {
    Value::Integer(i64::try_from(id).unwrap_or(i64::MAX))
}

fn non_negative(name: &str, value: i64) -> Result<u64> {
    u64::try_from(value)
        .map_err(|_| DbError::InvalidArgument(format!("{name} must not be negative, got {value}")))
}

/// A fluent builder over one WordPress query plus its terminal methods.
pub struct QueryComposer<C> {
    client: Arc<C>,
    post_fields: FieldList,
    pending: PendingQuery,
}

impl<C> Clone for QueryComposer<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            post_fields: self.post_fields.clone(),
            pending: self.pending.clone(),
        }
    }
}

impl<C: DatabaseClient> QueryComposer<C> {
    /// Creates an idle composer that projects
    /// [`DEFAULT_POST_FIELDS`](crate::fields::DEFAULT_POST_FIELDS) for posts.
    pub fn new(client: Arc<C>) -> Self {
        Self::with_post_fields(client, FieldList::default_post_fields())
    }

    /// Creates an idle composer with a custom default projection for posts.
    pub fn with_post_fields(client: Arc<C>, post_fields: FieldList) -> Self {
        Self {
            client,
            post_fields,
            pending: PendingQuery::default(),
        }
    }

    /// The query configured so far.
    pub fn pending(&self) -> &PendingQuery {
        &self.pending
    }

    /// Renders the pending query for the given table prefix.
    pub fn to_sql(&self, prefix: &str) -> (String, Vec<Value>) {
        self.pending.build_sql(prefix)
    }

    fn start(self, pending: PendingQuery) -> Self {
        trace!(kind = ?pending.kind(), entity = %pending.entity(), "starting query");
        Self {
            pending,
            ..self
        }
    }

    fn map_pending(self, f: impl FnOnce(PendingQuery) -> PendingQuery) -> Self {
        let pending = f(self.pending);
        Self {
            client: self.client,
            post_fields: self.post_fields,
            pending,
        }
    }

    /// Executes the pending query and returns its first row, or `None` when
    /// nothing matches.
    pub fn fetch_one(&self) -> Result<Option<Row>> {
        self.client.row(&self.pending)
    }

    /// Like [`fetch_one`](Self::fetch_one), but reads `FROM entity` while
    /// keeping every pending clause.
    pub fn fetch_one_from(&self, entity: Entity) -> Result<Option<Row>> {
        self.client.row(&self.pending.clone().retarget(entity))
    }

    /// Executes the pending query and returns every row. An empty set is not
    /// an error.
    pub fn fetch_all(&self) -> Result<RowSet> {
        self.client.select_query(&self.pending)
    }

    /// Like [`fetch_all`](Self::fetch_all), but reads `FROM entity`.
    pub fn fetch_all_from(&self, entity: Entity) -> Result<RowSet> {
        self.client.select_query(&self.pending.clone().retarget(entity))
    }

    pub fn fetch_one_as<T: FromRow>(&self) -> Result<Option<T>> {
        self.fetch_one()?.map(|row| T::from_row(&row)).transpose()
    }

    pub fn fetch_all_as<T: FromRow>(&self) -> Result<Vec<T>> {
        self.fetch_all()?.iter().map(T::from_row).collect()
    }

    /// Starts a query for published posts.
    ///
    /// Projects `fields`, or the composer's default post fields when `None`,
    /// and narrows to a single post when `post_id` is given. An id of `0` is
    /// treated as no id.
    pub fn select_posts(self, fields: Option<FieldList>, post_id: Option<u64>) -> Self {
        let fields = fields.unwrap_or_else(|| self.post_fields.clone());

        let mut query = PendingQuery::new(Entity::Posts)
            .with_kind(QueryKind::Posts)
            .select(fields)
            .filter(posts::POST_TYPE.bare().eq("post".to_string()))
            .filter(posts::POST_STATUS.bare().eq("publish".to_string()));

        if let Some(id) = post_id.filter(|id| *id != 0) {
            query = query.filter(posts::ID.bare().eq(id_value(id)));
        }

        self.start(query)
    }

    /// Same as [`select_posts`](Self::select_posts) without a post id.
    pub fn posts(self, fields: Option<FieldList>) -> Self {
        self.select_posts(fields, None)
    }

    /// Limits the pending query to `amount` rows, skipping `offset` rows.
    ///
    /// Replaces any previous limit and offset; an offset of `0` is the same as
    /// none.
    ///
    /// # Errors
    ///
    /// [`DbError::InvalidArgument`] if `amount` or `offset` is negative.
    pub fn limit_offset(self, amount: i64, offset: Option<i64>) -> Result<Self> {
        let amount = non_negative("limit", amount)?;
        let offset = offset
            .map(|offset| non_negative("offset", offset))
            .transpose()?
            .filter(|offset| *offset != 0);

        Ok(self.map_pending(|query| query.limit(amount).offset(offset)))
    }

    /// Orders the pending query by `order` descending and keeps the first
    /// `amount` rows.
    ///
    /// # Errors
    ///
    /// [`DbError::InvalidArgument`] if `amount` is negative.
    pub fn latest(self, amount: i64, order: PostOrder) -> Result<Self> {
        let amount = non_negative("amount", amount)?;
        Ok(self.map_pending(|query| query.limit(amount).order_by(order.column(), true)))
    }

    /// Starts a query for the `meta_value` of `key` on `post_id`.
    pub fn meta_value(self, key: &str, post_id: u64) -> Self {
        let query = PendingQuery::new(Entity::PostMeta)
            .with_kind(QueryKind::Meta)
            .select([postmeta::META_VALUE.bare()].into_iter().collect())
            .filter(postmeta::META_KEY.bare().eq(key.to_string()))
            .filter(postmeta::POST_ID.bare().eq(id_value(post_id)));

        self.start(query)
    }

    /// Starts a query for the names of the terms attached to `post_id`.
    ///
    /// Follow with [`as_category`](Self::as_category) or
    /// [`as_tag`](Self::as_tag) to pick a taxonomy; without either, terms of
    /// every taxonomy are returned.
    pub fn taxonomy_for(self, post_id: u64) -> Self {
        let query = PendingQuery::new(Entity::Terms)
            .with_kind(QueryKind::Taxonomy)
            .select([terms::NAME].into_iter().collect())
            .join(Entity::TermTaxonomy, terms::TERM_ID, term_taxonomy::TERM_ID)
            .join(
                Entity::TermRelationships,
                term_taxonomy::TERM_TAXONOMY_ID,
                term_relationships::TERM_TAXONOMY_ID,
            )
            .join(Entity::Posts, term_relationships::OBJECT_ID, posts::ID)
            .filter(posts::ID.eq(id_value(post_id)));

        self.start(query)
    }

    fn with_taxonomy(self, taxonomy: &str) -> Result<Self> {
        if self.pending.kind() != QueryKind::Taxonomy {
            return Err(DbError::CallerMisuse(format!(
                "cannot narrow a {:?} query to taxonomy `{taxonomy}`",
                self.pending.kind()
            )));
        }

        let filter = term_taxonomy::TAXONOMY.eq(taxonomy.to_string());
        Ok(self.map_pending(|query| query.filter(filter)))
    }

    /// Narrows a [`taxonomy_for`](Self::taxonomy_for) query to categories.
    ///
    /// # Errors
    ///
    /// [`DbError::CallerMisuse`] if the pending query is not a taxonomy query.
    pub fn as_category(self) -> Result<Self> {
        self.with_taxonomy(CATEGORY_TAXONOMY)
    }

    /// Alias of [`as_category`](Self::as_category).
    pub fn categories(self) -> Result<Self> {
        self.as_category()
    }

    /// Narrows a [`taxonomy_for`](Self::taxonomy_for) query to tags.
    ///
    /// # Errors
    ///
    /// [`DbError::CallerMisuse`] if the pending query is not a taxonomy query.
    pub fn as_tag(self) -> Result<Self> {
        self.with_taxonomy(TAG_TAXONOMY)
    }

    /// Alias of [`as_tag`](Self::as_tag).
    pub fn tags(self) -> Result<Self> {
        self.as_tag()
    }

    /// Counts the comments of `post_id` right away.
    ///
    /// The pending query is left untouched. A post without comments and a
    /// post that does not exist both count `0`.
    pub fn count_comments(&self, post_id: u64) -> Result<u64> {
        let query = PendingQuery::new(Entity::Comments)
            .filter(comments::COMMENT_POST_ID.bare().eq(id_value(post_id)));

        let count = self.client.count(&query)?;
        debug!(post_id, count, "counted comments");
        Ok(count)
    }

    /// Lists every category ordered by `order`, or `None` if there are none.
    pub fn list_categories(&self, order: CategoryOrder) -> Result<Option<RowSet>> {
        let query = PendingQuery::new(Entity::Terms)
            .select([terms::TERM_ID, terms::NAME, terms::SLUG].into_iter().collect())
            .join(Entity::TermTaxonomy, terms::TERM_ID, term_taxonomy::TERM_ID)
            .filter(term_taxonomy::TAXONOMY.eq(CATEGORY_TAXONOMY.to_string()))
            .order_by(order.column(), false);

        let rows = self.client.select_query(&query)?;
        debug!(categories = rows.len(), order = %order, "listed categories");

        Ok(if rows.is_empty() { None } else { Some(rows) })
    }
}
