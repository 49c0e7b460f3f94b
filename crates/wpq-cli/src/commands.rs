use std::sync::Arc;

use tracing::debug;
use wpq_config::config::Config;
use wpq_db::{
    CategoryOrder, FieldList, PostOrder, QueryComposer, RowSet, SqliteClient,
};

use crate::{cli::TermKind, error::WpqResult, output::Output};

pub type Composer = QueryComposer<SqliteClient>;

/// Opens the configured database and builds a composer over it.
pub fn open_composer(config: &Config) -> WpqResult<Composer> {
    let db_path = config.get_db_path()?;
    debug!("opening {} with prefix {}", db_path.display(), config.table_prefix());

    let client = SqliteClient::open(&db_path, config.table_prefix())?;
    let fields = FieldList::new(config.post_fields())?;

    Ok(QueryComposer::with_post_fields(Arc::new(client), fields))
}

fn rows_or(rows: RowSet, empty: &'static str) -> Output {
    if rows.is_empty() {
        Output::Empty(empty)
    } else {
        Output::Rows(rows)
    }
}

pub fn posts(
    composer: &Composer,
    id: Option<u64>,
    fields: Option<FieldList>,
    limit: Option<i64>,
    offset: Option<i64>,
    latest: Option<i64>,
    order: PostOrder,
) -> WpqResult<Output> {
    let mut query = composer.clone().select_posts(fields, id);

    if let Some(amount) = latest {
        query = query.latest(amount, order)?;
    }
    if let Some(amount) = limit {
        query = query.limit_offset(amount, offset)?;
    }

    match id {
        Some(_) => Ok(match query.fetch_one()? {
            Some(row) => Output::Rows(vec![row]),
            None => Output::Empty("post not found"),
        }),
        None => Ok(rows_or(query.fetch_all()?, "no posts")),
    }
}

pub fn meta(composer: &Composer, key: &str, post_id: u64) -> WpqResult<Output> {
    let row = composer.clone().meta_value(key, post_id).fetch_one()?;
    Ok(match row {
        Some(row) => Output::Rows(vec![row]),
        None => Output::Empty("no such meta value"),
    })
}

pub fn terms(composer: &Composer, post_id: u64, kind: Option<TermKind>) -> WpqResult<Output> {
    let query = composer.clone().taxonomy_for(post_id);
    let query = match kind {
        Some(TermKind::Category) => query.as_category()?,
        Some(TermKind::Tag) => query.as_tag()?,
        None => query,
    };

    Ok(rows_or(query.fetch_all()?, "no terms"))
}

pub fn comments(composer: &Composer, post_id: u64) -> WpqResult<Output> {
    Ok(Output::Count {
        post_id,
        comments: composer.count_comments(post_id)?,
    })
}

pub fn categories(composer: &Composer, order: CategoryOrder) -> WpqResult<Output> {
    Ok(match composer.list_categories(order)? {
        Some(rows) => Output::Rows(rows),
        None => Output::Empty("no categories"),
    })
}
