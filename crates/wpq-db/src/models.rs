//! Typed views over the rows the composer returns.

use serde::Serialize;

use crate::{error::Result, row::Row, traits::FromRow};

/// A post as projected by [`DEFAULT_POST_FIELDS`](crate::fields::DEFAULT_POST_FIELDS).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    pub id: i64,
    pub guid: String,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub date: String,
}

impl FromRow for Post {
    fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            id: row.get_i64("id")?,
            guid: row.get_str("guid")?.to_string(),
            title: row.get_str("post_title")?.to_string(),
            content: row.get_str("post_content")?.to_string(),
            excerpt: row.get_str("post_excerpt")?.to_string(),
            date: row.get_str("post_date")?.to_string(),
        })
    }
}

/// A single `meta_value` cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetaValue {
    pub value: Option<String>,
}

impl FromRow for MetaValue {
    fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            value: row.get_opt_str("meta_value")?.map(String::from),
        })
    }
}

/// A term name, as returned by taxonomy queries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Term {
    pub name: String,
}

impl FromRow for Term {
    fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            name: row.get_str("name")?.to_string(),
        })
    }
}

/// An entry of the category listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub term_id: i64,
    pub name: String,
    pub slug: String,
}

impl FromRow for Category {
    fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            term_id: row.get_i64("term_id")?,
            name: row.get_str("name")?.to_string(),
            slug: row.get_str("slug")?.to_string(),
        })
    }
}
