//! Allowed sort expressions.
//!
//! Ordering columns are a closed set rather than free-form strings, so a sort
//! key coming from user input can never reach the SQL text unchecked.

use std::{fmt, str::FromStr};

use crate::{
    error::{DbError, Result},
    expr::Col,
    schema::{posts, term_taxonomy, terms},
};

/// Sort keys for post queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PostOrder {
    #[default]
    PostDate,
    PostModified,
    Id,
    PostTitle,
    MenuOrder,
    CommentCount,
}

impl PostOrder {
    pub const ALL: [PostOrder; 6] = [
        PostOrder::PostDate,
        PostOrder::PostModified,
        PostOrder::Id,
        PostOrder::PostTitle,
        PostOrder::MenuOrder,
        PostOrder::CommentCount,
    ];

    pub fn column(self) -> Col {
        let col = match self {
            PostOrder::PostDate => posts::POST_DATE,
            PostOrder::PostModified => posts::POST_MODIFIED,
            PostOrder::Id => posts::ID,
            PostOrder::PostTitle => posts::POST_TITLE,
            PostOrder::MenuOrder => posts::MENU_ORDER,
            PostOrder::CommentCount => posts::COMMENT_COUNT,
        };
        col.bare()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PostOrder::PostDate => "post_date",
            PostOrder::PostModified => "post_modified",
            PostOrder::Id => "id",
            PostOrder::PostTitle => "post_title",
            PostOrder::MenuOrder => "menu_order",
            PostOrder::CommentCount => "comment_count",
        }
    }
}

impl fmt::Display for PostOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostOrder {
    type Err = DbError;

    fn from_str(s: &str) -> Result<Self> {
        PostOrder::ALL
            .into_iter()
            .find(|order| order.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| unknown_key(s, PostOrder::ALL.map(PostOrder::as_str)))
    }
}

/// Sort keys for the category listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryOrder {
    #[default]
    TermId,
    Name,
    Slug,
    Count,
}

impl CategoryOrder {
    pub const ALL: [CategoryOrder; 4] = [
        CategoryOrder::TermId,
        CategoryOrder::Name,
        CategoryOrder::Slug,
        CategoryOrder::Count,
    ];

    pub fn column(self) -> Col {
        match self {
            CategoryOrder::TermId => terms::TERM_ID,
            CategoryOrder::Name => terms::NAME,
            CategoryOrder::Slug => terms::SLUG,
            CategoryOrder::Count => term_taxonomy::COUNT,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CategoryOrder::TermId => "terms.term_id",
            CategoryOrder::Name => "terms.name",
            CategoryOrder::Slug => "terms.slug",
            CategoryOrder::Count => "term_taxonomy.count",
        }
    }
}

impl fmt::Display for CategoryOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryOrder {
    type Err = DbError;

    /// Accepts the qualified spelling (`terms.name`) or the bare column (`name`).
    fn from_str(s: &str) -> Result<Self> {
        CategoryOrder::ALL
            .into_iter()
            .find(|order| {
                let qualified = order.as_str();
                qualified.eq_ignore_ascii_case(s)
                    || qualified
                        .split_once('.')
                        .is_some_and(|(_, column)| column.eq_ignore_ascii_case(s))
            })
            .ok_or_else(|| unknown_key(s, CategoryOrder::ALL.map(CategoryOrder::as_str)))
    }
}

fn unknown_key<const N: usize>(input: &str, allowed: [&str; N]) -> DbError {
    DbError::InvalidArgument(format!(
        "unknown sort key `{input}`, expected one of: {}",
        allowed.join(", ")
    ))
}
