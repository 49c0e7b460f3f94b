//! Projected field lists.

use std::{fmt, str::FromStr};

use wpq_utils::ident::IDENTIFIER_RE;

use crate::{
    error::{DbError, Result},
    expr::Col,
};

/// Fields selected by [`QueryComposer::select_posts`](crate::QueryComposer::select_posts)
/// when the caller supplies none.
pub const DEFAULT_POST_FIELDS: [&str; 6] = [
    "id",
    "guid",
    "post_title",
    "post_content",
    "post_excerpt",
    "post_date",
];

/// A single projected column: `name` or `table.name`.
///
/// The table part is a base table name; the installation prefix is applied
/// when the query is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    table: Option<String>,
    name: String,
}

impl Field {
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        let captures = IDENTIFIER_RE.captures(input).ok_or_else(|| {
            DbError::InvalidArgument(format!("`{input}` is not a valid column identifier"))
        })?;

        Ok(Self {
            table: captures.get(1).map(|m| m.as_str().to_string()),
            name: captures[2].to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    pub fn to_sql(&self, prefix: &str) -> String {
        match &self.table {
            Some(table) => format!("{prefix}{table}.{}", self.name),
            None => self.name.clone(),
        }
    }
}

impl From<Col> for Field {
    fn from(col: Col) -> Self {
        Self {
            table: col.entity.map(|entity| entity.table().to_string()),
            name: col.name.to_string(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.table {
            Some(table) => write!(f, "{table}.{}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// An ordered list of projected columns. An empty list selects `*`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldList(Vec<Field>);

impl FieldList {
    /// Parses every entry as a column identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::InvalidArgument`] for the first entry that is not a
    /// plain or table-qualified identifier.
    pub fn new<I, S>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        fields
            .into_iter()
            .map(|field| Field::parse(field.as_ref()))
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    /// Selects every column (`*`).
    pub fn all() -> Self {
        Self(Vec::new())
    }

    pub fn default_post_fields() -> Self {
        Self(
            DEFAULT_POST_FIELDS
                .iter()
                .map(|name| Field {
                    table: None,
                    name: name.to_string(),
                })
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.0.iter()
    }

    pub fn to_sql(&self, prefix: &str) -> String {
        if self.0.is_empty() {
            return "*".to_string();
        }
        self.0
            .iter()
            .map(|field| field.to_sql(prefix))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromIterator<Col> for FieldList {
    fn from_iter<I: IntoIterator<Item = Col>>(iter: I) -> Self {
        Self(iter.into_iter().map(Field::from).collect())
    }
}

impl FromStr for FieldList {
    type Err = DbError;

    /// Parses a comma separated list such as `id,post_title`.
    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.split(',').filter(|part| !part.trim().is_empty()))
    }
}
