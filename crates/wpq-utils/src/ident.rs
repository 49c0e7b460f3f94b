//! SQL identifier rules shared by the config loader and the query layer.

use std::sync::LazyLock;

use regex::Regex;

/// Matches `column` or `table.column`; group 1 is the table, group 2 the column.
pub static IDENTIFIER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:([A-Za-z_][A-Za-z0-9_]*)\.)?([A-Za-z_][A-Za-z0-9_]*)$")
        .expect("unable to compile identifier regex")
});

static PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]*$").expect("unable to compile prefix regex"));

/// Returns `true` for `column` or `table.column`.
pub fn is_valid_field(field: &str) -> bool {
    IDENTIFIER_RE.is_match(field)
}

/// Returns `true` if `prefix` can be safely spliced into table names.
pub fn is_valid_prefix(prefix: &str) -> bool {
    PREFIX_RE.is_match(prefix)
}
