use std::io::Write;

use nu_ansi_term::Color::Cyan;
use serde_json::json;
use tabled::{
    builder::Builder,
    settings::{object::Segment, Style, Width},
};
use tracing::info;
use wpq_config::display::{DisplaySettings, TableStyle};
use wpq_db::{DisplayValue, RowSet, Value};

use crate::{error::WpqResult, utils::Colored};

/// Result of a command, rendered by [`emit`].
#[derive(Debug)]
pub enum Output {
    Rows(RowSet),
    Count { post_id: u64, comments: u64 },
    Empty(&'static str),
}

/// Writes `output` as a table, or as one JSON object per line with `json`.
pub fn emit<W: Write>(
    out: &mut W,
    output: &Output,
    json: bool,
    display: &DisplaySettings,
) -> WpqResult<()> {
    match output {
        Output::Rows(rows) if json => {
            for row in rows {
                writeln!(out, "{}", serde_json::to_string(row)?)?;
            }
        }
        Output::Rows(rows) => writeln!(out, "{}", render_table(rows, display))?,
        Output::Count {
            post_id,
            comments,
        } => {
            if json {
                writeln!(out, "{}", json!({ "post_id": post_id, "comments": comments }))?;
            } else {
                writeln!(out, "{comments}")?;
            }
        }
        Output::Empty(message) => info!("{message}"),
    }

    Ok(())
}

/// Renders rows as a table with the column names as header.
pub fn render_table(rows: &RowSet, display: &DisplaySettings) -> String {
    let Some(first) = rows.first() else {
        return String::new();
    };

    let mut builder = Builder::new();
    builder.push_record(first.columns().map(|column| Colored(Cyan, column).to_string()));

    for row in rows {
        builder.push_record(row.iter().map(|(_, value)| match value {
            Value::Null => display.null().to_string(),
            value => DisplayValue(value).to_string(),
        }));
    }

    let mut table = builder.build();
    match display.table_style() {
        TableStyle::Rounded => table.with(Style::rounded()),
        TableStyle::Ascii => table.with(Style::ascii()),
        TableStyle::Plain => table.with(Style::blank()),
    };

    let max_width = display.max_cell_width();
    if max_width > 0 {
        table.modify(Segment::all(), Width::truncate(max_width).suffix("..."));
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use wpq_db::Row;

    use super::*;
    use crate::utils::disable_color;

    fn rows() -> RowSet {
        let mut first = Row::new();
        first.push("ID", Value::Integer(1));
        first.push("post_title", Value::Text("Hello world".into()));
        first.push("post_excerpt", Value::Null);

        let mut second = Row::new();
        second.push("ID", Value::Integer(4));
        second.push("post_title", Value::Text("x".repeat(100)));
        second.push("post_excerpt", Value::Text("short".into()));

        vec![first, second]
    }

    fn settings(style: TableStyle) -> DisplaySettings {
        DisplaySettings {
            table_style: Some(style),
            max_cell_width: Some(20),
            null: Some("-".into()),
        }
    }

    #[test]
    fn test_render_table() {
        disable_color();
        let table = render_table(&rows(), &settings(TableStyle::Ascii));

        assert!(table.contains("post_title"));
        assert!(table.contains("Hello world"));
        assert!(table.contains("| -"));
        assert!(!table.contains(&"x".repeat(21)));
        assert!(table.contains("..."));
    }

    #[test]
    fn test_render_empty_table() {
        assert!(render_table(&vec![], &DisplaySettings::default()).is_empty());
    }

    #[test]
    fn test_emit_rows_as_json_lines() {
        let mut out = Vec::new();
        emit(&mut out, &Output::Rows(rows()), true, &DisplaySettings::default()).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["ID"], 1);
        assert_eq!(lines[0]["post_excerpt"], serde_json::Value::Null);
        assert_eq!(lines[1]["post_excerpt"], "short");
    }

    #[test]
    fn test_emit_count() {
        let output = Output::Count {
            post_id: 4,
            comments: 2,
        };

        let mut plain = Vec::new();
        emit(&mut plain, &output, false, &DisplaySettings::default()).unwrap();
        assert_eq!(String::from_utf8(plain).unwrap(), "2\n");

        let mut json = Vec::new();
        emit(&mut json, &output, true, &DisplaySettings::default()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
        assert_eq!(value["post_id"], 4);
        assert_eq!(value["comments"], 2);
    }

    #[test]
    fn test_emit_empty_writes_nothing() {
        let mut out = Vec::new();
        emit(&mut out, &Output::Empty("no posts"), false, &DisplaySettings::default()).unwrap();
        assert!(out.is_empty());
    }
}
