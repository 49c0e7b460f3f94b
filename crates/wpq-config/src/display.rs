use documented::{Documented, DocumentedFields};
use serde::{Deserialize, Serialize};

/// Display settings for CLI output formatting
#[derive(Clone, Debug, Default, Deserialize, Serialize, Documented, DocumentedFields)]
pub struct DisplaySettings {
    /// Table border style: "rounded", "ascii", or "plain"
    /// Default: "rounded"
    pub table_style: Option<TableStyle>,

    /// Maximum width of a table cell; longer values are truncated.
    /// 0 disables truncation.
    /// Default: 60
    pub max_cell_width: Option<usize>,

    /// Print NULL cells as this text
    /// Default: "NULL"
    pub null: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TableStyle {
    /// Unicode borders with rounded corners
    #[default]
    Rounded,
    /// ASCII-only borders
    Ascii,
    /// No borders, columns separated by spaces
    Plain,
}

impl DisplaySettings {
    /// Settings with every value spelled out, for the generated config.
    pub fn default_filled() -> Self {
        Self {
            table_style: Some(TableStyle::default()),
            max_cell_width: Some(60),
            null: Some("NULL".to_string()),
        }
    }

    pub fn table_style(&self) -> TableStyle {
        self.table_style.unwrap_or_default()
    }

    pub fn max_cell_width(&self) -> usize {
        self.max_cell_width.unwrap_or(60)
    }

    pub fn null(&self) -> &str {
        self.null.as_deref().unwrap_or("NULL")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let display = DisplaySettings::default();
        assert_eq!(display.table_style(), TableStyle::Rounded);
        assert_eq!(display.max_cell_width(), 60);
        assert_eq!(display.null(), "NULL");
    }

    #[test]
    fn test_table_style_parses_lowercase() {
        let display: DisplaySettings = toml::from_str("table_style = \"ascii\"").unwrap();
        assert_eq!(display.table_style(), TableStyle::Ascii);
        assert!(toml::from_str::<DisplaySettings>("table_style = \"fancy\"").is_err());
    }
}
