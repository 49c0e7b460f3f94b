use miette::Diagnostic;
use thiserror::Error;
use wpq_utils::error::PathError;

#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("TOML serialization error: {0}")]
    #[diagnostic(
        code(wpq_config::toml_serialize),
        help("Check your configuration structure for invalid values")
    )]
    TomlSerError(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    #[diagnostic(
        code(wpq_config::toml_deserialize),
        help("Check your config.toml syntax and structure")
    )]
    TomlDeError(#[from] toml::de::Error),

    #[error("Configuration file already exists")]
    #[diagnostic(
        code(wpq_config::already_exists),
        help("Remove the existing config file or use a different location")
    )]
    ConfigAlreadyExists,

    #[error("Invalid table prefix: {0}")]
    #[diagnostic(
        code(wpq_config::invalid_table_prefix),
        help("A table prefix may only contain ASCII letters, digits and underscores")
    )]
    InvalidTablePrefix(String),

    #[error("Invalid post field: {0}")]
    #[diagnostic(
        code(wpq_config::invalid_post_field),
        help("Use a column name, optionally qualified by its table: `post_title` or `posts.post_title`")
    )]
    InvalidPostField(String),

    #[error("post_fields must not be empty")]
    #[diagnostic(code(wpq_config::empty_post_fields))]
    EmptyPostFields,

    #[error("No database configured")]
    #[diagnostic(
        code(wpq_config::missing_database),
        help("Set `database` in your config file or export WPQ_DB")
    )]
    MissingDatabase,

    #[error("IO error: {0}")]
    #[diagnostic(code(wpq_config::io))]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Path(#[from] PathError),

    #[error("Failed to parse TOML: {0}")]
    #[diagnostic(code(wpq_config::toml))]
    Toml(#[from] toml_edit::TomlError),

    #[error("Encountered unexpected TOML item: {0}")]
    #[diagnostic(code(wpq_config::unexpected_toml_item))]
    UnexpectedTomlItem(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
