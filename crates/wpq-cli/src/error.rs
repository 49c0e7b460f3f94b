use miette::Diagnostic;
use thiserror::Error;
use wpq_config::error::ConfigError;
use wpq_db::DbError;
use wpq_utils::error::PathError;

#[derive(Error, Diagnostic, Debug)]
pub enum WpqError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Db(#[from] DbError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Path(#[from] PathError),

    #[error("Failed to serialize output: {0}")]
    #[diagnostic(code(wpq::json))]
    Json(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    #[diagnostic(code(wpq::io))]
    Io(#[from] std::io::Error),
}

pub type WpqResult<T> = std::result::Result<T, WpqError>;
