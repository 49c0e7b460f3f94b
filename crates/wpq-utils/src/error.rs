//! Error types for wpq-utils.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum PathError {
    #[error("Failed to get current directory: {source}")]
    #[diagnostic(code(wpq_utils::path::current_dir))]
    CurrentDir { source: std::io::Error },

    #[error("Path is empty")]
    #[diagnostic(code(wpq_utils::path::empty))]
    Empty,

    #[error("Environment variable `{var}` not set in `{input}`")]
    #[diagnostic(
        code(wpq_utils::path::missing_env_var),
        help("Export `{var}` or use a literal path")
    )]
    MissingEnvVar { var: String, input: String },

    #[error("Unclosed variable expression starting at `{input}`")]
    #[diagnostic(code(wpq_utils::path::unclosed_variable))]
    UnclosedVariable { input: String },
}

pub type PathResult<T> = std::result::Result<T, PathError>;
