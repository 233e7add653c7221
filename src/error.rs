//! Error types for fehu-eval.

use thiserror::Error;

/// Result type for fehu-eval operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for fehu-eval operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Invalid input provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Record does not match the expected annotation schema.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Annotation file could not be loaded.
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Direction label without the `direction:value` separator.
    #[error("Malformed direction label: {0:?} (expected \"{{direction}}:{{value}}\")")]
    MalformedLabel(String),

    /// No (gold, prediction) pair was supplied for any task.
    #[error("No tasks evaluated. Provide at least one (gold, pred) pair.")]
    NoTasks,

    /// Configuration could not be read or is inconsistent.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Error::Parse(msg.into())
    }

    /// Create a dataset error.
    pub fn dataset(msg: impl Into<String>) -> Self {
        Error::Dataset(msg.into())
    }

    /// Create a malformed label error.
    pub fn malformed_label(label: impl Into<String>) -> Self {
        Error::MalformedLabel(label.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }
}
