//! Unified error handling for tqm-core

use thiserror::Error;

/// Core error type for tqm-core
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Report parse error (line {line}): {message}")]
    Parse { line: usize, message: String },

    #[error("Failed to deliver {filename}: {source}")]
    Delivery {
        filename: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias for tqm-core
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create a report parse error at a 1-based line number
    pub fn parse(line: usize, msg: impl Into<String>) -> Self {
        Error::Parse {
            line,
            message: msg.into(),
        }
    }

    /// Create a delivery error for the given filename
    pub fn delivery(filename: impl Into<String>, source: std::io::Error) -> Self {
        Error::Delivery {
            filename: filename.into(),
            source,
        }
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Error::NotFound(msg.into())
    }
}
