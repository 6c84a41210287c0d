//! HTML document errors.

use thiserror::Error;

/// Errors raised while loading a document.
#[derive(Debug, Error)]
pub enum DomError {
    /// Reading the source failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The source is not valid UTF-8.
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),
}

impl From<std::string::FromUtf8Error> for DomError {
    fn from(e: std::string::FromUtf8Error) -> Self {
        DomError::InvalidEncoding(e.to_string())
    }
}
