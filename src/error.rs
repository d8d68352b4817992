//! Error types for textdocx library.

use std::io;
use thiserror::Error;

/// Result type alias for textdocx operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed cause carried by [`Error::SerializationFailed`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error types that can occur while formatting and exporting documents.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A style configuration field is outside its valid range.
    #[error("Invalid configuration: `{field}` {reason}")]
    InvalidConfiguration {
        /// Name of the offending field (e.g. `lineSpacing`)
        field: &'static str,
        /// What is wrong with the value
        reason: String,
    },

    /// The input text contains no paragraphs.
    #[error("Input text is empty: nothing to format")]
    EmptyInput,

    /// The uploaded file cannot be converted to text.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The document model could not be encoded.
    #[error("Serialization failed: {0}")]
    SerializationFailed(#[source] BoxError),

    /// Text decoding error.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Build an [`Error::InvalidConfiguration`] for `field`.
    pub fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }

    /// Wrap an encoder failure as [`Error::SerializationFailed`].
    pub fn serialization(err: impl Into<BoxError>) -> Self {
        Error::SerializationFailed(err.into())
    }

    /// Name of the offending configuration field, if any.
    pub fn config_field(&self) -> Option<&'static str> {
        match self {
            Error::InvalidConfiguration { field, .. } => Some(field),
            _ => None,
        }
    }
}
