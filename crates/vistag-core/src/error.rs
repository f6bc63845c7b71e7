//! Error types for vistag.

use thiserror::Error;

/// Result type alias using vistag's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for vistag operations.
///
/// Every variant propagates unmodified to the immediate caller; the hosting
/// pipeline applies its own failure policy. The one expected non-error
/// outcome (no usable preview image) is not represented here: see
/// `ResolvedImage` in the tagger crate.
#[derive(Error, Debug)]
pub enum Error {
    /// Prediction service credential absent or empty at construction
    #[error("Missing credential: {0}")]
    MissingCredential(String),

    /// Prediction service call failed
    #[error("Prediction error: {0}")]
    Prediction(String),

    /// Document type not accepted by the tagging operation
    #[error("Unsupported document type: expected {expected}, got {actual}")]
    UnsupportedDocumentType { expected: String, actual: String },

    /// Tag write failed in the host's tag sink
    #[error("Tag error: {0}")]
    Tag(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// HTTP/network request failed
    #[error("Request error: {0}")]
    Request(String),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e.to_string())
    }
}
