//! Error types for the edges of the crate.
//!
//! Capture, symbol parsing and rendering never fail. Errors only show up
//! where user input or serialization is involved: `thiserror` for the
//! library types here, `anyhow` for the CLI.

use thiserror::Error;

/// Errors that can occur while parsing a format specifier such as `%+P`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    #[error("Empty format specifier")]
    Empty,

    #[error("Format specifier must start with '%': {0:?}")]
    MissingPercent(String),

    #[error("Format specifier has no verb: {0:?}")]
    MissingVerb(String),

    #[error("Unexpected characters after verb: {0:?}")]
    TrailingInput(String),
}

/// Errors that can occur while producing structured output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}
