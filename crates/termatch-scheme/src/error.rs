//! Error types for scheme parsing and expansion.

use termatch::MatchError;
use thiserror::Error;

/// Errors that can occur when parsing a scheme or expanding its template
/// variables.
#[derive(Debug, Error)]
pub enum SchemeError {
    /// The scheme document lacks a required key.
    #[error("scheme is missing required field '{0}'")]
    MissingField(String),

    /// A base color value could not be parsed as hex.
    #[error("invalid color for '{field}': {source}")]
    InvalidColor {
        field: String,
        #[source]
        source: MatchError,
    },

    /// The document is not valid YAML, or not the expected shape.
    #[error("invalid scheme document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Color matching failed during expansion.
    #[error(transparent)]
    Match(#[from] MatchError),
}

/// Result type for scheme operations.
pub type Result<T> = std::result::Result<T, SchemeError>;
