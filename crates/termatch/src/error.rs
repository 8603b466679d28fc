//! Error types for the termatch crate.

use thiserror::Error;

/// Errors that can occur when parsing colors or matching them against the
/// candidate palette.
#[derive(Debug, Error)]
pub enum MatchError {
    /// More input colors than candidate palette entries. A one-to-one
    /// assignment cannot exist, so retrying with the same input is pointless.
    #[error("cannot assign {inputs} colors to {candidates} distinct palette entries")]
    TooManyColors { inputs: usize, candidates: usize },

    /// A hex color string could not be parsed.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),
}

/// Result type for termatch operations.
pub type Result<T> = std::result::Result<T, MatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_many_colors_display() {
        let err = MatchError::TooManyColors {
            inputs: 300,
            candidates: 240,
        };
        let msg = err.to_string();
        assert!(msg.contains("300"));
        assert!(msg.contains("240"));
    }

    #[test]
    fn invalid_hex_display() {
        let err = MatchError::InvalidHex("zzz".to_string());
        assert!(err.to_string().contains("zzz"));
    }
}
