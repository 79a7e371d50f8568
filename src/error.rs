//! Error types for the treemark library.

use thiserror::Error;

/// Result type alias for treemark operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while working with marked-up outlines.
#[derive(Error, Debug)]
pub enum Error {
    /// The marker character cannot be used in the headline grammar.
    #[error("Invalid marker character {0:?}: must be a printable ASCII character")]
    InvalidMarker(char),

    /// A line passed to a headline transformation does not match the
    /// headline grammar. This is a caller contract violation: transformations
    /// only accept lines obtained from extraction.
    #[error("Not a headline line: {0:?}")]
    NotAHeadline(String),

    /// A synthesis or re-leveling operation would produce a headline depth
    /// below 1.
    #[error("Headline depth {0} is out of range (minimum depth is 1)")]
    DepthOutOfRange(i64),

    /// Error serializing an outline view.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Render(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::DepthOutOfRange(0);
        assert_eq!(
            err.to_string(),
            "Headline depth 0 is out of range (minimum depth is 1)"
        );

        let err = Error::NotAHeadline("plain body text".to_string());
        assert!(err.to_string().contains("plain body text"));
    }

    #[test]
    fn test_invalid_marker_display() {
        let err = Error::InvalidMarker('\t');
        assert!(err.to_string().contains("printable ASCII"));
    }
}
