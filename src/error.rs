//! Error types for URI parsing and host conversion.
//!
//! The public conversion functions collapse every error into `None`; these
//! variants are what [`UriParser::try_parse`](crate::UriParser::try_parse) and
//! the host normalizer report when a caller wants the reason.

use thiserror::Error;

/// Errors that can occur while splitting a URI or converting its host.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdnUriError {
    /// The input was empty after trimming whitespace.
    #[error("URI is empty")]
    Empty,

    /// The generic splitter could not decompose the input.
    #[error("Malformed URI: {0}")]
    Malformed(String),

    /// The port token is not a number in the range 0-65535.
    #[error("Invalid port: {0:?}")]
    InvalidPort(String),

    /// The IDNA transform rejected the host.
    #[error("IDNA conversion failed for host {0:?}")]
    Idna(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(IdnUriError::Empty.to_string(), "URI is empty");
        assert_eq!(
            IdnUriError::InvalidPort("80a".to_string()).to_string(),
            "Invalid port: \"80a\""
        );
        assert_eq!(
            IdnUriError::Idna("xn--".to_string()).to_string(),
            "IDNA conversion failed for host \"xn--\""
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(IdnUriError::Empty, IdnUriError::Empty);
        assert_ne!(
            IdnUriError::Empty,
            IdnUriError::Malformed("x".to_string())
        );
    }
}
