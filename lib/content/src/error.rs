//! Error types for the content crate.
//!
//! Errors are designed for layered context using rootcause:
//! - `FetchError`: Errors from a single advice request
//! - `ContentError`: Errors from setting up the client

use std::fmt;

/// Errors from a single advice request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Connection to the Content Service failed.
    ConnectionFailed { reason: String },
    /// No complete response within the request timeout.
    Timeout,
    /// The service answered with a status other than 200.
    UnexpectedStatus { status: u16 },
    /// The body was not a usable advice object.
    MalformedBody { reason: String },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConnectionFailed { reason } => write!(f, "connection failed: {reason}"),
            Self::Timeout => write!(f, "request timed out"),
            Self::UnexpectedStatus { status } => write!(f, "unexpected status {status}"),
            Self::MalformedBody { reason } => write!(f, "malformed advice body: {reason}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Errors from building the Content Service client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// The configured endpoint is not a valid URL.
    InvalidEndpoint { endpoint: String, reason: String },
    /// The HTTP client could not be constructed.
    ClientBuild { reason: String },
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEndpoint { endpoint, reason } => {
                write!(f, "invalid content endpoint '{endpoint}': {reason}")
            }
            Self::ClientBuild { reason } => {
                write!(f, "failed to build HTTP client: {reason}")
            }
        }
    }
}

impl std::error::Error for ContentError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_display() {
        let err = FetchError::UnexpectedStatus { status: 503 };
        assert!(err.to_string().contains("503"));

        let err = FetchError::MalformedBody {
            reason: "missing field `text`".to_string(),
        };
        assert!(err.to_string().contains("missing field"));
    }

    #[test]
    fn content_error_display() {
        let err = ContentError::InvalidEndpoint {
            endpoint: "not a url".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        assert!(err.to_string().contains("not a url"));
    }
}
