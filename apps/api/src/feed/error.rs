use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure classification for feed operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeedErrorKind {
    NetworkError,
    RateLimit,
    /// Corrupt input or processing failure. Never retried.
    ParsingError,
    Unknown,
}

impl FeedErrorKind {
    pub fn code(self) -> &'static str {
        match self {
            FeedErrorKind::NetworkError => "NETWORK_ERROR",
            FeedErrorKind::RateLimit => "RATE_LIMIT",
            FeedErrorKind::ParsingError => "PARSING_ERROR",
            FeedErrorKind::Unknown => "UNKNOWN",
        }
    }

    pub fn is_retryable(self) -> bool {
        !matches!(self, FeedErrorKind::ParsingError)
    }
}

impl fmt::Display for FeedErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A classified feed error. Surfaced unchanged by the retry loop so callers can
/// branch on `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct FeedError {
    pub kind: FeedErrorKind,
    pub message: String,
}

impl FeedError {
    pub fn new(kind: FeedErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(FeedErrorKind::NetworkError, message)
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::new(FeedErrorKind::RateLimit, message)
    }

    pub fn parsing(message: impl Into<String>) -> Self {
        Self::new(FeedErrorKind::ParsingError, message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(FeedErrorKind::Unknown, message)
    }

    pub fn is_fatal(&self) -> bool {
        !self.kind.is_retryable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_parsing_is_fatal() {
        assert!(FeedError::parsing("bad").is_fatal());
        assert!(!FeedError::network("down").is_fatal());
        assert!(!FeedError::rate_limited("slow down").is_fatal());
        assert!(!FeedError::unknown("?").is_fatal());
    }

    #[test]
    fn test_kind_serde_matches_codes() {
        for kind in [
            FeedErrorKind::NetworkError,
            FeedErrorKind::RateLimit,
            FeedErrorKind::ParsingError,
            FeedErrorKind::Unknown,
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.code()));
        }
    }

    #[test]
    fn test_display_includes_kind_and_message() {
        let err = FeedError::network("Connection to data stream lost.");
        assert_eq!(err.to_string(), "NETWORK_ERROR: Connection to data stream lost.");
    }
}
