//! Trip API error types

use std::fmt;

/// Errors that can occur while talking to the trip API
#[derive(Debug)]
pub enum ApiError {
    /// Connection, TLS or body-transfer failure
    Network(String),
    /// Server answered with a non-success status
    Status { status: u16, body: String },
    /// Body was not the expected JSON
    Decode(String),
}

impl ApiError {
    /// Short label for log lines
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Status { .. } => "status",
            Self::Decode(_) => "decode",
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::Status { status, body } => {
                // Error pages can be large HTML documents
                let snippet: String = body.chars().take(120).collect();
                if snippet.is_empty() {
                    write!(f, "API error ({})", status)
                } else {
                    write!(f, "API error ({}): {}", status, snippet)
                }
            }
            Self::Decode(msg) => write!(f, "Invalid response body: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_truncates_body() {
        let err = ApiError::Status {
            status: 500,
            body: "x".repeat(500),
        };
        let shown = err.to_string();
        assert!(shown.starts_with("API error (500): "));
        assert_eq!(shown.len(), "API error (500): ".len() + 120);
        assert_eq!(err.kind(), "status");
    }

    #[test]
    fn test_status_display_without_body() {
        let err = ApiError::Status {
            status: 404,
            body: String::new(),
        };
        assert_eq!(err.to_string(), "API error (404)");
    }
}
