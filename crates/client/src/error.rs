//! Error types for the SAUR client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors that can occur during SAUR client operations.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport-level failure (connection error, timeout).
    ///
    /// Never retried by the token-refresh path; retries are reserved for
    /// token rejections. The reference behavior treats transient network
    /// faults as immediately fatal.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx, non-auth response from the API.
    #[error("HTTP error ({status}) at {url}: {message}")]
    Http {
        status: u16,
        url: String,
        message: String,
    },

    /// The authentication exchange was rejected or returned a malformed body.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// The server kept rejecting freshly issued tokens past the retry budget.
    #[error("Token rejected on every attempt ({attempts} attempts)")]
    AuthExhausted { attempts: usize },

    /// A 2xx response whose body is not valid JSON.
    #[error("Malformed response from {url}: {source}")]
    MalformedResponse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The attempt loop ended without success or a terminal failure.
    #[error("Maximum retries exceeded ({0} attempts)")]
    RetriesExhausted(usize),

    /// Invalid URL supplied at construction.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Check whether an HTTP status signals a rejected bearer token.
    ///
    /// Only these statuses trigger the re-authentication path; anything else
    /// non-2xx fails immediately.
    pub fn is_token_rejection(status: u16) -> bool {
        matches!(status, 401 | 403)
    }

    /// Check if this error came from the authentication pipeline.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::AuthFailed(_) | Self::AuthExhausted { .. })
    }

    /// HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_rejection_statuses() {
        assert!(ApiError::is_token_rejection(401));
        assert!(ApiError::is_token_rejection(403));

        assert!(!ApiError::is_token_rejection(400));
        assert!(!ApiError::is_token_rejection(404));
        assert!(!ApiError::is_token_rejection(429));
        assert!(!ApiError::is_token_rejection(500));
        assert!(!ApiError::is_token_rejection(200));
    }

    #[test]
    fn test_is_auth_error() {
        assert!(ApiError::AuthFailed("bad credentials".to_string()).is_auth_error());
        assert!(ApiError::AuthExhausted { attempts: 4 }.is_auth_error());

        let err = ApiError::Http {
            status: 500,
            url: "http://example.invalid".to_string(),
            message: String::new(),
        };
        assert!(!err.is_auth_error());
    }

    #[test]
    fn test_status_accessor() {
        let err = ApiError::Http {
            status: 503,
            url: "http://example.invalid".to_string(),
            message: String::new(),
        };
        assert_eq!(err.status(), Some(503));
        assert_eq!(ApiError::RetriesExhausted(4).status(), None);
    }
}
