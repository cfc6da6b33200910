//! Error types for the nu3pbnb client.
//!
//! Every operation on [`ApiClient`](crate::ApiClient) fails with the same
//! [`Error`] type; domain methods never introduce failure kinds of their own.

use std::fmt;
use thiserror::Error;

/// The unified error type for nu3pbnb operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("API error: {0}")]
    Api(#[from] ApiRejection),

    /// The server answered with a success status but the body could not be
    /// parsed as the expected JSON shape.
    #[error("malformed response (HTTP {status}): {source}")]
    MalformedResponse {
        /// HTTP status code of the response.
        status: u16,
        /// The underlying JSON parse failure.
        #[source]
        source: serde_json::Error,
    },

    /// An invalid base URL was supplied at construction time.
    #[error("invalid base URL '{value}': {reason}")]
    InvalidBaseUrl {
        /// The rejected input.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// A non-success response from the API.
///
/// Carries the original HTTP status and the raw response body. When the body
/// is the server's JSON error format (`{"error": …, "message": …}`), the
/// parsed fields are available as well. The client performs no status-specific
/// branching; interpretation is the caller's responsibility (e.g. re-login on
/// a 401).
#[derive(Debug)]
pub struct ApiRejection {
    /// HTTP status code.
    pub status: u16,
    /// Short error code from the server (if present).
    pub error: Option<String>,
    /// Human-readable message from the server (if present).
    pub message: Option<String>,
    /// The raw response body, unmodified.
    pub body: String,
}

impl ApiRejection {
    /// Build a rejection from a status code and raw body, extracting the
    /// server's structured fields when the body is its JSON error format.
    pub(crate) fn from_body(status: u16, body: String) -> Self {
        #[derive(serde::Deserialize)]
        struct ErrorBody {
            error: Option<String>,
            message: Option<String>,
        }

        let (error, message) = serde_json::from_str::<ErrorBody>(&body)
            .map_or((None, None), |parsed| (parsed.error, parsed.message));

        Self {
            status,
            error,
            message,
            body,
        }
    }

    /// Check whether this rejection indicates a missing or expired credential.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401
    }
}

impl fmt::Display for ApiRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref error) = self.error {
            write!(f, " [{}]", error)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiRejection {}
