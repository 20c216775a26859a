//! The single failure taxonomy for credential issuance and backend calls.
//!
//! Every failure crossing this crate's boundary is one of these four shapes,
//! carrying a human-readable message, a numeric status (0 reserved for
//! transport-level failure with no HTTP status), and for backend rejections
//! the raw response body for diagnostics. Failures are never swallowed and
//! never downgraded to a default value; no variant is retried automatically.

use thiserror::Error;

/// Errors produced by the credential issuer and the request client.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// No session, no subject id, or no usable credential. Surfaced before
    /// any network activity; the user must re-authenticate.
    #[error("No authenticated session")]
    Unauthenticated,

    /// The signing secret is absent from configuration. A deployment error,
    /// not user-recoverable.
    #[error("Signing secret is not configured")]
    Misconfigured,

    /// The transport could not complete (DNS, connection, abort). No HTTP
    /// status exists; callers may retry at their own discretion.
    #[error("Network error: {message}")]
    Network {
        /// Text derived from the underlying transport error.
        message: String,
    },

    /// The backend responded outside the 200-299 success range.
    #[error("{message}")]
    Request {
        /// Extracted detail: JSON `detail` field, else raw body text, else
        /// `"HTTP <status>: <status text>"`.
        message: String,
        /// The HTTP status code.
        status: u16,
        /// Raw response body, kept for diagnostics. `None` when empty.
        body: Option<String>,
    },
}

impl ApiError {
    /// Creates a network failure from an underlying transport error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates a backend rejection.
    pub fn request(message: impl Into<String>, status: u16, body: Option<String>) -> Self {
        Self::Request {
            message: message.into(),
            status,
            body,
        }
    }

    /// The numeric status code of the failure. 0 means the transport failed
    /// before any HTTP status existed.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Unauthenticated => 401,
            ApiError::Misconfigured => 500,
            ApiError::Network { .. } => 0,
            ApiError::Request { status, .. } => *status,
        }
    }

    /// Returns true if this is a transient failure that may succeed on retry.
    /// Retry policy itself is an outer layer's concern.
    pub fn is_transient(&self) -> bool {
        matches!(self, ApiError::Network { .. })
    }

    /// Returns true if this error indicates the user should re-authenticate.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(self, ApiError::Unauthenticated)
            || matches!(self, ApiError::Request { status: 401, .. })
    }
}
