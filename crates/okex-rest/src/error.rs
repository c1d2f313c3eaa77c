//! Error types for REST API operations

use okex_auth::AuthError;
use okex_types::OkexApiError;

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// HTTP request failed before a response arrived
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request timed out
    #[error("Request timed out")]
    Timeout,

    /// Server answered with a status other than 200
    #[error("Unexpected HTTP status {status}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, as received
        body: String,
    },

    /// Credentials or request signing failed
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Response body could not be decoded
    #[error("Decode error: {message}")]
    Decode {
        /// Decoder diagnostic
        message: String,
        /// Response body, truncated
        body: String,
    },

    /// The exchange reported a catalogued error code
    #[error("API error: {0}")]
    Api(#[from] OkexApiError),

    /// Invalid request parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Longest body excerpt kept in a decode error
const BODY_EXCERPT_LEN: usize = 256;

impl RestError {
    /// Create a decode error, keeping an excerpt of the offending body
    pub fn decode(message: impl Into<String>, body: &str) -> Self {
        let body = match body.char_indices().nth(BODY_EXCERPT_LEN) {
            Some((idx, _)) => format!("{}...", &body[..idx]),
            None => body.to_string(),
        };

        Self::Decode {
            message: message.into(),
            body,
        }
    }

    /// Classify a transport error
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(err)
        }
    }

    /// The exchange error, if this is one
    pub fn api_error(&self) -> Option<&OkexApiError> {
        match self {
            Self::Api(error) => Some(error),
            _ => None,
        }
    }

    /// Check if this error indicates rate limiting
    pub fn is_rate_limited(&self) -> bool {
        match self {
            Self::Api(error) => error.is_rate_limit(),
            Self::Status { status, .. } => *status == 403 || *status == 429,
            _ => false,
        }
    }

    /// Check if this error is about keys or signatures
    pub fn is_auth_error(&self) -> bool {
        match self {
            Self::Api(error) => error.is_auth_error(),
            Self::Auth(_) => true,
            _ => false,
        }
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
