//! Error types for authentication operations

/// Errors that can occur while preparing a signed request
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Invalid API credentials
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    /// Parameters could not be form-encoded
    #[error("Failed to encode parameters: {0}")]
    Encode(String),

    /// The signing payload could not be URL-decoded
    #[error("Failed to canonicalize signing payload: {0}")]
    Canonicalize(String),
}

/// Result type for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;
