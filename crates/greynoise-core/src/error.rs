use thiserror::Error;

/// Result type alias for GreyNoise operations
pub type Result<T> = std::result::Result<T, GreyNoiseError>;

/// Errors that can occur when using the GreyNoise API
#[derive(Error, Debug)]
pub enum GreyNoiseError {
    /// A caller-supplied argument was rejected before any request was made
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The API answered with a status outside the 2xx range
    #[error("request failed ({status}): {body}")]
    RequestFailure {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The API returned JSON that does not follow the expected protocol
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Reading or writing the configuration file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GreyNoiseError {
    /// Returns the HTTP status code if the API rejected the request
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::RequestFailure { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the error is due to authentication
    #[must_use]
    pub const fn is_auth_error(&self) -> bool {
        matches!(self, Self::RequestFailure { status: 401, .. })
    }

    /// Returns true if the error was raised by argument validation
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
