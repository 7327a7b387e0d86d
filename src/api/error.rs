use http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
    #[error("{0}")]
    ValidationError(String),
    #[error("Operation failed: HTTP {}\n{body}", .status.as_u16())]
    ApiError { status: StatusCode, body: String },
    #[error("Request failed: {0}")]
    RequestError(String),
    #[error("Unexpected API response ({0}): {1}")]
    InvalidResponse(String, String),
    #[error("Error formatting output")]
    FormatError,
    #[error("Unable to build HTTP client")]
    InternalError,
}

impl Error {
    /// HTTP status carried by `ApiError`, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }
}
