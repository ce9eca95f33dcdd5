//! Shared error type across gaugehub crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Name is already registered.
    AlreadyExists,
    /// Name is not registered.
    NotFound,
    /// Value cannot be represented as a finite number.
    InvalidValue,
    /// Metric name or agent id is malformed.
    InvalidName,
    /// Invalid input / malformed request.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::AlreadyExists => "ALREADY_EXISTS",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::InvalidValue => "INVALID_VALUE",
            ClientCode::InvalidName => "INVALID_NAME",
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, GaugeHubError>;

/// Unified error type used by core and server.
///
/// Every variant is a recoverable, caller-facing condition. A failed registry
/// operation never leaves partial state behind.
#[derive(Debug, Error, PartialEq)]
pub enum GaugeHubError {
    #[error("already exists: {0}")]
    AlreadyExists(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("invalid value: {0}")]
    InvalidValue(String),
    #[error("invalid name: {0}")]
    InvalidName(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl GaugeHubError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            GaugeHubError::AlreadyExists(_) => ClientCode::AlreadyExists,
            GaugeHubError::NotFound(_) => ClientCode::NotFound,
            GaugeHubError::InvalidValue(_) => ClientCode::InvalidValue,
            GaugeHubError::InvalidName(_) => ClientCode::InvalidName,
            GaugeHubError::BadRequest(_) => ClientCode::BadRequest,
            GaugeHubError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            GaugeHubError::Internal(_) => ClientCode::Internal,
        }
    }
}
