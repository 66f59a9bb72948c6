//! Shared error type across AUBus crates.

use thiserror::Error;

/// Client-facing error codes (stable wire contract).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Line was not syntactically valid JSON.
    BadJson,
    /// Envelope failed required-field or format checks.
    BadRequest,
    /// Message type has no registered handler.
    UnknownType,
    /// Unexpected fault while producing a response.
    ServerError,
}

impl ErrorCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadJson => "BAD_JSON",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::UnknownType => "UNKNOWN_TYPE",
            ErrorCode::ServerError => "SERVER_ERROR",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, BusError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum BusError {
    #[error("bad json: {0}")]
    BadJson(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unknown type: {0}")]
    UnknownType(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl BusError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ErrorCode {
        match self {
            BusError::BadJson(_) => ErrorCode::BadJson,
            BusError::BadRequest(_) => ErrorCode::BadRequest,
            BusError::UnknownType(_) => ErrorCode::UnknownType,
            BusError::Internal(_) => ErrorCode::ServerError,
        }
    }
}
