//! Errors raised while reading raw audit log payloads
//!
//! Decoding itself never fails: once a record has an id and an action type,
//! every other problem degrades to a raw value or an opaque reference.

use chat_common::AppError;

/// Audit log errors
#[derive(Debug, thiserror::Error)]
pub enum AuditLogError {
    /// The payload is not valid JSON or lacks a required key (`id`, `action_type`)
    #[error("Malformed audit log payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error("Failed to read audit log payload: {0}")]
    Io(#[from] std::io::Error),
}

impl AuditLogError {
    /// Get an error code string for logs
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedPayload(_) => "MALFORMED_PAYLOAD",
            Self::Io(_) => "IO_ERROR",
        }
    }
}

impl From<AuditLogError> for AppError {
    fn from(err: AuditLogError) -> Self {
        match err {
            AuditLogError::MalformedPayload(e) => AppError::from(e),
            AuditLogError::Io(e) => AppError::Io(e),
        }
    }
}

/// Result type for audit log payload handling
pub type AuditLogResult<T> = Result<T, AuditLogError>;
