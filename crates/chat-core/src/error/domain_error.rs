//! Domain errors - raised when a raw value cannot become a domain value

use thiserror::Error;

/// Domain layer errors
///
/// The audit decoder never surfaces these to callers; it logs them and keeps
/// the raw value. They exist so conversions stay honest about failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid snowflake: {0}")]
    InvalidSnowflake(String),

    #[error("Invalid permission bits: {0}")]
    InvalidPermissions(String),

    #[error("Invalid colour: {0}")]
    InvalidColour(String),

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Invalid value for {field}: {reason}")]
    InvalidField { field: String, reason: String },
}

impl DomainError {
    /// Get an error code string for logs and API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidSnowflake(_) => "INVALID_SNOWFLAKE",
            Self::InvalidPermissions(_) => "INVALID_PERMISSIONS",
            Self::InvalidColour(_) => "INVALID_COLOUR",
            Self::MissingField(_) => "MISSING_FIELD",
            Self::InvalidField { .. } => "INVALID_FIELD",
        }
    }

    /// Build an `InvalidField` error
    pub fn invalid_field(field: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.to_string(),
        }
    }
}
