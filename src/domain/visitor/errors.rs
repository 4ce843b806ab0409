//! Visitor-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, SessionKey, ValidationError};

/// Visitor-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisitorError {
    /// No visitor exists for the given session.
    NotFound(SessionKey),
    /// The visitor has already converted.
    AlreadyConverted,
    /// The visitor is not eligible for conversion.
    NotEligible,
    /// Invalid state for operation.
    InvalidState(String),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl VisitorError {
    pub fn not_found(session_key: SessionKey) -> Self {
        VisitorError::NotFound(session_key)
    }
    pub fn already_converted() -> Self {
        VisitorError::AlreadyConverted
    }
    pub fn not_eligible() -> Self {
        VisitorError::NotEligible
    }
    pub fn invalid_state(message: impl Into<String>) -> Self {
        VisitorError::InvalidState(message.into())
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        VisitorError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        VisitorError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            VisitorError::NotFound(_) => ErrorCode::VisitorNotFound,
            VisitorError::AlreadyConverted => ErrorCode::AlreadyConverted,
            VisitorError::NotEligible => ErrorCode::NotEligibleForConversion,
            VisitorError::InvalidState(_) => ErrorCode::InvalidStateTransition,
            VisitorError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            VisitorError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            VisitorError::NotFound(session_key) => {
                format!("Visitor not found for session: {}", session_key)
            }
            VisitorError::AlreadyConverted => "Visitor is already converted".to_string(),
            VisitorError::NotEligible => "Visitor is not eligible for conversion".to_string(),
            VisitorError::InvalidState(msg) => format!("Invalid state: {}", msg),
            VisitorError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            VisitorError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for VisitorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for VisitorError {}

impl From<DomainError> for VisitorError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::AlreadyConverted => VisitorError::AlreadyConverted,
            ErrorCode::NotEligibleForConversion => VisitorError::NotEligible,
            ErrorCode::InvalidStateTransition => VisitorError::InvalidState(err.message),
            ErrorCode::VisitorNotFound => VisitorError::Infrastructure(err.message),
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => VisitorError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => VisitorError::Infrastructure(err.message),
        }
    }
}

impl From<ValidationError> for VisitorError {
    fn from(err: ValidationError) -> Self {
        VisitorError::from(DomainError::from(err))
    }
}
