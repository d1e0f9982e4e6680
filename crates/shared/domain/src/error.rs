//! Domain-level errors.
//!
//! These errors classify failures of a use case. They are independent of
//! the transport: adapters translate status codes into one of these kinds.

use thiserror::Error;

use crate::constants::{
    MSG_ACCESS_DENIED, MSG_CONNECTION, MSG_EMAIL_IN_USE, MSG_INVALID_CREDENTIALS, MSG_UNEXPECTED,
};

/// Closed set of use-case failures, each with a fixed message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    /// Signup rejected because the email is already registered
    #[error("{}", MSG_EMAIL_IN_USE)]
    EmailInUse,

    /// Login rejected
    #[error("{}", MSG_INVALID_CREDENTIALS)]
    InvalidCredentials,

    /// The stored account is missing, expired or not allowed
    #[error("{}", MSG_ACCESS_DENIED)]
    AccessDenied,

    /// Any status the use case does not expect
    #[error("{}", MSG_UNEXPECTED)]
    Unexpected,

    /// The request never produced an HTTP response
    #[error("{}", MSG_CONNECTION)]
    Connection,
}

impl DomainError {
    /// Stable identifier, handy for logs and matching in scripts
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::EmailInUse => "EMAIL_IN_USE",
            DomainError::InvalidCredentials => "INVALID_CREDENTIALS",
            DomainError::AccessDenied => "ACCESS_DENIED",
            DomainError::Unexpected => "UNEXPECTED",
            DomainError::Connection => "CONNECTION",
        }
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
