//! Centralized error handling.
//!
//! Provides a unified error type for the CLI, wrapping domain errors with
//! the failures that happen around them (form validation, local storage).

use domain::DomainError;
use thiserror::Error;

use crate::data::protocols::StorageError;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Access was denied and the stored account has been cleared
    #[error("Sessão expirada. Faça login novamente.")]
    LoginRequired,

    #[error("{0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl AppError {
    /// Get error code for logs
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Domain(e) => e.code(),
            AppError::LoginRequired => "LOGIN_REQUIRED",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                DomainError::Unexpected.to_string()
            }
            _ => self.to_string(),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }
}
