//! What a screen does with a failed use case.

use std::sync::Arc;

use domain::DomainError;

use crate::errors::AppError;
use crate::services::CurrentAccount;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The account was cleared; the user has to log in again
    Logout,
    /// Show the message and stay on the screen
    Message(String),
}

pub struct ErrorHandler {
    current_account: Arc<CurrentAccount>,
}

impl ErrorHandler {
    pub fn new(current_account: Arc<CurrentAccount>) -> Self {
        Self { current_account }
    }

    pub fn handle(&self, error: DomainError) -> Outcome {
        match error {
            DomainError::AccessDenied => {
                self.logout();
                Outcome::Logout
            }
            other => Outcome::Message(other.to_string()),
        }
    }

    /// Same decision as `handle`, as the command's error
    pub fn to_app_error(&self, error: DomainError) -> AppError {
        match error {
            DomainError::AccessDenied => {
                self.logout();
                AppError::LoginRequired
            }
            other => AppError::Domain(other),
        }
    }

    fn logout(&self) {
        if let Err(e) = self.current_account.clear() {
            tracing::warn!("Could not clear stored account: {}", e);
        }
    }
}
