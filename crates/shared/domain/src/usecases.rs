//! Use-case contracts.
//!
//! The data layer implements these against the HTTP API; the presentation
//! layer and CLI commands depend only on the traits.

use async_trait::async_trait;

use crate::account::{AccountModel, AddAccountParams, AuthenticationParams};
use crate::error::DomainResult;
use crate::survey::{SaveSurveyResultParams, SurveyModel, SurveyResultModel};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Create a new account
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AddAccount: Send + Sync {
    async fn add(&self, params: AddAccountParams) -> DomainResult<AccountModel>;
}

/// Log in with email and password
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait Authentication: Send + Sync {
    async fn auth(&self, params: AuthenticationParams) -> DomainResult<AccountModel>;
}

/// List the surveys visible to the current account
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait LoadSurveyList: Send + Sync {
    async fn load_all(&self) -> DomainResult<Vec<SurveyModel>>;
}

/// Load the result of one survey
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait LoadSurveyResult: Send + Sync {
    async fn load(&self) -> DomainResult<SurveyResultModel>;
}

/// Answer a survey and get the updated result back
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SaveSurveyResult: Send + Sync {
    async fn save(&self, params: SaveSurveyResultParams) -> DomainResult<SurveyResultModel>;
}
