//! Domain layer - Models, domain errors and use-case contracts.
//!
//! This crate contains no transport or storage code. The client crate
//! implements the use cases against the survey API.

pub mod account;
pub mod constants;
pub mod error;
pub mod survey;
pub mod usecases;

pub use account::{AccountModel, AddAccountParams, AuthenticationParams};
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use survey::{SaveSurveyResultParams, SurveyModel, SurveyResultAnswerModel, SurveyResultModel};
pub use usecases::{AddAccount, Authentication, LoadSurveyList, LoadSurveyResult, SaveSurveyResult};

#[cfg(any(test, feature = "test-utils"))]
pub use usecases::{
    MockAddAccount, MockAuthentication, MockLoadSurveyList, MockLoadSurveyResult,
    MockSaveSurveyResult,
};
