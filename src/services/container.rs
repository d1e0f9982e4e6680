//! Use-case container - Wires remote use cases to the transport and storage.
//!
//! Commands depend on the [`UseCaseContainer`] trait only, so they can be
//! exercised with a mocked container.

use std::sync::Arc;

use domain::{AddAccount, Authentication, LoadSurveyList, LoadSurveyResult, SaveSurveyResult};

use super::CurrentAccount;
use crate::config::{Config, LOGIN_PATH, SIGNUP_PATH, SURVEYS_PATH};
use crate::data::protocols::{GetStorage, HttpClient, SetStorage};
use crate::data::{
    RemoteAddAccount, RemoteAuthentication, RemoteLoadSurveyList, RemoteLoadSurveyResult,
    RemoteSaveSurveyResult,
};
use crate::infra::{AuthorizeHttpClient, FileStorage, ReqwestHttpClient};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Factory for every use case the CLI offers.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait UseCaseContainer: Send + Sync {
    fn add_account(&self) -> Arc<dyn AddAccount>;

    fn authentication(&self) -> Arc<dyn Authentication>;

    fn load_survey_list(&self) -> Arc<dyn LoadSurveyList>;

    fn load_survey_result(&self, survey_id: &str) -> Arc<dyn LoadSurveyResult>;

    fn save_survey_result(&self, survey_id: &str) -> Arc<dyn SaveSurveyResult>;

    fn current_account(&self) -> Arc<CurrentAccount>;
}

/// Concrete container over the survey API.
pub struct UseCases {
    config: Config,
    http_client: Arc<dyn HttpClient>,
    authorized_client: Arc<dyn HttpClient>,
    current_account: Arc<CurrentAccount>,
}

impl UseCases {
    /// Build from explicit transport and storage.
    ///
    /// Signup and login go out unauthenticated; survey endpoints carry the
    /// stored account's token.
    pub fn new<S>(config: Config, http_client: Arc<dyn HttpClient>, storage: Arc<S>) -> Self
    where
        S: GetStorage + SetStorage + 'static,
    {
        let authorized_client: Arc<dyn HttpClient> =
            Arc::new(AuthorizeHttpClient::new(storage.clone(), http_client.clone()));
        let current_account = Arc::new(CurrentAccount::new(storage.clone(), storage));

        Self {
            config,
            http_client,
            authorized_client,
            current_account,
        }
    }

    /// Build with reqwest and on-disk storage.
    pub fn from_config(config: Config) -> Self {
        let storage = Arc::new(FileStorage::new(config.storage_path.clone()));
        Self::new(config, Arc::new(ReqwestHttpClient::new()), storage)
    }
}

impl UseCaseContainer for UseCases {
    fn add_account(&self) -> Arc<dyn AddAccount> {
        Arc::new(RemoteAddAccount::new(
            self.config.api_url(SIGNUP_PATH),
            self.http_client.clone(),
        ))
    }

    fn authentication(&self) -> Arc<dyn Authentication> {
        Arc::new(RemoteAuthentication::new(
            self.config.api_url(LOGIN_PATH),
            self.http_client.clone(),
        ))
    }

    fn load_survey_list(&self) -> Arc<dyn LoadSurveyList> {
        Arc::new(RemoteLoadSurveyList::new(
            self.config.api_url(SURVEYS_PATH),
            self.authorized_client.clone(),
        ))
    }

    fn load_survey_result(&self, survey_id: &str) -> Arc<dyn LoadSurveyResult> {
        Arc::new(RemoteLoadSurveyResult::new(
            self.config.survey_result_url(survey_id),
            self.authorized_client.clone(),
        ))
    }

    fn save_survey_result(&self, survey_id: &str) -> Arc<dyn SaveSurveyResult> {
        Arc::new(RemoteSaveSurveyResult::new(
            self.config.survey_result_url(survey_id),
            self.authorized_client.clone(),
        ))
    }

    fn current_account(&self) -> Arc<CurrentAccount> {
        self.current_account.clone()
    }
}
