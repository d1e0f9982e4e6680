//! Remote use cases - domain contracts implemented over [`HttpClient`].
//!
//! Each adapter issues exactly one request per call and maps the status
//! code to a value or a [`DomainError`]. No retries, no caching, no logging.
//!
//! [`HttpClient`]: crate::data::protocols::HttpClient

mod remote_add_account;
mod remote_authentication;
mod remote_load_survey_list;
mod remote_load_survey_result;
mod remote_save_survey_result;

pub use remote_add_account::RemoteAddAccount;
pub use remote_authentication::RemoteAuthentication;
pub use remote_load_survey_list::RemoteLoadSurveyList;
pub use remote_load_survey_result::RemoteLoadSurveyResult;
pub use remote_save_survey_result::RemoteSaveSurveyResult;

use domain::{DomainError, DomainResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Serialize request params into a JSON body
fn json_body<T: Serialize>(params: &T) -> DomainResult<Value> {
    serde_json::to_value(params).map_err(|_| DomainError::Unexpected)
}

/// Decode a success body; a missing or mismatched body is unexpected
fn decode<T: DeserializeOwned>(body: Option<Value>) -> DomainResult<T> {
    let body = body.ok_or(DomainError::Unexpected)?;
    serde_json::from_value(body).map_err(|_| DomainError::Unexpected)
}
