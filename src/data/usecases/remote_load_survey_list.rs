use std::sync::Arc;

use async_trait::async_trait;
use domain::{DomainError, DomainResult, LoadSurveyList, SurveyModel};

use super::decode;
use crate::data::protocols::{HttpClient, HttpMethod, HttpRequest, HttpStatusCode};

/// Lists surveys with one GET; 204 means there are none.
pub struct RemoteLoadSurveyList {
    url: String,
    http_client: Arc<dyn HttpClient>,
}

impl RemoteLoadSurveyList {
    pub fn new(url: impl Into<String>, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            url: url.into(),
            http_client,
        }
    }
}

#[async_trait]
impl LoadSurveyList for RemoteLoadSurveyList {
    async fn load_all(&self) -> DomainResult<Vec<SurveyModel>> {
        let request = HttpRequest::new(HttpMethod::Get, &self.url);
        let response = self.http_client.request(request).await?;

        match response.status_code {
            HttpStatusCode::Ok => decode(response.body),
            HttpStatusCode::NoContent => Ok(Vec::new()),
            HttpStatusCode::Forbidden => Err(DomainError::AccessDenied),
            _ => Err(DomainError::Unexpected),
        }
    }
}
