use std::sync::Arc;

use async_trait::async_trait;
use domain::{DomainError, DomainResult, SaveSurveyResult, SaveSurveyResultParams, SurveyResultModel};

use super::{decode, json_body};
use crate::data::protocols::{HttpClient, HttpMethod, HttpRequest, HttpStatusCode};

/// Records an answer with one PUT and returns the updated result.
pub struct RemoteSaveSurveyResult {
    url: String,
    http_client: Arc<dyn HttpClient>,
}

impl RemoteSaveSurveyResult {
    pub fn new(url: impl Into<String>, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            url: url.into(),
            http_client,
        }
    }
}

#[async_trait]
impl SaveSurveyResult for RemoteSaveSurveyResult {
    async fn save(&self, params: SaveSurveyResultParams) -> DomainResult<SurveyResultModel> {
        let request = HttpRequest::new(HttpMethod::Put, &self.url).with_body(json_body(&params)?);
        let response = self.http_client.request(request).await?;

        match response.status_code {
            HttpStatusCode::Ok => decode(response.body),
            HttpStatusCode::Forbidden => Err(DomainError::AccessDenied),
            _ => Err(DomainError::Unexpected),
        }
    }
}
