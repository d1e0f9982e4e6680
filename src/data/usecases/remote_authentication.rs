use std::sync::Arc;

use async_trait::async_trait;
use domain::{AccountModel, Authentication, AuthenticationParams, DomainError, DomainResult};

use super::json_body;
use crate::data::protocols::{HttpClient, HttpMethod, HttpRequest, HttpStatusCode};

/// Logs in with one POST to a fixed URL.
pub struct RemoteAuthentication {
    url: String,
    http_client: Arc<dyn HttpClient>,
}

impl RemoteAuthentication {
    pub fn new(url: impl Into<String>, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            url: url.into(),
            http_client,
        }
    }
}

#[async_trait]
impl Authentication for RemoteAuthentication {
    async fn auth(&self, params: AuthenticationParams) -> DomainResult<AccountModel> {
        let request = HttpRequest::new(HttpMethod::Post, &self.url).with_body(json_body(&params)?);
        let response = self.http_client.request(request).await?;

        match response.status_code {
            HttpStatusCode::Ok => response
                .body
                .and_then(AccountModel::from_value)
                .ok_or(DomainError::Unexpected),
            HttpStatusCode::Unauthorized => Err(DomainError::InvalidCredentials),
            _ => Err(DomainError::Unexpected),
        }
    }
}
