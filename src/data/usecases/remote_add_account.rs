use std::sync::Arc;

use async_trait::async_trait;
use domain::{AccountModel, AddAccount, AddAccountParams, DomainError, DomainResult};

use super::json_body;
use crate::data::protocols::{HttpClient, HttpMethod, HttpRequest, HttpStatusCode};

/// Creates accounts with one POST to a fixed URL.
pub struct RemoteAddAccount {
    url: String,
    http_client: Arc<dyn HttpClient>,
}

impl RemoteAddAccount {
    pub fn new(url: impl Into<String>, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            url: url.into(),
            http_client,
        }
    }
}

#[async_trait]
impl AddAccount for RemoteAddAccount {
    async fn add(&self, params: AddAccountParams) -> DomainResult<AccountModel> {
        let request = HttpRequest::new(HttpMethod::Post, &self.url).with_body(json_body(&params)?);
        let response = self.http_client.request(request).await?;

        match response.status_code {
            HttpStatusCode::Ok => response
                .body
                .and_then(AccountModel::from_value)
                .ok_or(DomainError::Unexpected),
            HttpStatusCode::Forbidden => Err(DomainError::EmailInUse),
            _ => Err(DomainError::Unexpected),
        }
    }
}
