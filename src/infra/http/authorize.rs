//! Decorator adding the stored account's token to every request.

use std::sync::Arc;

use async_trait::async_trait;
use domain::AccountModel;

use crate::config::{ACCESS_TOKEN_HEADER, ACCOUNT_STORAGE_KEY};
use crate::data::protocols::{GetStorage, HttpClient, HttpError, HttpRequest, HttpResponse};

pub struct AuthorizeHttpClient {
    storage: Arc<dyn GetStorage>,
    inner: Arc<dyn HttpClient>,
}

impl AuthorizeHttpClient {
    pub fn new(storage: Arc<dyn GetStorage>, inner: Arc<dyn HttpClient>) -> Self {
        Self { storage, inner }
    }

    fn access_token(&self) -> Option<String> {
        match self.storage.get(ACCOUNT_STORAGE_KEY) {
            Ok(value) => value
                .and_then(AccountModel::from_value)
                .and_then(|account| account.access_token().map(str::to_string)),
            Err(e) => {
                // The API answers 403 without a token, which logs the user out
                tracing::warn!("Could not read stored account: {}", e);
                None
            }
        }
    }
}

#[async_trait]
impl HttpClient for AuthorizeHttpClient {
    async fn request(&self, mut request: HttpRequest) -> Result<HttpResponse, HttpError> {
        if let Some(token) = self.access_token() {
            request.headers.insert(ACCESS_TOKEN_HEADER.to_string(), token);
        }
        self.inner.request(request).await
    }
}
