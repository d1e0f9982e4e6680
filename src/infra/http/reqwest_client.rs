//! [`HttpClient`] backed by reqwest.

use async_trait::async_trait;
use tracing::debug;

use crate::data::protocols::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, HttpStatusCode};

/// JSON-over-HTTP transport. Every status is returned as a response;
/// only failures to get one become [`HttpError`].
#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self::default()
    }
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        debug!("{} {}", request.method, request.url);

        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| HttpError::Connection(e.to_string()))?;
        let status_code = HttpStatusCode::from(response.status().as_u16());
        let bytes = response
            .bytes()
            .await
            .map_err(|e| HttpError::Connection(e.to_string()))?;

        // Empty and non-JSON bodies are both "no body"
        let body = if bytes.is_empty() {
            None
        } else {
            serde_json::from_slice(&bytes).ok()
        };

        debug!("{} {} -> {}", request.method, request.url, u16::from(status_code));
        Ok(HttpResponse { status_code, body })
    }
}
