//! HTTP protocol the remote use cases are written against.
//!
//! Use cases never see the concrete transport; they build an
//! [`HttpRequest`], hand it to an [`HttpClient`] and map the status code.

use std::collections::BTreeMap;

use async_trait::async_trait;
use domain::DomainError;
use serde_json::Value;
use thiserror::Error;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status codes the use cases distinguish; anything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpStatusCode {
    Ok,
    NoContent,
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    ServerError,
    Other(u16),
}

impl From<u16> for HttpStatusCode {
    fn from(code: u16) -> Self {
        match code {
            200 => HttpStatusCode::Ok,
            204 => HttpStatusCode::NoContent,
            400 => HttpStatusCode::BadRequest,
            401 => HttpStatusCode::Unauthorized,
            403 => HttpStatusCode::Forbidden,
            404 => HttpStatusCode::NotFound,
            500 => HttpStatusCode::ServerError,
            other => HttpStatusCode::Other(other),
        }
    }
}

impl From<HttpStatusCode> for u16 {
    fn from(status: HttpStatusCode) -> Self {
        match status {
            HttpStatusCode::Ok => 200,
            HttpStatusCode::NoContent => 204,
            HttpStatusCode::BadRequest => 400,
            HttpStatusCode::Unauthorized => 401,
            HttpStatusCode::Forbidden => 403,
            HttpStatusCode::NotFound => 404,
            HttpStatusCode::ServerError => 500,
            HttpStatusCode::Other(code) => code,
        }
    }
}

/// One outbound request
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub url: String,
    pub method: HttpMethod,
    pub body: Option<Value>,
    pub headers: BTreeMap<String, String>,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method,
            body: None,
            headers: BTreeMap::new(),
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Status plus an optional JSON body
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status_code: HttpStatusCode,
    pub body: Option<Value>,
}

impl HttpResponse {
    pub fn new(status_code: HttpStatusCode, body: Option<Value>) -> Self {
        Self { status_code, body }
    }
}

/// Failure below HTTP: no response was produced at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HttpError {
    #[error("Connection failed: {0}")]
    Connection(String),
}

impl From<HttpError> for DomainError {
    fn from(_: HttpError) -> Self {
        DomainError::Connection
    }
}

/// Transport used by the remote use cases.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}
