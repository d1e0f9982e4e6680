//! Stubbed survey API for integration tests.
//!
//! Routes are matched on method and path; unmatched requests get 404.
//! Every request is recorded so tests can assert what was sent.

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::Value;

use survey_client::infra::FileStorage;
use survey_client::{Config, UseCases};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

type Routes = HashMap<(Method, String), (StatusCode, Option<Value>)>;

#[derive(Clone, Default)]
pub struct StubApi {
    routes: Arc<Mutex<Routes>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubApi {
    pub fn mock(&self, method: Method, path: &str, status: StatusCode, body: Option<Value>) {
        self.routes
            .lock()
            .unwrap()
            .insert((method, format!("/api/{}", path)), (status, body));
    }

    pub fn mock_ok(&self, method: Method, path: &str, fixture_name: &str) {
        self.mock(method, path, StatusCode::OK, Some(fixture(fixture_name)));
    }

    pub fn mock_forbidden(&self, method: Method, path: &str) {
        self.mock(method, path, StatusCode::FORBIDDEN, None);
    }

    pub fn mock_server_error(&self, method: Method, path: &str) {
        self.mock(method, path, StatusCode::INTERNAL_SERVER_ERROR, None);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Serve on an ephemeral port and return the API base URL
    pub async fn start(&self) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = Router::new().fallback(handle).with_state(self.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}/api", addr)
    }
}

async fn handle(
    State(stub): State<StubApi>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let body = if body.is_empty() {
        None
    } else {
        serde_json::from_slice(&body).ok()
    };
    let path = uri.path().to_string();

    stub.requests.lock().unwrap().push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        headers,
        body,
    });

    let route = stub.routes.lock().unwrap().get(&(method, path)).cloned();
    match route {
        Some((status, Some(body))) => (status, Json(body)).into_response(),
        Some((status, None)) => status.into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

pub fn fixture(name: &str) -> Value {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(format!("{}.json", name));
    let content = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&content).unwrap()
}

pub fn temp_storage_path() -> PathBuf {
    std::env::temp_dir()
        .join(format!("survey-client-it-{}", uuid::Uuid::new_v4()))
        .join("storage.json")
}

/// Container against the stub, with its own storage file
pub fn make_container(api_url: String) -> (UseCases, FileStorage) {
    let storage_path = temp_storage_path();
    let config = Config {
        api_url,
        storage_path: storage_path.clone(),
    };
    (UseCases::from_config(config), FileStorage::new(storage_path))
}
