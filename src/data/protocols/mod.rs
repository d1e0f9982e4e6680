//! Protocols the data layer depends on.

pub mod http;
pub mod storage;

pub use http::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, HttpStatusCode};
pub use storage::{GetStorage, SetStorage, StorageError};

#[cfg(any(test, feature = "test-utils"))]
pub use http::MockHttpClient;
#[cfg(any(test, feature = "test-utils"))]
pub use storage::{MockGetStorage, MockSetStorage};
