//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - HTTP transport to the survey API
//! - Token injection for protected endpoints
//! - Key/value storage on disk

pub mod http;
pub mod storage;

pub use http::{AuthorizeHttpClient, ReqwestHttpClient};
pub use storage::FileStorage;
