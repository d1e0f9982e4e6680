//! Key/value storage protocol (the browser's local storage, on disk here).

use serde_json::Value;
use thiserror::Error;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage file is not a JSON object: {0}")]
    Corrupted(#[from] serde_json::Error),
}

#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait GetStorage: Send + Sync {
    /// Read a key; `None` when it was never set or has been removed
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError>;
}

#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait SetStorage: Send + Sync {
    /// Write a key; `None` removes it
    fn set(&self, key: &str, value: Option<Value>) -> Result<(), StorageError>;
}
