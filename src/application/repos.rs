//! Persistence ports: the string-keyed store the blog collection lives in.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored document is corrupt: {message}")]
    Corrupt { message: String },
    #[error("failed to encode `{key}`: {message}")]
    Encode { key: String, message: String },
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

impl StorageError {
    pub fn corrupt(message: impl std::fmt::Display) -> Self {
        Self::Corrupt {
            message: message.to_string(),
        }
    }

    pub fn encode(key: &str, message: impl std::fmt::Display) -> Self {
        Self::Encode {
            key: key.to_string(),
            message: message.to_string(),
        }
    }
}

/// A flat string-keyed store holding whole serialized documents.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
