mod local;
pub mod naming;

pub use local::LocalFileStore;
pub use naming::NamingStrategy;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Prefix of every reference path handed out by a store.
pub const URL_PREFIX: &str = "/uploads/";

#[derive(Debug, Error)]
pub enum FileStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid file name: {0}")]
    InvalidName(String),
    #[error("Invalid reference path: {0}")]
    InvalidReference(String),
    #[error("Blob not found: {0}")]
    NotFound(String),
}

/// Result of a best-effort delete. Never an error: callers choose the policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
    Failed(String),
}

impl DeleteOutcome {
    pub fn is_deleted(&self) -> bool {
        matches!(self, DeleteOutcome::Deleted)
    }
}

/// Storage for uploaded blobs, addressed by the reference path returned from `save`.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Persist `payload` under a collision-avoided name derived from `desired_name`
    /// and return its reference path (`/uploads/<stored-name>`).
    async fn save(&self, payload: Bytes, desired_name: &str) -> Result<String, FileStoreError>;
    async fn read(&self, reference: &str) -> Result<Bytes, FileStoreError>;
    async fn exists(&self, reference: &str) -> Result<bool, FileStoreError>;
    async fn delete(&self, reference: &str) -> DeleteOutcome;
}
