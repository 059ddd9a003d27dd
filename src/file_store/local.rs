use async_trait::async_trait;
use bytes::Bytes;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use super::naming::{self, NamingStrategy};
use super::{DeleteOutcome, FileStore, FileStoreError, URL_PREFIX};
use crate::clock::{Clock, SystemClock};

/// Filesystem store rooted at an injected upload directory.
///
/// The root is created lazily on the first save. Stored blobs are never
/// rewritten in place; they live until an explicit `delete`.
pub struct LocalFileStore {
    root: PathBuf,
    naming: NamingStrategy,
    clock: Arc<dyn Clock>,
}

impl LocalFileStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            naming: NamingStrategy::default(),
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_naming(mut self, naming: NamingStrategy) -> Self {
        self.naming = naming;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a reference path to its blob. Only `/uploads/<one file name>` is accepted.
    fn blob_path(&self, reference: &str) -> Result<PathBuf, FileStoreError> {
        let invalid = || FileStoreError::InvalidReference(reference.to_string());

        let name = reference.strip_prefix(URL_PREFIX).ok_or_else(invalid)?;
        if name.contains(['\\', '\0']) {
            return Err(invalid());
        }

        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(segment)), None) => Ok(self.root.join(segment)),
            _ => Err(invalid()),
        }
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn save(&self, payload: Bytes, desired_name: &str) -> Result<String, FileStoreError> {
        let stored = naming::stored_name(self.naming, self.clock.as_ref(), desired_name)?;

        tokio::fs::create_dir_all(&self.root).await?;
        let path = self.root.join(&stored);
        tokio::fs::write(&path, &payload).await?;

        tracing::debug!(
            stored_name = %stored,
            byte_size = payload.len(),
            "Saved upload"
        );
        Ok(format!("{URL_PREFIX}{stored}"))
    }

    async fn read(&self, reference: &str) -> Result<Bytes, FileStoreError> {
        let path = self.blob_path(reference)?;
        match tokio::fs::read(&path).await {
            Ok(data) => Ok(Bytes::from(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(FileStoreError::NotFound(reference.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn exists(&self, reference: &str) -> Result<bool, FileStoreError> {
        let path = self.blob_path(reference)?;
        Ok(tokio::fs::try_exists(&path).await?)
    }

    async fn delete(&self, reference: &str) -> DeleteOutcome {
        let path = match self.blob_path(reference) {
            Ok(path) => path,
            Err(e) => {
                tracing::error!(reference, error = %e, "Refusing to delete blob");
                return DeleteOutcome::Failed(e.to_string());
            }
        };

        match tokio::fs::remove_file(&path).await {
            Ok(()) => DeleteOutcome::Deleted,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(reference, "Blob already absent on delete");
                DeleteOutcome::NotFound
            }
            Err(e) => {
                tracing::error!(reference, error = %e, "Failed to delete blob");
                DeleteOutcome::Failed(e.to_string())
            }
        }
    }
}
