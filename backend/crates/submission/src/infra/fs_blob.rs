//! Local filesystem blob store

use std::path::{Component, Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::domain::repository::BlobStore;
use crate::error::{SubmissionError, SubmissionResult};

/// Blob store writing under a root directory
///
/// Files are created with `create_new`, so an existing path is never
/// overwritten.
#[derive(Debug, Clone)]
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> SubmissionResult<PathBuf> {
        let relative = Path::new(path);
        let safe = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
        if !safe || path.is_empty() {
            return Err(SubmissionError::StorageUnavailable(format!(
                "refusing to store outside the blob root: {path:?}"
            )));
        }
        Ok(self.root.join(relative))
    }
}

impl BlobStore for FsBlobStore {
    async fn upload(
        &self,
        path: &str,
        bytes: Vec<u8>,
        _content_type: &str,
    ) -> SubmissionResult<String> {
        let target = self.resolve(path)?;
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).await?;
        }

        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&target)
            .await?;
        file.write_all(&bytes).await?;
        file.flush().await?;

        tracing::debug!(document_path = %path, bytes = bytes.len(), "Document written");

        Ok(path.to_string())
    }
}
