//! Infrastructure Layer
//!
//! Concrete adapters for the record store and the blob store.

pub mod fs_blob;
pub mod http_blob;
pub mod postgres;

pub use fs_blob::FsBlobStore;
pub use http_blob::{HttpBlobConfig, HttpBlobStore};
pub use postgres::PgSubmissionRepository;

use crate::domain::repository::BlobStore;
use crate::error::SubmissionResult;

/// Blob store chosen at startup
#[derive(Debug, Clone)]
pub enum ConfiguredBlobStore {
    Http(HttpBlobStore),
    Fs(FsBlobStore),
}

impl BlobStore for ConfiguredBlobStore {
    async fn upload(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> SubmissionResult<String> {
        match self {
            ConfiguredBlobStore::Http(store) => store.upload(path, bytes, content_type).await,
            ConfiguredBlobStore::Fs(store) => store.upload(path, bytes, content_type).await,
        }
    }
}

impl From<HttpBlobStore> for ConfiguredBlobStore {
    fn from(store: HttpBlobStore) -> Self {
        ConfiguredBlobStore::Http(store)
    }
}

impl From<FsBlobStore> for ConfiguredBlobStore {
    fn from(store: FsBlobStore) -> Self {
        ConfiguredBlobStore::Fs(store)
    }
}
