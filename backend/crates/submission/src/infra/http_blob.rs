//! HTTP object-storage client
//!
//! Talks to a Supabase-storage-compatible REST endpoint:
//! `POST {base_url}/object/{bucket}/{path}` with a bearer service key.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

use crate::domain::repository::BlobStore;
use crate::error::{SubmissionError, SubmissionResult};

/// Connection settings for [`HttpBlobStore`]
#[derive(Clone)]
pub struct HttpBlobConfig {
    /// Storage API root, e.g. `https://<project>.supabase.co/storage/v1`
    pub base_url: String,
    pub bucket: String,
    pub service_key: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for HttpBlobConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpBlobConfig")
            .field("base_url", &self.base_url)
            .field("bucket", &self.bucket)
            .field("service_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Blob store backed by an object-storage HTTP API
#[derive(Debug, Clone)]
pub struct HttpBlobStore {
    client: Client,
    config: HttpBlobConfig,
}

impl HttpBlobStore {
    pub fn new(config: HttpBlobConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    fn object_url(&self, path: &str) -> String {
        format!(
            "{}/object/{}/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.bucket,
            path.trim_start_matches('/')
        )
    }
}

impl BlobStore for HttpBlobStore {
    async fn upload(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> SubmissionResult<String> {
        let size = bytes.len();
        let response = self
            .client
            .post(self.object_url(path))
            .header(AUTHORIZATION, format!("Bearer {}", self.config.service_key))
            .header(CONTENT_TYPE, content_type)
            .header("x-upsert", "false")
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SubmissionError::StorageUnavailable(format!(
                "object storage returned {status}: {body}"
            )));
        }

        tracing::debug!(document_path = %path, bytes = size, "Document uploaded");

        Ok(path.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(base_url: &str) -> HttpBlobStore {
        HttpBlobStore::new(HttpBlobConfig {
            base_url: base_url.to_string(),
            bucket: "applications".to_string(),
            service_key: "service-key".to_string(),
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    #[test]
    fn test_object_url() {
        let store = store("https://example.supabase.co/storage/v1/");
        assert_eq!(
            store.object_url("documents/1-abc-a.zip"),
            "https://example.supabase.co/storage/v1/object/applications/documents/1-abc-a.zip"
        );
    }

    #[test]
    fn test_debug_redacts_service_key() {
        let store = store("http://localhost");
        let debug = format!("{:?}", store.config);
        assert!(!debug.contains("service-key"));
    }
}
