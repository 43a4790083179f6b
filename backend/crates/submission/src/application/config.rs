//! Application Configuration
//!
//! Configuration for the submission application layer.

/// Submission application configuration
#[derive(Debug, Clone)]
pub struct SubmissionConfig {
    /// Largest accepted document, in bytes
    pub max_document_bytes: usize,
    /// Prefix prepended to every generated storage key
    pub storage_prefix: String,
    /// Content type used when the client sends none
    pub default_content_type: String,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            max_document_bytes: 25 * 1024 * 1024,
            storage_prefix: "documents/".to_string(),
            default_content_type: "application/zip".to_string(),
        }
    }
}

impl SubmissionConfig {
    /// Body limit for multipart requests: the document plus room for the
    /// text fields and multipart framing
    pub fn request_body_limit(&self) -> usize {
        self.max_document_bytes.saturating_add(64 * 1024)
    }
}
