//! Create Submission Use Case

use std::sync::Arc;

use auth::SessionVerifier;

use crate::application::config::SubmissionConfig;
use crate::application::identity::{non_blank, require_identity};
use crate::domain::entities::Submission;
use crate::domain::repository::{BlobStore, SubmissionRepository};
use crate::domain::services::generate_storage_path;
use crate::domain::value_objects::{ApplicantFields, DocumentUpload, RawApplicantFields};
use crate::error::{SubmissionError, SubmissionResult};

/// Input DTO for create
#[derive(Debug, Clone, Default)]
pub struct CreateSubmissionInput {
    pub fields: RawApplicantFields,
    pub document: Option<DocumentUpload>,
    /// Raw init data; `None` submits anonymously
    pub token: Option<String>,
}

/// Create Submission Use Case
pub struct CreateSubmissionUseCase<R, B>
where
    R: SubmissionRepository,
    B: BlobStore,
{
    repo: Arc<R>,
    blobs: Arc<B>,
    verifier: SessionVerifier,
    config: Arc<SubmissionConfig>,
}

impl<R, B> CreateSubmissionUseCase<R, B>
where
    R: SubmissionRepository,
    B: BlobStore,
{
    pub fn new(
        repo: Arc<R>,
        blobs: Arc<B>,
        verifier: SessionVerifier,
        config: Arc<SubmissionConfig>,
    ) -> Self {
        Self {
            repo,
            blobs,
            verifier,
            config,
        }
    }

    pub async fn execute(&self, input: CreateSubmissionInput) -> SubmissionResult<Submission> {
        let fields = ApplicantFields::validate(input.fields)?;
        let document = input
            .document
            .filter(|d| !d.is_empty())
            .ok_or(SubmissionError::MissingFields("document"))?;
        if document.len() > self.config.max_document_bytes {
            return Err(SubmissionError::DocumentTooLarge {
                limit: self.config.max_document_bytes,
            });
        }

        let identity_key = match non_blank(input.token) {
            None => None,
            Some(_) if !self.verifier.is_configured() => {
                tracing::warn!(
                    "Init data supplied but platform auth is not configured, creating anonymously"
                );
                None
            }
            Some(token) => Some(require_identity(&self.verifier, &token)?.user_id),
        };

        // Best-effort pre-check; the store's unique constraint is authoritative
        if let Some(key) = identity_key {
            if self.repo.find_by_identity(key).await?.is_some() {
                return Err(SubmissionError::DuplicateSubmission);
            }
        }

        let path =
            generate_storage_path(&self.config.storage_prefix, document.file_name.as_deref());
        let content_type = document
            .content_type
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(&self.config.default_content_type)
            .to_string();
        let size = document.len();

        let stored_path = self
            .blobs
            .upload(&path, document.bytes, &content_type)
            .await?;

        let submission = Submission::new(identity_key, fields, Some(stored_path.clone()));

        if let Err(e) = self.repo.insert(&submission).await {
            // No rollback: the blob is left for out-of-band cleanup
            tracing::warn!(
                document_path = %stored_path,
                identity_key = ?identity_key,
                error = %e,
                "Submission insert failed, uploaded document orphaned"
            );
            return Err(e);
        }

        tracing::info!(
            submission_id = %submission.id,
            identity_key = ?identity_key,
            document_path = %stored_path,
            document_bytes = size,
            "Submission created"
        );

        Ok(submission)
    }
}
