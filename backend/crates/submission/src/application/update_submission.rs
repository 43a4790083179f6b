//! Update Submission Use Case

use std::sync::Arc;

use auth::SessionVerifier;

use crate::application::config::SubmissionConfig;
use crate::application::identity::{non_blank, require_identity};
use crate::domain::entities::Submission;
use crate::domain::repository::{BlobStore, SubmissionRepository};
use crate::domain::services::generate_storage_path;
use crate::domain::value_objects::{ApplicantFields, DocumentUpload, RawApplicantFields};
use crate::error::{SubmissionError, SubmissionResult};

/// Input DTO for update
#[derive(Debug, Clone, Default)]
pub struct UpdateSubmissionInput {
    pub fields: RawApplicantFields,
    /// Replacement document; `None` or empty keeps the stored one
    pub document: Option<DocumentUpload>,
    pub token: Option<String>,
}

/// Update Submission Use Case
pub struct UpdateSubmissionUseCase<R, B>
where
    R: SubmissionRepository,
    B: BlobStore,
{
    repo: Arc<R>,
    blobs: Arc<B>,
    verifier: SessionVerifier,
    config: Arc<SubmissionConfig>,
}

impl<R, B> UpdateSubmissionUseCase<R, B>
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

    pub async fn execute(&self, input: UpdateSubmissionInput) -> SubmissionResult<Submission> {
        let token = non_blank(input.token).ok_or(SubmissionError::SessionRequired)?;
        if !self.verifier.is_configured() {
            return Err(SubmissionError::SessionRequired);
        }
        let identity = require_identity(&self.verifier, &token)?;

        let fields = ApplicantFields::validate(input.fields)?;
        let document = input.document.filter(|d| !d.is_empty());
        if let Some(doc) = &document {
            if doc.len() > self.config.max_document_bytes {
                return Err(SubmissionError::DocumentTooLarge {
                    limit: self.config.max_document_bytes,
                });
            }
        }

        let mut submission = self
            .repo
            .find_by_identity(identity.user_id)
            .await?
            .ok_or(SubmissionError::NotFound)?;

        let new_path = match document {
            Some(doc) => {
                let path =
                    generate_storage_path(&self.config.storage_prefix, doc.file_name.as_deref());
                let content_type = doc
                    .content_type
                    .as_deref()
                    .filter(|c| !c.is_empty())
                    .unwrap_or(&self.config.default_content_type)
                    .to_string();
                Some(self.blobs.upload(&path, doc.bytes, &content_type).await?)
            }
            None => None,
        };

        let previous_path = submission.document_path.clone();
        let replaced = new_path.is_some();
        submission.revise(fields, new_path);

        if let Err(e) = self
            .repo
            .update_by_identity(identity.user_id, &submission)
            .await
        {
            if replaced {
                tracing::warn!(
                    document_path = ?submission.document_path,
                    identity_key = identity.user_id,
                    error = %e,
                    "Submission update failed, uploaded document orphaned"
                );
            }
            return Err(e);
        }

        if replaced {
            tracing::info!(
                identity_key = identity.user_id,
                previous_path = ?previous_path,
                document_path = ?submission.document_path,
                "Submission document replaced"
            );
        }
        tracing::info!(
            submission_id = %submission.id,
            identity_key = identity.user_id,
            "Submission updated"
        );

        Ok(submission)
    }
}
