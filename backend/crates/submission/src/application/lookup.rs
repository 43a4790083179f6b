//! Lookup Submission Use Case

use std::sync::Arc;

use auth::SessionVerifier;
use chrono::{DateTime, Utc};

use crate::application::identity::non_blank;
use crate::domain::entities::Submission;
use crate::domain::repository::SubmissionRepository;
use crate::domain::value_objects::Program;
use crate::error::SubmissionResult;

/// Submission as shown back to its owner (no identity key, no row id)
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionView {
    pub first_name: String,
    pub last_name: String,
    pub university: String,
    pub program: Program,
    pub document_path: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Submission> for SubmissionView {
    fn from(submission: &Submission) -> Self {
        Self {
            first_name: submission.fields.first_name.clone(),
            last_name: submission.fields.last_name.clone(),
            university: submission.fields.university.clone(),
            program: submission.fields.program,
            document_path: submission.document_path.clone(),
            created_at: submission.created_at,
            updated_at: submission.updated_at,
        }
    }
}

/// Output DTO for lookup
#[derive(Debug, Clone, PartialEq)]
pub struct LookupOutput {
    pub exists: bool,
    pub submission: Option<SubmissionView>,
}

impl LookupOutput {
    fn nothing() -> Self {
        Self {
            exists: false,
            submission: None,
        }
    }
}

/// Lookup Submission Use Case
pub struct LookupSubmissionUseCase<R>
where
    R: SubmissionRepository,
{
    repo: Arc<R>,
    verifier: SessionVerifier,
}

impl<R> LookupSubmissionUseCase<R>
where
    R: SubmissionRepository,
{
    pub fn new(repo: Arc<R>, verifier: SessionVerifier) -> Self {
        Self { repo, verifier }
    }

    /// Find the caller's submission
    ///
    /// Anything that prevents resolving an identity (no token, auth not
    /// configured, bad token, no identity claim) yields `exists: false`.
    /// Only a record store failure is an error.
    pub async fn execute(&self, token: Option<String>) -> SubmissionResult<LookupOutput> {
        let Some(token) = non_blank(token) else {
            return Ok(LookupOutput::nothing());
        };
        if !self.verifier.is_configured() {
            return Ok(LookupOutput::nothing());
        }

        let identity = match self.verifier.verify(&token) {
            Ok(Some(identity)) => identity,
            Ok(None) | Err(_) => return Ok(LookupOutput::nothing()),
        };

        // Store failures propagate; `exists: false` means a confirmed miss
        let found = self.repo.find_by_identity(identity.user_id).await?;

        tracing::debug!(
            identity_key = identity.user_id,
            exists = found.is_some(),
            "Submission lookup"
        );

        Ok(LookupOutput {
            exists: found.is_some(),
            submission: found.as_ref().map(SubmissionView::from),
        })
    }
}
