//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::lookup::{LookupOutput, SubmissionView};
use crate::domain::entities::Submission;

/// A submission as returned to its owner
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub first_name: String,
    pub last_name: String,
    pub university: String,
    pub program: &'static str,
    pub document_path: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SubmissionView> for SubmissionResponse {
    fn from(view: SubmissionView) -> Self {
        Self {
            first_name: view.first_name,
            last_name: view.last_name,
            university: view.university,
            program: view.program.as_str(),
            document_path: view.document_path,
            created_at: view.created_at,
            updated_at: view.updated_at,
        }
    }
}

impl From<&Submission> for SubmissionResponse {
    fn from(submission: &Submission) -> Self {
        SubmissionView::from(submission).into()
    }
}

/// Response for GET /api/application
#[derive(Debug, Clone, Serialize)]
pub struct LookupResponse {
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission: Option<SubmissionResponse>,
}

impl From<LookupOutput> for LookupResponse {
    fn from(output: LookupOutput) -> Self {
        Self {
            exists: output.exists,
            submission: output.submission.map(SubmissionResponse::from),
        }
    }
}
