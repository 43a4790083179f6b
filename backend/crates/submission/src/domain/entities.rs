//! Domain Entities
//!
//! Core business entities for the submission domain.

use chrono::{DateTime, Utc};
use kernel::id::SubmissionId;

use crate::domain::value_objects::ApplicantFields;

/// Submission entity - one application package
///
/// At most one row exists per non-null `identity_key`. Anonymous rows
/// (`identity_key == None`) are unconstrained.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub id: SubmissionId,
    pub identity_key: Option<i64>,
    pub fields: ApplicantFields,
    pub document_path: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Submission {
    /// Create a new submission
    pub fn new(
        identity_key: Option<i64>,
        fields: ApplicantFields,
        document_path: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: SubmissionId::new(),
            identity_key,
            fields,
            document_path,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the mutable fields; `None` keeps the current document
    pub fn revise(&mut self, fields: ApplicantFields, document_path: Option<String>) {
        self.fields = fields;
        if let Some(path) = document_path {
            self.document_path = Some(path);
        }
        self.updated_at = Utc::now();
    }

    pub fn is_anonymous(&self) -> bool {
        self.identity_key.is_none()
    }
}
