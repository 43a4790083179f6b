//! Repository Traits
//!
//! Interfaces for the two external collaborators. Implementations are in
//! the infrastructure layer.

use crate::domain::entities::Submission;
use crate::error::SubmissionResult;
use kernel::id::SubmissionId;

/// Submission record store, keyed by identity
#[trait_variant::make(SubmissionRepository: Send)]
pub trait LocalSubmissionRepository {
    /// Find the submission owned by `identity_key`
    async fn find_by_identity(&self, identity_key: i64) -> SubmissionResult<Option<Submission>>;

    /// Insert a new submission
    ///
    /// Must fail with `DuplicateSubmission` when the store's uniqueness
    /// constraint on `identity_key` rejects the row.
    async fn insert(&self, submission: &Submission) -> SubmissionResult<SubmissionId>;

    /// Overwrite the mutable fields of the row owned by `identity_key`
    ///
    /// Fails with `NotFound` when no row matched.
    async fn update_by_identity(
        &self,
        identity_key: i64,
        submission: &Submission,
    ) -> SubmissionResult<()>;
}

/// Path-addressed blob store
#[trait_variant::make(BlobStore: Send)]
pub trait LocalBlobStore {
    /// Store `bytes` at a fresh `path` (never overwrites)
    ///
    /// Returns the stored path. Failures surface as `StorageUnavailable`.
    async fn upload(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> SubmissionResult<String>;
}
