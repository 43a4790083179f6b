//! Identity resolution shared by the use cases

use auth::{SessionVerifier, VerifiedIdentity};

use crate::error::{SubmissionError, SubmissionResult};

/// Verify `token` and require an identity claim
pub(crate) fn require_identity(
    verifier: &SessionVerifier,
    token: &str,
) -> SubmissionResult<VerifiedIdentity> {
    verifier
        .verify(token)?
        .ok_or(SubmissionError::UnresolvedIdentity)
}

/// Treat blank tokens as absent
pub(crate) fn non_blank(token: Option<String>) -> Option<String> {
    token.filter(|t| !t.trim().is_empty())
}
