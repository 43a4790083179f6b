//! Auth Error Types
//!
//! Auth-specific error variants. Callers map them into their own error
//! type; the `kind()` classification matches the unified
//! `kernel::error::kind::ErrorKind` system.

use kernel::error::kind::ErrorKind;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
///
/// Verification failures are a single variant: callers must not learn
/// which step of the check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Token malformed, unsigned, signed with another secret, or stale
    #[error("Session is invalid")]
    InvalidSession,

    /// No bot token configured, so no token can be verified
    #[error("Platform authentication is not configured")]
    NotConfigured,
}

impl AuthError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidSession | AuthError::NotConfigured => ErrorKind::Unauthorized,
        }
    }
}
