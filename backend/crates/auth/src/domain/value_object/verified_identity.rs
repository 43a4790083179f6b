//! VerifiedIdentity Value Object
//!
//! The only durable fact taken from a verified token.

use serde::{Deserialize, Serialize};

/// Platform user id proven by a valid signature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerifiedIdentity {
    pub user_id: i64,
}

impl VerifiedIdentity {
    #[inline]
    pub fn new(user_id: i64) -> Self {
        Self { user_id }
    }
}

impl std::fmt::Display for VerifiedIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.user_id)
    }
}
