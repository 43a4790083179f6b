//! Verify Session Use Case
//!
//! Applies the configured bot token (and optional freshness window) to a
//! raw init-data token.

use std::sync::Arc;

use chrono::Utc;

use crate::application::config::AuthConfig;
use crate::domain::services::{Freshness, verify_init_data_with};
use crate::domain::value_object::verified_identity::VerifiedIdentity;
use crate::error::{AuthError, AuthResult};

/// Session verifier shared by every route that accepts init data
#[derive(Debug, Clone)]
pub struct SessionVerifier {
    config: Arc<AuthConfig>,
}

impl SessionVerifier {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// Whether a bot token is available to verify against
    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    /// Verify a raw token
    ///
    /// ## Returns
    /// * `Err(NotConfigured)` - no bot token configured
    /// * `Err(InvalidSession)` - forged, malformed, or stale token
    /// * `Ok(None)` - valid token without a usable identity
    /// * `Ok(Some(identity))` - valid token with a user id
    pub fn verify(&self, token: &str) -> AuthResult<Option<VerifiedIdentity>> {
        let bot_token = self
            .config
            .bot_token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::NotConfigured)?;

        let freshness = self.config.max_auth_age.map(|max_age| Freshness {
            max_age,
            now: Utc::now(),
        });

        let identity = verify_init_data_with(token, bot_token, freshness)?;
        if identity.is_none() {
            tracing::debug!("Init data verified without an identity claim");
        }
        Ok(identity)
    }
}
