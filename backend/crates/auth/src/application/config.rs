//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

/// Auth application configuration
#[derive(Clone, Default)]
pub struct AuthConfig {
    /// Bot token shared with the platform; `None` disables platform auth
    pub bot_token: Option<String>,
    /// Maximum age of `auth_date`; `None` skips the freshness check
    pub max_auth_age: Option<Duration>,
}

impl AuthConfig {
    /// Config that verifies tokens against `bot_token`
    pub fn with_bot_token(bot_token: impl Into<String>) -> Self {
        Self {
            bot_token: Some(bot_token.into()),
            ..Default::default()
        }
    }

    /// Create config for development (platform auth disabled)
    pub fn development() -> Self {
        Self::default()
    }

    /// Builder: require `auth_date` to be at most `max_age` old
    pub fn with_max_auth_age(mut self, max_age: Duration) -> Self {
        self.max_auth_age = Some(max_age);
        self
    }

    pub fn is_configured(&self) -> bool {
        self.bot_token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

// The bot token must never end up in logs.
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("bot_token", &self.bot_token.as_ref().map(|_| "<redacted>"))
            .field("max_auth_age", &self.max_auth_age)
            .finish()
    }
}
