//! Startup settings read from the environment

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, bail};
use auth::AuthConfig;
use submission::{HttpBlobConfig, SubmissionConfig};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";
const DEFAULT_LOCAL_STORAGE_DIR: &str = "./storage";
const DEFAULT_STORAGE_TIMEOUT_SECS: u64 = 30;

/// Where uploaded documents go
#[derive(Debug, Clone)]
pub enum StorageSettings {
    Http(HttpBlobConfig),
    Fs(PathBuf),
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub frontend_origins: Vec<String>,
    pub auth: AuthConfig,
    pub submission: SubmissionConfig,
    pub storage: StorageSettings,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup; blank values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = get("DATABASE_URL").context("DATABASE_URL must be set")?;

        let bind_addr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR must be a socket address")?;

        let frontend_origins = get("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();

        let mut auth = match get("TELEGRAM_BOT_TOKEN") {
            Some(token) => AuthConfig::with_bot_token(token.trim()),
            None => AuthConfig::development(),
        };
        if let Some(secs) = get("INIT_DATA_MAX_AGE_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .context("INIT_DATA_MAX_AGE_SECS must be a number of seconds")?;
            auth = auth.with_max_auth_age(Duration::from_secs(secs));
        }

        let mut submission = SubmissionConfig::default();
        if let Some(max) = get("MAX_DOCUMENT_BYTES") {
            submission.max_document_bytes = max
                .trim()
                .parse()
                .context("MAX_DOCUMENT_BYTES must be a byte count")?;
        }

        let storage = match get("STORAGE_BACKEND").as_deref().map(str::trim) {
            None | Some("fs") => StorageSettings::Fs(
                get("LOCAL_STORAGE_DIR")
                    .unwrap_or_else(|| DEFAULT_LOCAL_STORAGE_DIR.to_string())
                    .into(),
            ),
            Some("http") => {
                let timeout_secs = match get("STORAGE_TIMEOUT_SECS") {
                    Some(v) => v
                        .trim()
                        .parse()
                        .context("STORAGE_TIMEOUT_SECS must be a number of seconds")?,
                    None => DEFAULT_STORAGE_TIMEOUT_SECS,
                };
                StorageSettings::Http(HttpBlobConfig {
                    base_url: get("STORAGE_URL").context("STORAGE_URL must be set")?,
                    bucket: get("STORAGE_BUCKET").context("STORAGE_BUCKET must be set")?,
                    service_key: get("STORAGE_SERVICE_KEY")
                        .context("STORAGE_SERVICE_KEY must be set")?,
                    timeout: Duration::from_secs(timeout_secs),
                })
            }
            Some(other) => bail!("STORAGE_BACKEND must be `http` or `fs`, got `{other}`"),
        };

        Ok(Self {
            database_url,
            bind_addr,
            frontend_origins,
            auth,
            submission,
            storage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> anyhow::Result<Settings> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let s = settings(&[("DATABASE_URL", "postgres://localhost/app")]).unwrap();

        assert_eq!(s.bind_addr, "0.0.0.0:31113".parse().unwrap());
        assert_eq!(s.frontend_origins.len(), 2);
        assert!(!s.auth.is_configured());
        assert!(s.auth.max_auth_age.is_none());
        assert_eq!(s.submission.max_document_bytes, 25 * 1024 * 1024);
        assert!(matches!(s.storage, StorageSettings::Fs(ref dir) if dir.ends_with("storage")));
    }

    #[test]
    fn test_database_url_required() {
        assert!(settings(&[]).is_err());
        assert!(settings(&[("DATABASE_URL", "  ")]).is_err());
    }

    #[test]
    fn test_auth_settings() {
        let s = settings(&[
            ("DATABASE_URL", "postgres://localhost/app"),
            ("TELEGRAM_BOT_TOKEN", "123456:TOKEN"),
            ("INIT_DATA_MAX_AGE_SECS", "86400"),
        ])
        .unwrap();

        assert!(s.auth.is_configured());
        assert_eq!(s.auth.max_auth_age, Some(Duration::from_secs(86400)));
    }

    #[test]
    fn test_http_storage_requires_credentials() {
        let err = settings(&[
            ("DATABASE_URL", "postgres://localhost/app"),
            ("STORAGE_BACKEND", "http"),
            ("STORAGE_URL", "https://example.supabase.co/storage/v1"),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("STORAGE_BUCKET"));

        let s = settings(&[
            ("DATABASE_URL", "postgres://localhost/app"),
            ("STORAGE_BACKEND", "http"),
            ("STORAGE_URL", "https://example.supabase.co/storage/v1"),
            ("STORAGE_BUCKET", "applications"),
            ("STORAGE_SERVICE_KEY", "key"),
        ])
        .unwrap();
        match s.storage {
            StorageSettings::Http(config) => {
                assert_eq!(config.bucket, "applications");
                assert_eq!(config.timeout, Duration::from_secs(30));
            }
            StorageSettings::Fs(_) => panic!("expected http storage"),
        }
    }

    #[test]
    fn test_unknown_storage_backend() {
        assert!(
            settings(&[
                ("DATABASE_URL", "postgres://localhost/app"),
                ("STORAGE_BACKEND", "s3"),
            ])
            .is_err()
        );
    }
}
