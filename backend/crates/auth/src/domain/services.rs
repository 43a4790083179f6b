//! Domain Services
//!
//! Pure init-data verification. Nothing here touches I/O or global state,
//! so every function is safe to call from any number of requests at once.
//!
//! Signature scheme (Telegram Mini Apps):
//! ```text
//! secret_key = HMAC_SHA256(key = "WebAppData", msg = bot_token)
//! hash       = hex(HMAC_SHA256(key = secret_key, msg = check_string))
//! ```

use chrono::{DateTime, Utc};
use platform::crypto::{constant_time_eq, hmac_sha256, to_hex};
use serde_json::Value;
use std::time::Duration;
use url::form_urlencoded;

use crate::domain::value_object::init_data::{HASH_FIELD, InitData, USER_FIELD};
use crate::domain::value_object::verified_identity::VerifiedIdentity;
use crate::error::{AuthError, AuthResult};

/// HMAC key used to derive the signing secret from the bot token
pub const WEB_APP_DATA_KEY: &[u8] = b"WebAppData";

/// Derive the 256-bit signing secret from the shared bot token
pub fn derive_secret_key(bot_token: &str) -> [u8; 32] {
    hmac_sha256(WEB_APP_DATA_KEY, bot_token.as_bytes())
}

/// Lowercase hex signature of a canonical check-string
pub fn compute_signature(check_string: &str, bot_token: &str) -> String {
    let secret_key = derive_secret_key(bot_token);
    to_hex(&hmac_sha256(&secret_key, check_string.as_bytes()))
}

/// Check the `hash` of parsed init data against the bot token
pub fn verify_signature(init_data: &InitData, bot_token: &str) -> AuthResult<()> {
    let expected = compute_signature(&init_data.check_string(), bot_token);
    if constant_time_eq(expected.as_bytes(), init_data.hash().as_bytes()) {
        Ok(())
    } else {
        Err(AuthError::InvalidSession)
    }
}

/// Read the user id out of the `user` JSON claim
///
/// A missing claim, non-JSON claim, or non-integer `id` all yield `None`.
pub fn extract_identity(init_data: &InitData) -> Option<VerifiedIdentity> {
    let user: Value = serde_json::from_str(init_data.get(USER_FIELD)?).ok()?;
    user.get("id")?.as_i64().map(VerifiedIdentity::new)
}

/// Reject init data signed longer ago than `max_age`
pub fn check_freshness(
    init_data: &InitData,
    max_age: Duration,
    now: DateTime<Utc>,
) -> AuthResult<()> {
    let auth_date = init_data.auth_date().ok_or(AuthError::InvalidSession)?;
    let max_age_secs = i64::try_from(max_age.as_secs()).unwrap_or(i64::MAX);

    if now.timestamp().saturating_sub(auth_date) > max_age_secs {
        return Err(AuthError::InvalidSession);
    }
    Ok(())
}

/// Verify a raw init-data token
///
/// ## Returns
/// * `Err(InvalidSession)` - malformed token or signature mismatch
/// * `Ok(None)` - valid token without a usable identity claim
/// * `Ok(Some(identity))` - valid token with a user id
pub fn verify_init_data(token: &str, bot_token: &str) -> AuthResult<Option<VerifiedIdentity>> {
    verify_init_data_with(token, bot_token, None)
}

/// `auth_date` window checked after the signature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Freshness {
    pub max_age: Duration,
    pub now: DateTime<Utc>,
}

/// Verification pipeline shared by every caller
///
/// Parse, check the signature, then (when `freshness` is set) the
/// `auth_date` window, then read the identity claim. With `None` this is
/// exactly [`verify_init_data`].
pub fn verify_init_data_with(
    token: &str,
    bot_token: &str,
    freshness: Option<Freshness>,
) -> AuthResult<Option<VerifiedIdentity>> {
    let init_data = InitData::parse(token).ok_or(AuthError::InvalidSession)?;
    verify_signature(&init_data, bot_token)?;

    if let Some(Freshness { max_age, now }) = freshness {
        check_freshness(&init_data, max_age, now)?;
    }

    Ok(extract_identity(&init_data))
}

/// Build a signed init-data token from pairs
///
/// Used by tooling and tests that need to act as the platform.
pub fn sign_init_data(pairs: &[(&str, &str)], bot_token: &str) -> String {
    let mut lines: Vec<String> = pairs.iter().map(|(k, v)| format!("{k}={v}")).collect();
    lines.sort_unstable();
    let hash = compute_signature(&lines.join("\n"), bot_token);

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    serializer.append_pair(HASH_FIELD, &hash);
    serializer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOT_TOKEN: &str = "123456:TEST-TOKEN";

    #[test]
    fn test_known_answer_minimal_token() {
        // hex(HMAC(HMAC("WebAppData", "SECRET"), "a=1\nb=2"))
        let token =
            "a=1&b=2&hash=5053d378a94c2ad96df30a65392054213ccbbab2f199ab2d4ac7f1be92de68ba";

        assert_eq!(verify_init_data(token, "SECRET"), Ok(None));
        assert_eq!(
            verify_init_data(token, "OTHER-SECRET"),
            Err(AuthError::InvalidSession)
        );
    }

    #[test]
    fn test_derived_secret_known_value() {
        assert_eq!(
            hex::encode(derive_secret_key("SECRET")),
            "97ba3ab63ae50b280238fa7c4fdd67376ed24514b8e2cae05900e77d2c485420"
        );
    }

    #[test]
    fn test_known_answer_with_user() {
        let token = "query_id=AAH&user=%7B%22id%22%3A42%2C%22first_name%22%3A%22Ada%22%7D\
                     &auth_date=1700000000\
                     &hash=24fe22dc0bbea902d90e89835cb52100a330fc3f23bf1d02b90688c8e1a9caf2";

        assert_eq!(
            verify_init_data(token, BOT_TOKEN),
            Ok(Some(VerifiedIdentity::new(42)))
        );
    }

    #[test]
    fn test_signed_token_round_trips_identity() {
        for id in [1_i64, 42, 7_000_000_000, -5] {
            let user = format!(r#"{{"id":{id},"username":"u{id}"}}"#);
            let token = sign_init_data(
                &[("auth_date", "1700000000"), ("user", user.as_str())],
                BOT_TOKEN,
            );
            assert_eq!(
                verify_init_data(&token, BOT_TOKEN),
                Ok(Some(VerifiedIdentity::new(id)))
            );
        }
    }

    #[test]
    fn test_flipping_any_hash_character_fails() {
        let token = sign_init_data(&[("user", r#"{"id":7}"#)], BOT_TOKEN);
        let (prefix, hash) = token.rsplit_once("hash=").unwrap();

        for i in 0..hash.len() {
            let mut flipped: Vec<u8> = hash.bytes().collect();
            flipped[i] = if flipped[i] == b'0' { b'1' } else { b'0' };
            let tampered = format!("{prefix}hash={}", String::from_utf8(flipped).unwrap());
            assert_eq!(
                verify_init_data(&tampered, BOT_TOKEN),
                Err(AuthError::InvalidSession),
                "flipped position {i}"
            );
        }
    }

    #[test]
    fn test_pair_order_does_not_matter() {
        let forward = sign_init_data(&[("a", "1"), ("b", "2"), ("c", "3")], BOT_TOKEN);
        let hash = forward.rsplit_once("hash=").unwrap().1;

        let reordered = format!("c=3&hash={hash}&a=1&b=2");
        assert_eq!(verify_init_data(&forward, BOT_TOKEN), Ok(None));
        assert_eq!(verify_init_data(&reordered, BOT_TOKEN), Ok(None));
    }

    #[test]
    fn test_uppercase_hash_is_rejected() {
        let token = sign_init_data(&[("a", "1")], BOT_TOKEN);
        let (prefix, hash) = token.rsplit_once("hash=").unwrap();
        let upper = format!("{prefix}hash={}", hash.to_uppercase());
        assert_eq!(
            verify_init_data(&upper, BOT_TOKEN),
            Err(AuthError::InvalidSession)
        );
    }

    #[test]
    fn test_missing_hash_is_invalid() {
        assert_eq!(
            verify_init_data("user=%7B%22id%22%3A1%7D", BOT_TOKEN),
            Err(AuthError::InvalidSession)
        );
    }

    #[test]
    fn test_unusable_user_claim_is_valid_without_identity() {
        for user in [
            "not json",
            r#"{"name":"no id"}"#,
            r#"{"id":"42"}"#,
            r#"{"id":4.5}"#,
            r#"[1,2,3]"#,
        ] {
            let token = sign_init_data(&[("user", user)], BOT_TOKEN);
            assert_eq!(verify_init_data(&token, BOT_TOKEN), Ok(None), "user={user}");
        }
    }

    #[test]
    fn test_malformed_input_never_panics() {
        for raw in ["", "%%%", "hash", "hash=", "&=&=&", "user=%FF%FE&hash=00"] {
            assert!(matches!(
                verify_init_data(raw, BOT_TOKEN),
                Err(AuthError::InvalidSession) | Ok(None)
            ));
        }
    }

    #[test]
    fn test_check_freshness() {
        let data = InitData::parse("auth_date=1000&hash=x").unwrap();
        let max_age = Duration::from_secs(60);

        let now = DateTime::from_timestamp(1030, 0).unwrap();
        assert_eq!(check_freshness(&data, max_age, now), Ok(()));

        let now = DateTime::from_timestamp(1061, 0).unwrap();
        assert_eq!(
            check_freshness(&data, max_age, now),
            Err(AuthError::InvalidSession)
        );

        let undated = InitData::parse("a=1&hash=x").unwrap();
        assert_eq!(
            check_freshness(&undated, max_age, now),
            Err(AuthError::InvalidSession)
        );
    }

    #[test]
    fn test_freshness_runs_after_signature() {
        let token = sign_init_data(
            &[("auth_date", "1000"), ("user", r#"{"id":3}"#)],
            BOT_TOKEN,
        );
        let window = |now| {
            Some(Freshness {
                max_age: Duration::from_secs(60),
                now: DateTime::from_timestamp(now, 0).unwrap(),
            })
        };

        assert_eq!(
            verify_init_data_with(&token, BOT_TOKEN, window(1030)),
            Ok(Some(VerifiedIdentity::new(3)))
        );
        assert_eq!(
            verify_init_data_with(&token, BOT_TOKEN, window(5000)),
            Err(AuthError::InvalidSession)
        );
        // Forged tokens fail even inside the window
        assert_eq!(
            verify_init_data_with(&token, "other-bot", window(1030)),
            Err(AuthError::InvalidSession)
        );
        assert_eq!(
            verify_init_data_with(&token, BOT_TOKEN, None),
            verify_init_data(&token, BOT_TOKEN)
        );
    }
}
