//! Session Token Extractor
//!
//! Pulls the raw init-data token out of request headers. Verification is
//! left to the use case, which decides whether a token is optional.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

/// Raw, unverified init-data token from `Authorization: tma ...` or
/// `X-Telegram-Init-Data`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionToken(pub Option<String>);

impl SessionToken {
    pub fn into_inner(self) -> Option<String> {
        self.0
    }

    /// Prefer the header token, fall back to `other`
    pub fn or(self, other: Option<String>) -> Option<String> {
        self.0.or(other)
    }
}

impl<S> FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(SessionToken(platform::client::extract_init_data(&parts.headers)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    #[tokio::test]
    async fn test_extracts_header_token() {
        let (mut parts, _) = Request::builder()
            .header("authorization", "tma a=1&hash=ff")
            .body(())
            .unwrap()
            .into_parts();

        let token = SessionToken::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(token, SessionToken(Some("a=1&hash=ff".to_string())));
    }

    #[tokio::test]
    async fn test_missing_token_falls_back() {
        let (mut parts, _) = Request::builder().body(()).unwrap().into_parts();

        let token = SessionToken::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(token.or(Some("form".to_string())), Some("form".to_string()));
    }
}
