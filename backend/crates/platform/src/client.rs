//! Client identification utilities
//!
//! Common functions for reading client-supplied identity material from
//! HTTP headers.

use axum::http::{HeaderMap, header};

/// Header carrying raw Telegram Mini App init data
pub const INIT_DATA_HEADER: &str = "x-telegram-init-data";

/// Authorization scheme used by Telegram Mini Apps
pub const INIT_DATA_AUTH_SCHEME: &str = "tma";

/// Extract the raw init-data token from request headers
///
/// Accepts `Authorization: tma <initData>` first, then the
/// `X-Telegram-Init-Data` header. Blank values count as absent.
///
/// ## Returns
/// The token exactly as sent (still form-urlencoded), or `None`
pub fn extract_init_data(headers: &HeaderMap) -> Option<String> {
    let from_authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| {
            let (scheme, token) = v.trim().split_once(' ')?;
            scheme
                .eq_ignore_ascii_case(INIT_DATA_AUTH_SCHEME)
                .then(|| token.trim())
        });

    from_authorization
        .or_else(|| {
            headers
                .get(INIT_DATA_HEADER)
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
        })
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}
