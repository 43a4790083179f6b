//! InitData Value Object
//!
//! Parsed form of the query-string payload a Telegram Mini App hands to
//! the backend. Parsing never fails except for a missing `hash`.
//!
//! ## Usage
//! ```rust
//! use auth::domain::value_object::init_data::InitData;
//!
//! let data = InitData::parse("b=2&a=1&hash=ff").unwrap();
//! assert_eq!(data.hash(), "ff");
//! assert_eq!(data.check_string(), "a=1\nb=2");
//! ```

use url::form_urlencoded;

/// Field holding the signature
pub const HASH_FIELD: &str = "hash";
/// Field holding the JSON user claim
pub const USER_FIELD: &str = "user";
/// Field holding the signing time in unix seconds
pub const AUTH_DATE_FIELD: &str = "auth_date";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitData {
    /// Every decoded pair except `hash`, in transport order (duplicates kept)
    pairs: Vec<(String, String)>,
    hash: String,
}

impl InitData {
    /// Parse a raw form-urlencoded token
    ///
    /// The first `hash` pair is the signature; all `hash` pairs are
    /// excluded from the signed data. Returns `None` when there is none.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut hash = None;
        let mut pairs = Vec::new();

        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            if key == HASH_FIELD {
                hash.get_or_insert_with(|| value.into_owned());
            } else {
                pairs.push((key.into_owned(), value.into_owned()));
            }
        }

        Some(Self { pairs, hash: hash? })
    }

    #[inline]
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// First value for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Canonical message: `key=value` lines sorted byte-wise, joined by `\n`
    pub fn check_string(&self) -> String {
        let mut lines: Vec<String> = self
            .pairs
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        lines.sort_unstable();
        lines.join("\n")
    }

    /// `auth_date` as unix seconds, if present and numeric
    pub fn auth_date(&self) -> Option<i64> {
        self.get(AUTH_DATE_FIELD)?.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_requires_hash() {
        assert!(InitData::parse("a=1&b=2").is_none());
        assert!(InitData::parse("").is_none());
    }

    #[test]
    fn test_hash_excluded_from_check_string() {
        let data = InitData::parse("hash=abc&a=1").unwrap();
        assert_eq!(data.hash(), "abc");
        assert_eq!(data.check_string(), "a=1");
    }

    #[test]
    fn test_first_hash_wins_and_all_are_excluded() {
        let data = InitData::parse("hash=first&a=1&hash=second").unwrap();
        assert_eq!(data.hash(), "first");
        assert_eq!(data.check_string(), "a=1");
    }

    #[test]
    fn test_check_string_sorted_and_keeps_duplicates() {
        let data = InitData::parse("b=2&a=9&a=1&hash=x").unwrap();
        assert_eq!(data.check_string(), "a=1\na=9\nb=2");
    }

    #[test]
    fn test_values_are_percent_decoded() {
        let data = InitData::parse("user=%7B%22id%22%3A42%7D&hash=x").unwrap();
        assert_eq!(data.get(USER_FIELD), Some(r#"{"id":42}"#));
        assert_eq!(data.check_string(), r#"user={"id":42}"#);
    }

    #[test]
    fn test_auth_date() {
        let data = InitData::parse("auth_date=1700000000&hash=x").unwrap();
        assert_eq!(data.auth_date(), Some(1_700_000_000));

        let data = InitData::parse("auth_date=yesterday&hash=x").unwrap();
        assert_eq!(data.auth_date(), None);
    }

    #[test]
    fn test_garbage_input_does_not_panic() {
        for raw in ["%", "&&&", "=&=", "hash", "%ZZ=1&hash=%", "\u{0}=\u{1}"] {
            let _ = InitData::parse(raw);
        }
        // A bare key parses as an empty value
        assert_eq!(InitData::parse("hash").unwrap().hash(), "");
    }
}
