//! Domain Services
//!
//! Storage key naming for uploaded documents.

use chrono::Utc;
use platform::crypto::{random_bytes, to_hex};

/// Used when the client sends no usable file name
pub const FALLBACK_FILE_NAME: &str = "document";

const RANDOM_SUFFIX_BYTES: usize = 6;

/// Replace every character outside `[A-Za-z0-9.-]` with `_`
///
/// The result cannot contain path separators, so it is safe to use as
/// the last segment of a storage key.
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Storage key `<prefix><timestamp_ms>-<suffix>-<sanitized name>`
pub fn storage_path(
    prefix: &str,
    file_name: Option<&str>,
    timestamp_ms: i64,
    suffix: &str,
) -> String {
    let name = file_name
        .map(sanitize_file_name)
        .filter(|n| !n.is_empty() && n.chars().any(|c| c != '.'))
        .unwrap_or_else(|| FALLBACK_FILE_NAME.to_string());

    format!("{prefix}{timestamp_ms}-{suffix}-{name}")
}

/// Fresh, collision-resistant storage key for an upload
pub fn generate_storage_path(prefix: &str, file_name: Option<&str>) -> String {
    let suffix = to_hex(&random_bytes(RANDOM_SUFFIX_BYTES));
    storage_path(prefix, file_name, Utc::now().timestamp_millis(), &suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_example() {
        assert_eq!(
            sanitize_file_name("My Report (v2)!.zip"),
            "My_Report__v2__.zip"
        );
    }

    #[test]
    fn test_sanitize_blocks_traversal() {
        assert_eq!(sanitize_file_name("../../etc/passwd"), ".._.._etc_passwd");
        assert_eq!(sanitize_file_name("a\\b/c"), "a_b_c");
        assert!(!sanitize_file_name("x/../y").contains('/'));
    }

    #[test]
    fn test_sanitize_non_ascii_is_one_underscore_per_char() {
        assert_eq!(sanitize_file_name("résumé.zip"), "r_sum_.zip");
    }

    #[test]
    fn test_storage_path_layout() {
        assert_eq!(
            storage_path("documents/", Some("thesis.zip"), 1700000000000, "abc123"),
            "documents/1700000000000-abc123-thesis.zip"
        );
    }

    #[test]
    fn test_storage_path_falls_back_for_unusable_names() {
        for name in [None, Some(""), Some("."), Some("..")] {
            assert_eq!(
                storage_path("p/", name, 1, "s"),
                "p/1-s-document",
                "name={name:?}"
            );
        }
    }

    #[test]
    fn test_generated_paths_are_unique() {
        let a = generate_storage_path("documents/", Some("a.zip"));
        let b = generate_storage_path("documents/", Some("a.zip"));
        assert_ne!(a, b);
        assert!(a.starts_with("documents/"));
        assert!(a.ends_with("-a.zip"));
    }
}
