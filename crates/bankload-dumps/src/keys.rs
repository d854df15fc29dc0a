//! Dump key validation and derivation.

use crate::error::DumpsError;

/// Namespace segment for seed results inside a shared Redis.
const SEEDS_NAMESPACE: &str = "seeds";

/// Checks that `key` is safe to use as a file name and a Redis key segment.
///
/// Keys are scenario names: non-empty, ASCII alphanumerics plus `-`, `_`
/// and `.`, never starting with a dot.
pub fn validate_key(key: &str) -> Result<(), DumpsError> {
    if key.is_empty() || key.starts_with('.') {
        return Err(DumpsError::InvalidKey(
            "Key must not be empty or start with '.'".to_string(),
        ));
    }

    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
    {
        return Err(DumpsError::InvalidKey(format!(
            "Key '{key}' contains invalid characters"
        )));
    }

    Ok(())
}

/// File name of the record for `key`.
pub fn file_name(key: &str) -> String {
    format!("{key}.json")
}

/// Redis key of the record for `key`, e.g. `bankload:seeds:my_scenario`.
pub fn redis_key(prefix: &str, key: &str) -> String {
    format!("{prefix}:{SEEDS_NAMESPACE}:{key}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key_accepts_scenario_names() {
        assert!(validate_key("existing_user_get_operations").is_ok());
        assert!(validate_key("smoke-v2.1").is_ok());
    }

    #[test]
    fn test_validate_key_rejects_path_traversal() {
        assert!(validate_key("../etc/passwd").is_err());
        assert!(validate_key("a/b").is_err());
        assert!(validate_key("..").is_err());
    }

    #[test]
    fn test_validate_key_rejects_empty_and_hidden() {
        assert!(validate_key("").is_err());
        assert!(validate_key(".hidden").is_err());
    }

    #[test]
    fn test_redis_key_is_namespaced() {
        assert_eq!(redis_key("bankload", "s1"), "bankload:seeds:s1");
    }
}
