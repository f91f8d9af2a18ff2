//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in a config value.
///
/// `field` is the dotted config path used in error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env(value)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_env_literal_unchanged() {
        let value = expand_env("https://docs.example.com", "site.url").unwrap();
        assert_eq!(value, "https://docs.example.com");
    }

    #[test]
    fn test_expand_env_uses_default_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DOCNAV_EXPAND_UNSET");
        }

        let value = expand_env("${DOCNAV_EXPAND_UNSET:-/fallback/}", "site.base_url").unwrap();
        assert_eq!(value, "/fallback/");
    }

    #[test]
    fn test_expand_env_missing_var_names_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DOCNAV_EXPAND_MISSING");
        }

        let err = expand_env("${DOCNAV_EXPAND_MISSING}", "site.url").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("DOCNAV_EXPAND_MISSING"));
        assert!(msg.contains("site.url"));
    }
}
