//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in a string.
///
/// Unset variables without a default are an error naming `field`.
/// Bare `$VAR` is left as written.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, LookupError> {
        std::env::var(var).map(Some).map_err(|_| LookupError {
            var_name: var.to_owned(),
        })
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{0}}} not set", e.cause.var_name),
    })
}

struct LookupError {
    var_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("KB_TEST_SITE_NAME", "Handbook");
        }
        let result = expand_env("${KB_TEST_SITE_NAME}", "title").unwrap();
        assert_eq!(result, "Handbook");
        unsafe {
            std::env::remove_var("KB_TEST_SITE_NAME");
        }
    }

    #[test]
    fn test_expand_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("KB_TEST_UNSET_BASE");
        }
        let result = expand_env("${KB_TEST_UNSET_BASE:-/KnowBase/}", "base").unwrap();
        assert_eq!(result, "/KnowBase/");
    }

    #[test]
    fn test_expand_embedded() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("KB_TEST_BRANCH", "preview");
        }
        let result = expand_env("/KnowBase/${KB_TEST_BRANCH}/", "base").unwrap();
        assert_eq!(result, "/KnowBase/preview/");
        unsafe {
            std::env::remove_var("KB_TEST_BRANCH");
        }
    }

    #[test]
    fn test_missing_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("KB_TEST_MISSING");
        }
        let err = expand_env("${KB_TEST_MISSING}", "description").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("KB_TEST_MISSING"));
        assert!(err.to_string().contains("description"));
    }

    #[test]
    fn test_literal_unchanged() {
        assert_eq!(
            expand_env("Sosse's Knowledge Base", "title").unwrap(),
            "Sosse's Knowledge Base"
        );
    }

    #[test]
    fn test_bare_dollar_not_expanded() {
        assert_eq!(expand_env("Costs $5", "description").unwrap(), "Costs $5");
    }
}
