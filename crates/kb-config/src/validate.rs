//! Field-level validation helpers.

use crate::ConfigError;

/// Require a string field to be non-empty.
pub(crate) fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
pub(crate) fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !is_http_url(url) {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

/// Require a link to be an absolute path or an absolute http(s) URL.
pub(crate) fn require_link(link: &str, field: &str) -> Result<(), ConfigError> {
    require_non_empty(link, field)?;
    if !is_absolute_path(link) && !is_http_url(link) {
        return Err(ConfigError::Validation(format!(
            "{field} must be an absolute path or an http(s) URL, got {link:?}"
        )));
    }
    Ok(())
}

/// Path on this site: starts with `/` but is not a protocol-relative `//host` URL.
pub(crate) fn is_absolute_path(value: &str) -> bool {
    value.starts_with('/') && !value.starts_with("//")
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
