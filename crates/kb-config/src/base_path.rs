//! URL prefix under which the site is served.

use std::fmt;

use serde::Serialize;

use crate::ConfigError;
use crate::validate::is_absolute_path;

/// Base path prepended to every generated route.
///
/// Always starts with `/`. The literal is kept exactly as written, so
/// `/KnowBase/` and `/KnowBase` stay distinct values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BasePath(String);

impl BasePath {
    /// Validate and wrap a base path literal.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the value is empty, does not
    /// start with `/`, or starts with `//`.
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ConfigError::Validation("base cannot be empty".to_owned()));
        }
        if !value.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "base must start with '/', got {value:?}"
            )));
        }
        if !is_absolute_path(&value) {
            return Err(ConfigError::Validation(format!(
                "base must be a path on this site, not a protocol-relative URL, got {value:?}"
            )));
        }
        Ok(Self(value))
    }

    /// The literal base path.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the literal ends with `/`.
    pub fn has_trailing_slash(&self) -> bool {
        self.0.ends_with('/')
    }

    /// Base path with exactly one trailing slash (`/KnowBase` → `/KnowBase/`).
    pub fn normalized(&self) -> String {
        let trimmed = self.0.trim_end_matches('/');
        format!("{trimmed}/")
    }

    /// True if both paths address the same prefix once trailing slashes are ignored.
    pub fn same_prefix(&self, other: &Self) -> bool {
        self.normalized() == other.normalized()
    }
}

impl Default for BasePath {
    fn default() -> Self {
        Self("/".to_owned())
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BasePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
