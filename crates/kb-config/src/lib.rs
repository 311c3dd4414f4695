//! Site configuration for the knowledge base documentation site.
//!
//! Produces a validated, read-only [`SiteConfig`]: site metadata, top
//! navigation, sidebar groups, page outline depth and base path. The value
//! is exported as JSON or TOML for the static-site framework that renders
//! the site.
//!
//! Configurations come from one of:
//! - a `kb.toml` file, given explicitly or discovered in the current
//!   directory and its parents,
//! - a built-in [`Variant`] via [`build_config`].
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! `title`, `description` and `base` support:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

mod base_path;
mod builtin;
mod drift;
mod expand;
mod outline;
mod raw;
mod site;
mod validate;

use std::path::{Path, PathBuf};

pub use base_path::BasePath;
pub use builtin::{Variant, build_config};
pub use drift::{Drift, Side, compare};
pub use outline::OutlineConfig;
pub use site::{NavEntry, SidebarGroup, SiteConfig, SiteMetadata, SocialLink, ThemeConfig};

use raw::SiteConfigRaw;

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "kb.toml";

/// CLI settings that override configuration values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override site title.
    pub title: Option<String>,
    /// Override base path.
    pub base: Option<String>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// JSON or TOML serialization error.
    #[error("Serialization error: {0}")]
    Serialize(String),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`base`").
        field: String,
        /// Error message (e.g., "${`KB_BASE`} not set").
        message: String,
    },
}

impl SiteConfig {
    /// Load configuration with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `kb.toml` in the current directory and parents, and falls back to
    /// the built-in `fallback` variant when none is found.
    ///
    /// CLI settings are applied last and the result is validated again.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        fallback: Variant,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| discover_config(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!(variant = %fallback, "No {CONFIG_FILENAME} found, using built-in");
            build_config(fallback)?
        };

        match cli_settings {
            Some(settings) => config.with_overrides(settings),
            None => Ok(config),
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let raw: SiteConfigRaw = toml::from_str(&content)?;
        let config = raw.resolve()?.with_source(path);

        tracing::info!(
            path = %path.display(),
            nav = config.nav().len(),
            sidebar = config.sidebar().len(),
            "Loaded site configuration"
        );
        Ok(config)
    }
}

/// Search for `kb.toml` in `start` and its parents.
pub fn discover_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILENAME);
        if candidate.exists() {
            tracing::debug!(path = %candidate.display(), "Discovered config file");
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}
