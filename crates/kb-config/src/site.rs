//! Site configuration schema.
//!
//! [`SiteConfig`] is the value handed to the documentation framework. It can
//! only be obtained through validating constructors and is read-only after
//! that, so every instance upholds the link, outline and base path rules.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::validate::{require_http_url, require_link, require_non_empty};
use crate::{BasePath, CliSettings, ConfigError, OutlineConfig};

/// Site title and description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SiteMetadata {
    /// Page `<title>` and header branding.
    pub title: String,
    /// Page metadata description.
    pub description: String,
}

/// Labelled link in the top navigation bar or a sidebar group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    /// Display label.
    pub text: String,
    /// Absolute path or absolute URL.
    pub link: String,
}

impl NavEntry {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }
}

/// Headed group of links in the sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarGroup {
    /// Group heading.
    pub text: String,
    /// Links in display order.
    #[serde(default)]
    pub items: Vec<NavEntry>,
}

impl SidebarGroup {
    pub fn new(text: impl Into<String>, items: Vec<NavEntry>) -> Self {
        Self {
            text: text.into(),
            items,
        }
    }
}

/// Icon link shown in the site header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Icon name known to the theme (e.g. `github`).
    pub icon: String,
    /// Absolute http(s) URL.
    pub link: String,
}

/// Theme options: navigation, sidebar, outline and social links.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Top navigation bar entries.
    pub nav: Vec<NavEntry>,
    /// Sidebar groups.
    pub sidebar: Vec<SidebarGroup>,
    /// Heading levels listed in the page outline.
    pub outline: OutlineConfig,
    /// Header icon links.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub social_links: Vec<SocialLink>,
}

/// Complete, validated site configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SiteConfig {
    #[serde(flatten)]
    metadata: SiteMetadata,
    base: BasePath,
    #[serde(rename = "themeConfig")]
    theme: ThemeConfig,
    /// File the configuration was loaded from (`None` for built-in variants).
    #[serde(skip)]
    source: Option<PathBuf>,
}

impl SiteConfig {
    /// Build a configuration and validate every field.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` naming the first invalid field.
    pub fn new(
        metadata: SiteMetadata,
        base: BasePath,
        theme: ThemeConfig,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            metadata,
            base,
            theme,
            source: None,
        };
        config.validate()?;
        Ok(config)
    }

    pub(crate) fn with_source(mut self, path: &Path) -> Self {
        self.source = Some(path.to_path_buf());
        self
    }

    /// Validate all fields.
    ///
    /// Base path and outline are checked when their values are constructed,
    /// so this covers metadata and links.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.metadata.title, "title")?;

        for (i, entry) in self.theme.nav.iter().enumerate() {
            validate_entry(entry, &format!("themeConfig.nav[{i}]"))?;
        }

        for (i, group) in self.theme.sidebar.iter().enumerate() {
            let field = format!("themeConfig.sidebar[{i}]");
            require_non_empty(&group.text, &format!("{field}.text"))?;
            for (j, entry) in group.items.iter().enumerate() {
                validate_entry(entry, &format!("{field}.items[{j}]"))?;
            }
        }

        for (i, social) in self.theme.social_links.iter().enumerate() {
            let field = format!("themeConfig.socialLinks[{i}]");
            require_non_empty(&social.icon, &format!("{field}.icon"))?;
            require_non_empty(&social.link, &format!("{field}.link"))?;
            require_http_url(&social.link, &format!("{field}.link"))?;
        }

        Ok(())
    }

    /// Apply CLI overrides and re-validate.
    pub fn with_overrides(mut self, settings: &CliSettings) -> Result<Self, ConfigError> {
        if let Some(title) = &settings.title {
            self.metadata.title.clone_from(title);
        }
        if let Some(base) = &settings.base {
            self.base = BasePath::new(base.as_str())?;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn metadata(&self) -> &SiteMetadata {
        &self.metadata
    }

    pub fn title(&self) -> &str {
        &self.metadata.title
    }

    pub fn description(&self) -> &str {
        &self.metadata.description
    }

    pub fn base(&self) -> &BasePath {
        &self.base
    }

    pub fn theme(&self) -> &ThemeConfig {
        &self.theme
    }

    pub fn nav(&self) -> &[NavEntry] {
        &self.theme.nav
    }

    pub fn sidebar(&self) -> &[SidebarGroup] {
        &self.theme.sidebar
    }

    pub fn outline(&self) -> OutlineConfig {
        self.theme.outline
    }

    pub fn social_links(&self) -> &[SocialLink] {
        &self.theme.social_links
    }

    /// Path of the `kb.toml` this configuration was loaded from.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Every nav and sidebar link in display order (nav first).
    pub fn links(&self) -> impl Iterator<Item = &str> {
        self.theme
            .nav
            .iter()
            .chain(self.theme.sidebar.iter().flat_map(|group| &group.items))
            .map(|entry| entry.link.as_str())
    }

    /// Pretty JSON in the shape the documentation framework consumes.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// TOML document that [`SiteConfig::load`] reads back.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}

fn validate_entry(entry: &NavEntry, field: &str) -> Result<(), ConfigError> {
    require_non_empty(&entry.text, &format!("{field}.text"))?;
    require_link(&entry.link, &format!("{field}.link"))
}
