//! Configuration as parsed from `kb.toml`, before expansion and validation.

use serde::Deserialize;

use crate::expand::expand_env;
use crate::outline::OutlineRaw;
use crate::{
    BasePath, ConfigError, NavEntry, OutlineConfig, SidebarGroup, SiteConfig, SiteMetadata,
    SocialLink, ThemeConfig,
};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct SiteConfigRaw {
    title: String,
    description: String,
    base: Option<String>,
    #[serde(rename = "themeConfig")]
    theme: ThemeConfigRaw,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ThemeConfigRaw {
    nav: Vec<NavEntry>,
    sidebar: Vec<SidebarGroup>,
    outline: Option<OutlineRaw>,
    social_links: Vec<SocialLink>,
    /// Some configurations declare the base path inside the theme section.
    base: Option<String>,
}

impl SiteConfigRaw {
    /// Expand environment variables, then build a validated [`SiteConfig`].
    pub(crate) fn resolve(self) -> Result<SiteConfig, ConfigError> {
        let metadata = SiteMetadata {
            title: expand_env(&self.title, "title")?,
            description: expand_env(&self.description, "description")?,
        };

        let base = self.base.as_deref().map(|b| expand_env(b, "base")).transpose()?;
        let theme_base = self
            .theme
            .base
            .as_deref()
            .map(|b| expand_env(b, "themeConfig.base"))
            .transpose()?;
        let base = match (base, theme_base) {
            (Some(top), Some(theme)) if top != theme => {
                return Err(ConfigError::Validation(format!(
                    "base {top:?} and themeConfig.base {theme:?} disagree"
                )));
            }
            (Some(base), _) | (None, Some(base)) => BasePath::new(base)?,
            (None, None) => BasePath::default(),
        };

        let outline = match self.theme.outline {
            Some(raw) => raw.resolve()?,
            None => OutlineConfig::default(),
        };

        let theme = ThemeConfig {
            nav: self.theme.nav,
            sidebar: self.theme.sidebar,
            outline,
            social_links: self.theme.social_links,
        };

        SiteConfig::new(metadata, base, theme)
    }
}
