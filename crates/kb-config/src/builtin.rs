//! Built-in site configurations.
//!
//! Two variants of the knowledge base configuration exist. They share
//! metadata and navigation but differ in base path formatting and in the
//! sidebar: the secondary variant adds a Q&A group. Both are kept literally;
//! see [`crate::compare`] for reporting the differences.

use std::fmt;
use std::str::FromStr;

use crate::{
    BasePath, ConfigError, NavEntry, OutlineConfig, SidebarGroup, SiteConfig, SiteMetadata,
    ThemeConfig,
};

const TITLE: &str = "Sosse's Knowledge Base";
const DESCRIPTION: &str = "A knowledge base for frontend development";

/// Which built-in configuration to build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    /// Two sidebar groups, base `/KnowBase/`.
    #[default]
    Primary,
    /// Three sidebar groups including Q&A, base `/KnowBase`.
    Secondary,
}

impl Variant {
    pub const ALL: [Self; 2] = [Self::Primary, Self::Secondary];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                ConfigError::Validation(format!(
                    "unknown variant {s:?}, expected one of: primary, secondary"
                ))
            })
    }
}

/// Build and validate a built-in configuration.
///
/// # Errors
///
/// Returns `ConfigError::Validation` if the literals break an invariant.
pub fn build_config(variant: Variant) -> Result<SiteConfig, ConfigError> {
    let metadata = SiteMetadata {
        title: TITLE.to_owned(),
        description: DESCRIPTION.to_owned(),
    };

    let mut sidebar = vec![
        SidebarGroup::new(
            "前端开发规范",
            vec![
                NavEntry::new("HTML规范", "/markdown-examples"),
                NavEntry::new("CSS规范", "/api-examples"),
            ],
        ),
        SidebarGroup::new(
            "接口文档规范",
            vec![
                NavEntry::new("概述", "/components/interface/intro"),
                NavEntry::new("文档规范", "/components/interface/base"),
            ],
        ),
    ];

    let base = match variant {
        Variant::Primary => "/KnowBase/",
        Variant::Secondary => {
            sidebar.push(SidebarGroup::new(
                "Q&A",
                vec![NavEntry::new("常见问题", "/components/qa/faq")],
            ));
            "/KnowBase"
        }
    };

    let theme = ThemeConfig {
        nav: vec![
            NavEntry::new("开发规范", "/"),
            NavEntry::new("接口文档规范", "/components/interface/base"),
        ],
        sidebar,
        outline: OutlineConfig::new(2, 3)?,
        social_links: Vec::new(),
    };

    tracing::debug!(%variant, "Building built-in site configuration");
    SiteConfig::new(metadata, BasePath::new(base)?, theme)
}
