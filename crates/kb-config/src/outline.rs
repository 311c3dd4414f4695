//! Heading range shown in the per-page outline.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Lowest HTML heading level.
const MIN_LEVEL: u8 = 1;
/// Highest HTML heading level.
const MAX_LEVEL: u8 = 6;

/// Inclusive range of heading levels listed in a page outline.
///
/// Serialized as a `[min, max]` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(into = "[u8; 2]")]
pub struct OutlineConfig {
    min: u8,
    max: u8,
}

impl OutlineConfig {
    /// Every heading from h2 down to h6.
    pub const DEEP: Self = Self { min: 2, max: MAX_LEVEL };

    /// Create an outline range.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if a level is outside `1..=6`
    /// or `min > max`.
    pub fn new(min: u8, max: u8) -> Result<Self, ConfigError> {
        for (name, level) in [("min", min), ("max", max)] {
            if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
                return Err(ConfigError::Validation(format!(
                    "themeConfig.outline {name} level must be between {MIN_LEVEL} and {MAX_LEVEL}, got {level}"
                )));
            }
        }
        if min > max {
            return Err(ConfigError::Validation(format!(
                "themeConfig.outline min level {min} is greater than max level {max}"
            )));
        }
        Ok(Self { min, max })
    }

    /// Outline listing a single heading level.
    pub fn single(level: u8) -> Result<Self, ConfigError> {
        Self::new(level, level)
    }

    /// Shallowest heading level shown.
    pub fn min(self) -> u8 {
        self.min
    }

    /// Deepest heading level shown.
    pub fn max(self) -> u8 {
        self.max
    }

    /// Whether headings of `level` appear in the outline.
    pub fn contains(self, level: u8) -> bool {
        (self.min..=self.max).contains(&level)
    }
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self { min: 2, max: 2 }
    }
}

impl From<OutlineConfig> for [u8; 2] {
    fn from(outline: OutlineConfig) -> Self {
        [outline.min, outline.max]
    }
}

/// Outline value as written in a config file.
///
/// Accepts `[2, 3]`, a single level such as `2`, or the keyword `"deep"`.
/// Levels are kept as `i64` so range errors are reported by [`OutlineRaw::resolve`].
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum OutlineRaw {
    Range(Vec<i64>),
    Level(i64),
    Keyword(String),
}

impl OutlineRaw {
    pub(crate) fn resolve(self) -> Result<OutlineConfig, ConfigError> {
        match self {
            Self::Range(levels) => match levels[..] {
                [min, max] => OutlineConfig::new(level("min", min)?, level("max", max)?),
                _ => Err(ConfigError::Validation(format!(
                    "themeConfig.outline pair must have exactly 2 levels, got {}",
                    levels.len()
                ))),
            },
            Self::Level(value) => OutlineConfig::single(level("min", value)?),
            Self::Keyword(keyword) if keyword == "deep" => Ok(OutlineConfig::DEEP),
            Self::Keyword(keyword) => Err(ConfigError::Validation(format!(
                "themeConfig.outline must be a level, a [min, max] pair or \"deep\", got {keyword:?}"
            ))),
        }
    }
}

fn level(name: &str, value: i64) -> Result<u8, ConfigError> {
    u8::try_from(value)
        .ok()
        .filter(|level| (MIN_LEVEL..=MAX_LEVEL).contains(level))
        .ok_or_else(|| {
            ConfigError::Validation(format!(
                "themeConfig.outline {name} level must be between {MIN_LEVEL} and {MAX_LEVEL}, got {value}"
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        outline: OutlineRaw,
    }

    fn parse(value: &str) -> Result<OutlineConfig, ConfigError> {
        let wrapper: Wrapper = toml::from_str(&format!("outline = {value}")).unwrap();
        wrapper.outline.resolve()
    }

    #[test]
    fn test_new_valid_range() {
        let outline = OutlineConfig::new(2, 3).unwrap();
        assert_eq!(outline.min(), 2);
        assert_eq!(outline.max(), 3);
        assert!(outline.contains(2));
        assert!(outline.contains(3));
        assert!(!outline.contains(4));
    }

    #[test]
    fn test_min_greater_than_max() {
        let err = OutlineConfig::new(3, 2).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("greater than max"));
    }

    #[test]
    fn test_level_out_of_range() {
        assert!(OutlineConfig::new(0, 2).is_err());
        let err = OutlineConfig::new(2, 7).unwrap_err();
        assert!(err.to_string().contains("between 1 and 6"));
    }

    #[test]
    fn test_default_is_h2_only() {
        let outline = OutlineConfig::default();
        assert_eq!((outline.min(), outline.max()), (2, 2));
    }

    #[test]
    fn test_serializes_as_pair() {
        let json = serde_json::to_value(OutlineConfig::new(2, 3).unwrap()).unwrap();
        assert_eq!(json, serde_json::json!([2, 3]));
    }

    #[test]
    fn test_parse_pair() {
        assert_eq!(parse("[2, 3]").unwrap(), OutlineConfig::new(2, 3).unwrap());
    }

    #[test]
    fn test_parse_single_level() {
        assert_eq!(parse("3").unwrap(), OutlineConfig::new(3, 3).unwrap());
    }

    #[test]
    fn test_parse_deep() {
        assert_eq!(parse("\"deep\"").unwrap(), OutlineConfig::DEEP);
    }

    #[test]
    fn test_parse_unknown_keyword() {
        let err = parse("\"shallow\"").unwrap_err();
        assert!(err.to_string().contains("shallow"));
    }

    #[test]
    fn test_parse_level_too_large() {
        let err = parse("[2, 300]").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("max level must be between 1 and 6, got 300"));
    }

    #[test]
    fn test_parse_negative_level() {
        let err = parse("-1").unwrap_err();
        assert!(err.to_string().contains("between 1 and 6, got -1"));
    }

    #[test]
    fn test_parse_pair_wrong_length() {
        let err = parse("[2]").unwrap_err();
        assert!(err.to_string().contains("exactly 2 levels, got 1"));
        assert!(parse("[2, 3, 4]").is_err());
    }

    #[test]
    fn test_parse_reversed_pair() {
        assert!(parse("[4, 2]").is_err());
    }
}
