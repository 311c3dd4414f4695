//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod compare;
pub(crate) mod show;

use std::path::PathBuf;

use clap::Args;
use kb_config::{CliSettings, ConfigError, SiteConfig, Variant, build_config};

pub(crate) use check::CheckArgs;
pub(crate) use compare::CompareArgs;
pub(crate) use show::ShowArgs;

/// Where to read the configuration from.
#[derive(Args, Debug)]
pub(crate) struct SourceArgs {
    /// Path to configuration file (default: auto-discover kb.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Use a built-in variant instead of kb.toml (default: discover kb.toml,
    /// falling back to the primary variant).
    #[arg(long, conflicts_with = "config")]
    variant: Option<Variant>,
}

impl SourceArgs {
    /// Load the selected configuration.
    ///
    /// An explicit `--variant` skips file discovery.
    pub(crate) fn load(&self, settings: Option<&CliSettings>) -> Result<SiteConfig, ConfigError> {
        let Some(variant) = self.variant else {
            return SiteConfig::load(self.config.as_deref(), Variant::default(), settings);
        };
        tracing::debug!(%variant, "Using built-in variant");
        let config = build_config(variant)?;
        match settings {
            Some(settings) => config.with_overrides(settings),
            None => Ok(config),
        }
    }

    /// Describe where a loaded configuration came from.
    pub(crate) fn describe(&self, config: &SiteConfig) -> String {
        match config.source() {
            Some(path) => path.display().to_string(),
            None => format!("built-in {} variant", self.variant.unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use kb_config::CONFIG_FILENAME;
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        source: SourceArgs,
    }

    fn parse(args: &[&str]) -> SourceArgs {
        TestCli::try_parse_from(std::iter::once("kb").chain(args.iter().copied()))
            .unwrap()
            .source
    }

    #[test]
    fn test_explicit_variant_ignores_config_file() {
        let source = parse(&["--variant", "secondary"]);

        let config = source.load(None).unwrap();

        assert!(config.source().is_none());
        assert_eq!(config.sidebar().len(), 3);
        assert_eq!(config.base().as_str(), "/KnowBase");
        assert_eq!(source.describe(&config), "built-in secondary variant");
    }

    #[test]
    fn test_explicit_variant_applies_overrides() {
        let source = parse(&["--variant", "primary"]);
        let settings = CliSettings {
            base: Some("/preview/".to_owned()),
            ..CliSettings::default()
        };

        let config = source.load(Some(&settings)).unwrap();

        assert_eq!(config.base().as_str(), "/preview/");
    }

    #[test]
    fn test_config_file_used_without_variant() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "title = \"Handbook\"\n").unwrap();
        let path_arg = path.display().to_string();
        let source = parse(&["--config", &path_arg]);

        let config = source.load(None).unwrap();

        assert_eq!(config.title(), "Handbook");
        assert_eq!(source.describe(&config), path_arg);
    }

    #[test]
    fn test_variant_conflicts_with_config() {
        let result = TestCli::try_parse_from([
            "kb",
            "--config",
            "kb.toml",
            "--variant",
            "secondary",
        ]);
        assert!(result.is_err());
    }
}
