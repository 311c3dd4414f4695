//! `kb show` command implementation.

use clap::{Args, ValueEnum};
use kb_config::CliSettings;

use super::SourceArgs;
use crate::error::CliError;
use crate::output::Output;

/// Output format for the exported configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    #[default]
    Json,
    Toml,
}

/// Arguments for the show command.
#[derive(Args, Debug)]
pub(crate) struct ShowArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Site title (overrides config).
    #[arg(long)]
    title: Option<String>,

    /// Base path (overrides config).
    #[arg(long, env = "KB_BASE")]
    base: Option<String>,
}

impl ShowArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let settings = CliSettings {
            title: self.title,
            base: self.base,
        };
        let config = self.source.load(Some(&settings))?;

        let document = match self.format {
            Format::Json => config.to_json()?,
            Format::Toml => config.to_toml()?,
        };
        output.document(&document)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: ShowArgs,
    }

    #[test]
    fn test_defaults() {
        let cli = TestCli::try_parse_from(["show"]).unwrap();
        assert_eq!(cli.args.format, Format::Json);
        assert!(cli.args.source.variant.is_none());
        assert!(cli.args.source.config.is_none());
        assert!(cli.args.title.is_none());
    }

    #[test]
    fn test_toml_format_and_overrides() {
        let cli = TestCli::try_parse_from([
            "show",
            "--format",
            "toml",
            "--variant",
            "secondary",
            "--title",
            "Preview",
            "--base",
            "/preview/",
        ])
        .unwrap();
        assert_eq!(cli.args.format, Format::Toml);
        assert_eq!(cli.args.source.variant, Some(kb_config::Variant::Secondary));
        assert_eq!(cli.args.title.as_deref(), Some("Preview"));
        assert_eq!(cli.args.base.as_deref(), Some("/preview/"));
    }

    #[test]
    fn test_unknown_variant_rejected() {
        assert!(TestCli::try_parse_from(["show", "--variant", "tertiary"]).is_err());
    }
}
