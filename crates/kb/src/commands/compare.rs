//! `kb compare` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use kb_config::{SiteConfig, Variant, build_config, compare};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the compare command.
#[derive(Args, Debug)]
pub(crate) struct CompareArgs {
    /// Left built-in variant.
    #[arg(long, default_value_t = Variant::Primary)]
    left: Variant,

    /// Right built-in variant.
    #[arg(long, default_value_t = Variant::Secondary)]
    right: Variant,

    /// Config file used instead of the left variant.
    #[arg(long)]
    left_config: Option<PathBuf>,

    /// Config file used instead of the right variant.
    #[arg(long)]
    right_config: Option<PathBuf>,

    /// Fail if any difference is found.
    #[arg(long)]
    strict: bool,
}

impl CompareArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let left = resolve(self.left_config.as_deref(), self.left)?;
        let right = resolve(self.right_config.as_deref(), self.right)?;

        let drifts = compare(&left, &right);
        tracing::info!(drifts = drifts.len(), "Compared site configurations");
        if drifts.is_empty() {
            output.success("Configurations match");
            return Ok(());
        }

        output.highlight(&format!("{} difference(s):", drifts.len()));
        for drift in &drifts {
            output.warning(&format!("  {drift}"));
        }

        if self.strict {
            return Err(CliError::Drift(drifts.len()));
        }
        Ok(())
    }
}

fn resolve(path: Option<&Path>, variant: Variant) -> Result<SiteConfig, CliError> {
    let config = match path {
        Some(path) => SiteConfig::load(Some(path), variant, None)?,
        None => build_config(variant)?,
    };
    Ok(config)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: CompareArgs,
    }

    #[test]
    fn test_defaults_compare_builtin_variants() {
        let cli = TestCli::try_parse_from(["compare"]).unwrap();
        assert_eq!(cli.args.left, Variant::Primary);
        assert_eq!(cli.args.right, Variant::Secondary);
        assert!(!cli.args.strict);
    }

    #[test]
    fn test_strict_fails_on_drift() {
        let cli = TestCli::try_parse_from(["compare", "--strict"]).unwrap();
        let err = cli.args.execute(&Output::new()).unwrap_err();
        assert!(matches!(err, CliError::Drift(2)));
    }

    #[test]
    fn test_same_variant_matches() {
        let cli = TestCli::try_parse_from([
            "compare", "--left", "secondary", "--right", "secondary", "--strict",
        ])
        .unwrap();
        assert!(cli.args.execute(&Output::new()).is_ok());
    }
}
