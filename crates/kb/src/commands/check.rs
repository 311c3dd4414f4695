//! `kb check` command implementation.

use clap::Args;
use kb_config::SiteConfig;

use super::SourceArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    source: SourceArgs,
}

impl CheckArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let config = self.source.load(None)?;

        output.highlight(config.title());
        output.info(&format!("Source: {}", self.source.describe(&config)));
        for line in summary(&config) {
            output.info(&line);
        }
        if !config.base().has_trailing_slash() {
            output.warning(&format!(
                "Base {:?} has no trailing slash",
                config.base().as_str()
            ));
        }
        output.success("Configuration is valid");
        Ok(())
    }
}

/// Summary lines for a validated configuration.
fn summary(config: &SiteConfig) -> Vec<String> {
    let items: usize = config.sidebar().iter().map(|g| g.items.len()).sum();
    let outline = config.outline();
    vec![
        format!("Base: {}", config.base()),
        format!("Nav entries: {}", config.nav().len()),
        format!(
            "Sidebar: {} group(s), {items} item(s)",
            config.sidebar().len()
        ),
        format!("Outline: h{}-h{}", outline.min(), outline.max()),
        format!("Links: {}", config.links().count()),
    ]
}
