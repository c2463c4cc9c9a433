use clap::Args;
use eyre::Result;
use studiolink_manifest::StudioToml;

use super::{UnwrapOrExit, args::ConfigArg};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    config: ConfigArg,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let studio_toml = StudioToml::open(self.config.path()).unwrap_or_exit();

        let report = ops::check(&studio_toml);
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
