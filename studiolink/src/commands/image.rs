use clap::Args;
use eyre::Result;
use studiolink_core::resolve_button_image_url;

use super::args::{ButtonArgs, ConfigArg};

#[derive(Args)]
pub struct ImageCommand {
    #[command(flatten)]
    button: ButtonArgs,

    #[command(flatten)]
    config: ConfigArg,
}

impl ImageCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = self.config.load();
        let image = self.button.merged(manifest.as_ref()).image_config()?;

        println!("{}", resolve_button_image_url(&image));
        Ok(())
    }
}
