use clap::Args;
use eyre::Result;
use studiolink_core::resolve_open_url;

use super::args::{ConfigArg, DestinationArgs, manifest_link};

#[derive(Args)]
pub struct UrlCommand {
    #[command(flatten)]
    destination: DestinationArgs,

    /// Studio base URL (defaults to [link] base_url, then the public Studio)
    #[arg(long)]
    base_url: Option<String>,

    #[command(flatten)]
    config: ConfigArg,
}

impl UrlCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = self.config.load();
        let link = manifest_link(manifest.as_ref());

        let destination = self.destination.resolve(link)?;
        let base_url = self
            .base_url
            .as_deref()
            .or_else(|| link.and_then(|l| l.base_url.as_deref()));

        println!("{}", resolve_open_url(&destination, base_url));
        Ok(())
    }
}
