use clap::Args;
use eyre::Result;
use studiolink_core::{ButtonHtmlConfig, resolve_button_html, resolve_button_markdown};
use studiolink_manifest::StudioToml;

use super::args::{ButtonArgs, ConfigArg, DestinationArgs, manifest_link};

#[derive(Args)]
pub struct HtmlCommand {
    #[command(flatten)]
    destination: DestinationArgs,

    /// Studio base URL for the link (defaults to [link] base_url, then the public Studio)
    #[arg(long)]
    base_url: Option<String>,

    #[command(flatten)]
    button: ButtonArgs,

    /// Print a Markdown badge instead of HTML
    #[arg(long)]
    markdown: bool,

    #[command(flatten)]
    config: ConfigArg,
}

impl HtmlCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = self.config.load();
        let config = self.button_config(manifest.as_ref())?;

        if self.markdown {
            println!("{}", resolve_button_markdown(&config));
        } else {
            println!("{}", resolve_button_html(&config));
        }
        Ok(())
    }

    /// Flags laid over the manifest's `[link]` and `[button]`.
    fn button_config(&self, manifest: Option<&StudioToml>) -> Result<ButtonHtmlConfig> {
        let link = manifest_link(manifest);
        let destination = self.destination.resolve(link)?;

        let mut config = self.button.merged(manifest).html_config(destination);
        config.base_url = self
            .base_url
            .clone()
            .or_else(|| link.and_then(|l| l.base_url.clone()));
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::Parser;
    use tempfile::TempDir;

    use super::*;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        html: HtmlCommand,
    }

    fn parse(args: &[&str]) -> HtmlCommand {
        Harness::try_parse_from(std::iter::once("html").chain(args.iter().copied()))
            .unwrap()
            .html
    }

    fn studio_toml(temp: &TempDir) -> StudioToml {
        let path = temp.path().join("studio.toml");
        fs::write(
            &path,
            "[link]\nbase_url = \"https://studio.example.dev\"\n\
             destination = { type = \"named-template\", template_id = \"gemini\" }\n",
        )
        .unwrap();
        StudioToml::open(&path).unwrap()
    }

    #[test]
    fn test_manifest_base_url_used() {
        let temp = TempDir::new().unwrap();
        let file = studio_toml(&temp);

        let config = parse(&[]).button_config(Some(&file)).unwrap();
        assert!(
            resolve_button_html(&config)
                .starts_with(r#"<a href="https://studio.example.dev/new/gemini">"#)
        );
    }

    #[test]
    fn test_base_url_flag_overrides_manifest() {
        let temp = TempDir::new().unwrap();
        let file = studio_toml(&temp);

        let config = parse(&["--base-url", "https://other.dev"])
            .button_config(Some(&file))
            .unwrap();
        assert_eq!(config.base_url.as_deref(), Some("https://other.dev"));
    }

    #[test]
    fn test_default_base_url_without_manifest() {
        let config = parse(&["--git", "github.com/a/b"]).button_config(None).unwrap();
        assert_eq!(config.base_url, None);
        assert!(resolve_button_html(&config).contains("https://studio.firebase.google.com/import"));
    }
}
