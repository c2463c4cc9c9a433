//! Arguments shared by several commands.

use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Result, bail};
use studiolink_core::{ButtonHtmlColor, ButtonLabel, ButtonSize, ImageFormat, OpenDestination};
use studiolink_manifest::{ButtonConfig, Link, StudioToml};

use super::UnwrapOrExit;

pub(crate) const DEFAULT_CONFIG: &str = "studio.toml";

#[derive(Args)]
pub struct ConfigArg {
    /// Path to studio.toml (defaults to ./studio.toml when it exists)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl ConfigArg {
    pub fn path(&self) -> &Path {
        self.config
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_CONFIG))
    }

    /// Load the manifest. An explicit `--config` must exist; the default may not.
    pub fn load(&self) -> Option<StudioToml> {
        match &self.config {
            Some(path) => Some(StudioToml::open(path).unwrap_or_exit()),
            None => StudioToml::open_optional(DEFAULT_CONFIG).unwrap_or_exit(),
        }
    }
}

#[derive(Args)]
#[group(multiple = false)]
pub struct DestinationArgs {
    /// Import a Git repository
    #[arg(long, value_name = "REPO_URL")]
    pub git: Option<String>,

    /// Start from a named template, e.g. `gemini`
    #[arg(long, value_name = "ID")]
    pub template: Option<String>,

    /// Start from a template repository
    #[arg(long, value_name = "REPO_URL")]
    pub custom_template: Option<String>,

    /// Start a prototyper workspace from a prompt
    #[arg(long)]
    pub prompt: Option<String>,
}

impl DestinationArgs {
    fn from_flags(&self) -> Option<OpenDestination> {
        if let Some(url) = &self.git {
            return Some(OpenDestination::git(url));
        }
        if let Some(id) = &self.template {
            return Some(OpenDestination::named_template(id));
        }
        if let Some(url) = &self.custom_template {
            return Some(OpenDestination::custom_template(url));
        }
        self.prompt.as_ref().map(OpenDestination::prototype_prompt)
    }

    /// The destination from flags, falling back to `[link] destination`.
    pub fn resolve(&self, link: Option<&Link>) -> Result<OpenDestination> {
        if let Some(destination) = self.from_flags() {
            return Ok(destination);
        }
        match link {
            Some(link) => Ok(link.destination.clone()),
            None => bail!(
                "no destination given; pass --git, --template, --custom-template or --prompt, \
                 or set [link] destination in {DEFAULT_CONFIG}"
            ),
        }
    }
}

#[derive(Args)]
pub struct ButtonArgs {
    /// Button text: open, try, export, continue
    #[arg(long)]
    pub label: Option<ButtonLabel>,

    /// Button color: dark, light, blue, bright (dynamic, dynamic-reverse for HTML)
    #[arg(long)]
    pub color: Option<ButtonHtmlColor>,

    /// Button height in pixels: 20 or 32
    #[arg(long)]
    pub size: Option<ButtonSize>,

    /// Image format: svg or png
    #[arg(long)]
    pub format: Option<ImageFormat>,
}

impl ButtonArgs {
    /// Overlay the flags on `[button]` from the manifest.
    pub fn merged(&self, manifest: Option<&StudioToml>) -> ButtonConfig {
        let base = manifest
            .map(|m| m.manifest().button)
            .unwrap_or_default();
        base.merge(ButtonConfig {
            label: self.label,
            color: self.color,
            size: self.size,
            format: self.format,
        })
    }
}

/// `[link]` of a loaded manifest, if any.
pub fn manifest_link(manifest: Option<&StudioToml>) -> Option<&Link> {
    manifest.and_then(|m| m.manifest().link.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_flags() -> DestinationArgs {
        DestinationArgs {
            git: None,
            template: None,
            custom_template: None,
            prompt: None,
        }
    }

    #[test]
    fn test_flag_overrides_manifest() {
        let args = DestinationArgs {
            template: Some("gemini".to_string()),
            ..no_flags()
        };
        let link = Link {
            base_url: None,
            destination: OpenDestination::git("github.com/org/repo"),
        };
        assert_eq!(
            args.resolve(Some(&link)).unwrap(),
            OpenDestination::named_template("gemini")
        );
    }

    #[test]
    fn test_manifest_destination_fallback() {
        let link = Link {
            base_url: None,
            destination: OpenDestination::prototype_prompt("a todo app"),
        };
        assert_eq!(
            no_flags().resolve(Some(&link)).unwrap(),
            OpenDestination::prototype_prompt("a todo app")
        );
    }

    #[test]
    fn test_missing_destination() {
        let err = no_flags().resolve(None).unwrap_err();
        assert!(err.to_string().contains("no destination given"));
    }

    #[test]
    fn test_button_flags_override() {
        let args = ButtonArgs {
            label: None,
            color: None,
            size: Some(ButtonSize::Small),
            format: None,
        };
        let merged = args.merged(None);
        assert_eq!(merged.size, Some(ButtonSize::Small));
        assert_eq!(merged.label, None);
    }

    #[test]
    fn test_default_config_path() {
        let arg = ConfigArg { config: None };
        assert_eq!(arg.path(), Path::new("studio.toml"));
    }
}
