//! Manifest types for studio.toml files.

use std::{path::PathBuf, str::FromStr};

use serde::Deserialize;
use studiolink_core::{
    BaselineEnvironment, ButtonHtmlColor, ButtonHtmlConfig, ButtonImageConfig, ButtonLabel,
    ButtonSize, Error as CoreError, ImageFormat, LaunchOptions, OpenDestination,
    WorkspaceSettings,
};
use toml::Spanned;

use crate::{Result, error::SourceContext, validate};

/// A validated studio.toml.
///
/// Every table is optional; commands fill in what's missing from flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    /// `[link]`: where buttons and links point.
    pub link: Option<Link>,
    /// `[button]`: button appearance.
    pub button: ButtonConfig,
    /// `[workspace]`: files for an ad-hoc workspace.
    pub workspace: Option<Workspace>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub base_url: Option<String>,
    pub destination: OpenDestination,
}

/// Button appearance. Unset fields use the library defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ButtonConfig {
    pub label: Option<ButtonLabel>,
    pub color: Option<ButtonHtmlColor>,
    pub size: Option<ButtonSize>,
    pub format: Option<ImageFormat>,
}

impl ButtonConfig {
    /// Image config for a single published image.
    ///
    /// Dynamic colors only exist as HTML snippets, not as images.
    pub fn image_config(&self) -> studiolink_core::Result<ButtonImageConfig> {
        let color = match self.color.unwrap_or_default() {
            ButtonHtmlColor::Static(color) => color,
            dynamic => return Err(CoreError::invalid_button("color", dynamic.as_str())),
        };
        Ok(ButtonImageConfig {
            label: self.label.unwrap_or_default(),
            color,
            size: self.size.unwrap_or_default(),
            format: self.format.unwrap_or_default(),
        })
    }

    /// Snippet config linking to `destination`.
    pub fn html_config(&self, destination: OpenDestination) -> ButtonHtmlConfig {
        ButtonHtmlConfig {
            destination,
            base_url: None,
            label: self.label.unwrap_or_default(),
            color: self.color.unwrap_or_default(),
            size: self.size.unwrap_or_default(),
            format: self.format.unwrap_or_default(),
        }
    }

    /// Overlay `other`'s set fields on top of this config.
    pub fn merge(self, other: ButtonConfig) -> ButtonConfig {
        ButtonConfig {
            label: other.label.or(self.label),
            color: other.color.or(self.color),
            size: other.size.or(self.size),
            format: other.format.or(self.format),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    /// Directory holding the workspace files, relative to the manifest.
    pub files: PathBuf,
    pub endpoint: Option<String>,
    pub new_window: bool,
    /// File or directory names skipped while collecting files.
    pub exclude: Vec<String>,
    pub settings: Option<WorkspaceSettings>,
}

impl Workspace {
    pub fn launch_options(&self) -> LaunchOptions {
        LaunchOptions {
            url: self.endpoint.clone(),
            new_window: self.new_window,
        }
    }
}

impl FromStr for Manifest {
    type Err = Box<crate::Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "studio.toml")
    }
}

impl Manifest {
    /// Parse a studio.toml from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let raw: RawManifest = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
        raw.lower(&ctx)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawManifest {
    #[serde(default)]
    link: Option<RawLink>,
    #[serde(default)]
    button: ButtonConfig,
    #[serde(default)]
    workspace: Option<RawWorkspace>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawLink {
    base_url: Option<Spanned<String>>,
    destination: Spanned<RawDestination>,
}

/// `destination = { type = "...", ... }`, checked field by field so errors
/// can point at the offending value.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawDestination {
    #[serde(rename = "type")]
    pub(crate) kind: Spanned<String>,
    pub(crate) repo_url: Option<Spanned<String>>,
    pub(crate) template_id: Option<Spanned<String>>,
    pub(crate) template_repo_url: Option<Spanned<String>>,
    pub(crate) prompt: Option<Spanned<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawWorkspace {
    files: Spanned<String>,
    endpoint: Option<Spanned<String>>,
    #[serde(default = "default_new_window")]
    new_window: bool,
    #[serde(default)]
    exclude: Vec<String>,
    settings: Option<RawSettings>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawSettings {
    baseline_environment: Option<BaselineEnvironment>,
    referrer: Option<String>,
}

fn default_new_window() -> bool {
    true
}

impl RawManifest {
    fn lower(self, ctx: &SourceContext) -> Result<Manifest> {
        let link = self.link.map(|link| link.lower(ctx)).transpose()?;
        let workspace = self.workspace.map(|ws| ws.lower(ctx)).transpose()?;
        Ok(Manifest {
            link,
            button: self.button,
            workspace,
        })
    }
}

impl RawLink {
    fn lower(self, ctx: &SourceContext) -> Result<Link> {
        let base_url = self
            .base_url
            .map(|url| validate::http_url(ctx, "base_url", &url))
            .transpose()?;
        let destination = validate::destination(ctx, &self.destination)?;
        Ok(Link {
            base_url,
            destination,
        })
    }
}

impl RawWorkspace {
    fn lower(self, ctx: &SourceContext) -> Result<Workspace> {
        let files = validate::non_blank(ctx, "files", &self.files)?;
        let endpoint = self
            .endpoint
            .map(|url| validate::http_url(ctx, "endpoint", &url))
            .transpose()?;
        let settings = self.settings.map(|s| WorkspaceSettings {
            baseline_environment: s.baseline_environment,
            referrer: s.referrer,
        });
        Ok(Workspace {
            files: PathBuf::from(files),
            endpoint,
            new_window: self.new_window,
            exclude: self.exclude,
            settings,
        })
    }
}
