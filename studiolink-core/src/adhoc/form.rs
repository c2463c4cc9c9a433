use tracing::debug;

use super::AdhocWorkspaceContent;
use crate::{DEFAULT_LAUNCH_URL, Result, encode_uri_component};

/// One hidden `<input>` of the launch form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiddenField {
    pub name: String,
    pub value: String,
}

impl HiddenField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Encode workspace content as form fields: one per file in order, then
/// `project[settings]` if settings are present.
pub fn encode_fields(content: &AdhocWorkspaceContent) -> Result<Vec<HiddenField>> {
    let mut fields: Vec<HiddenField> = content
        .files
        .iter()
        .map(|(path, contents)| {
            HiddenField::new(
                format!("project[files][{}]", encode_uri_component(path)),
                contents.as_str(),
            )
        })
        .collect();

    if let Some(settings) = &content.settings {
        fields.push(HiddenField::new("project[settings]", settings.to_json()?));
    }

    Ok(fields)
}

/// Browsing context the form is submitted into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormTarget {
    /// A new tab or window.
    #[default]
    Blank,
    /// The current tab.
    SameTab,
}

impl FormTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blank => "_blank",
            Self::SameTab => "_self",
        }
    }
}

/// Options for launching a new ad-hoc workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOptions {
    /// Override the provisioning endpoint.
    pub url: Option<String>,
    /// Open Firebase Studio in a new browser tab/window.
    pub new_window: bool,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            url: None,
            new_window: true,
        }
    }
}

impl LaunchOptions {
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn same_tab(mut self) -> Self {
        self.new_window = false;
        self
    }
}

/// A fully computed launch form, ready to hand to a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdhocForm {
    pub action: String,
    pub target: FormTarget,
    pub fields: Vec<HiddenField>,
}

impl AdhocForm {
    pub const METHOD: &'static str = "post";
    pub const STYLE: &'static str = "display:none !important;";

    pub fn build(content: &AdhocWorkspaceContent, options: &LaunchOptions) -> Result<Self> {
        let fields = encode_fields(content)?;
        let action = match options.url.as_deref() {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => DEFAULT_LAUNCH_URL.to_string(),
        };
        let target = if options.new_window {
            FormTarget::Blank
        } else {
            FormTarget::SameTab
        };

        debug!(
            action = %action,
            target = target.as_str(),
            fields = fields.len(),
            "built ad-hoc workspace form"
        );

        Ok(Self {
            action,
            target,
            fields,
        })
    }
}
