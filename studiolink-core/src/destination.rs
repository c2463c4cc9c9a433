//! "Open in Firebase Studio" deep-link URLs.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{DEFAULT_BASE_URL, Error, Result};

/// Bytes left unescaped by a browser's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Where an "Open in Firebase Studio" link takes the user.
///
/// Serializes with the JSON shape web callers use:
///
/// ```json
/// { "type": "git", "repoUrl": "github.com/org/repo" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum OpenDestination {
    /// Import a Git repository into a new workspace (a `git clone`).
    Git {
        #[serde(rename = "repoUrl")]
        repo_url: String,
    },
    /// Create a workspace from a registered template, e.g. `gemini`.
    NamedTemplate {
        #[serde(rename = "templateId")]
        template_id: String,
    },
    /// Create a workspace from a public template repository (a repo or
    /// subfolder with an `idx-template.json` file).
    CustomTemplate {
        #[serde(rename = "templateRepoUrl")]
        template_repo_url: String,
    },
    /// Create a prototyper workspace from a natural language prompt.
    PrototypePrompt { prompt: String },
}

impl OpenDestination {
    pub const KINDS: [&'static str; 4] =
        ["git", "named-template", "custom-template", "prototype-prompt"];

    pub fn git(repo_url: impl Into<String>) -> Self {
        Self::Git {
            repo_url: repo_url.into(),
        }
    }

    pub fn named_template(template_id: impl Into<String>) -> Self {
        Self::NamedTemplate {
            template_id: template_id.into(),
        }
    }

    pub fn custom_template(template_repo_url: impl Into<String>) -> Self {
        Self::CustomTemplate {
            template_repo_url: template_repo_url.into(),
        }
    }

    pub fn prototype_prompt(prompt: impl Into<String>) -> Self {
        Self::PrototypePrompt {
            prompt: prompt.into(),
        }
    }

    /// The `type` tag of this destination.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Git { .. } => "git",
            Self::NamedTemplate { .. } => "named-template",
            Self::CustomTemplate { .. } => "custom-template",
            Self::PrototypePrompt { .. } => "prototype-prompt",
        }
    }

    /// Parse a destination from untyped JSON.
    ///
    /// Unlike plain deserialization, an unrecognized `type` tag is reported as
    /// [`Error::UnknownDestinationKind`] carrying the tag.
    pub fn from_json(value: &Value) -> Result<Self> {
        let kind = match value.get("type") {
            Some(Value::String(kind)) => kind.as_str(),
            Some(other) => {
                return Err(Error::UnknownDestinationKind {
                    kind: other.to_string(),
                });
            }
            None => {
                return Err(Error::UnknownDestinationKind {
                    kind: String::new(),
                });
            }
        };

        if !Self::KINDS.contains(&kind) {
            return Err(Error::UnknownDestinationKind {
                kind: kind.to_string(),
            });
        }

        serde_json::from_value(value.clone()).map_err(|source| Error::MalformedDestination {
            kind: kind.to_string(),
            source,
        })
    }
}

/// Returns the URL for a given "Open in Firebase Studio" destination.
///
/// `base_url` defaults to [`DEFAULT_BASE_URL`]; a trailing slash on it is ignored,
/// and a base that is empty once the slash is gone also uses the default.
pub fn resolve_open_url(destination: &OpenDestination, base_url: Option<&str>) -> String {
    let base_url = base_url.unwrap_or_default();
    let base_url = match base_url.strip_suffix('/').unwrap_or(base_url) {
        "" => DEFAULT_BASE_URL,
        url => url,
    };

    match destination {
        OpenDestination::Git { repo_url } => format!(
            "{base_url}/import?url={}",
            encode_uri_component(&normalize_git_url(repo_url))
        ),
        OpenDestination::NamedTemplate { template_id } => format!(
            "{base_url}/new/{}",
            encode_uri_component(template_id.trim())
        ),
        OpenDestination::CustomTemplate { template_repo_url } => format!(
            "{base_url}/new?template={}",
            encode_uri_component(&normalize_git_url(template_repo_url))
        ),
        // Whitespace in a prompt is meaningful, so it is not trimmed.
        OpenDestination::PrototypePrompt { prompt } => format!(
            "{base_url}/?prototypePrompt={}",
            encode_uri_component(prompt)
        ),
    }
}

/// Trim a Git URL and add an `https://` scheme when it has none.
///
/// Blank input stays empty rather than becoming a bare `https://`.
pub fn normalize_git_url(url: &str) -> String {
    let url = url.trim();
    if url.is_empty() {
        return String::new();
    }
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

/// Percent-encode a string the way a browser's `encodeURIComponent` does.
pub fn encode_uri_component(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT).to_string()
}
