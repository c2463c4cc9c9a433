use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The starting point a new workspace builds on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaselineEnvironment {
    Flutter,
    Stitch,
    Html,
    React,
    Angular,
    Python,
}

impl BaselineEnvironment {
    pub const ALL: [BaselineEnvironment; 6] = [
        Self::Flutter,
        Self::Stitch,
        Self::Html,
        Self::React,
        Self::Angular,
        Self::Python,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flutter => "flutter",
            Self::Stitch => "stitch",
            Self::Html => "html",
            Self::React => "react",
            Self::Angular => "angular",
            Self::Python => "python",
        }
    }
}

impl fmt::Display for BaselineEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Matches the lowercase names exactly, like deserialization does.
impl FromStr for BaselineEnvironment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|env| env.as_str() == s)
            .ok_or_else(|| Error::UnknownBaselineEnvironment {
                value: s.to_string(),
            })
    }
}

/// Optional workspace configuration, sent as `project[settings]`.
///
/// Absent values are left out of the payload entirely rather than sent as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSettings {
    /// The starting point to build on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_environment: Option<BaselineEnvironment>,
    /// The source of the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
}

impl WorkspaceSettings {
    pub fn with_baseline_environment(mut self, env: BaselineEnvironment) -> Self {
        self.baseline_environment = Some(env);
        self
    }

    pub fn with_referrer(mut self, referrer: impl Into<String>) -> Self {
        self.referrer = Some(referrer.into());
        self
    }

    /// Compact JSON with only the recognized keys.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|source| Error::Settings { source })
    }
}

/// The files and settings for a new ad-hoc workspace.
///
/// Paths are relative (e.g. `src/index.html`). Contents are text; binary
/// files aren't supported. For best effect include a `.idx/dev.nix` file
/// describing the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdhocWorkspaceContent {
    pub files: IndexMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<WorkspaceSettings>,
}

impl AdhocWorkspaceContent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, replacing any earlier file with the same path.
    pub fn with_file(mut self, path: impl Into<String>, contents: impl Into<String>) -> Self {
        self.files.insert(path.into(), contents.into());
        self
    }

    pub fn with_settings(mut self, settings: WorkspaceSettings) -> Self {
        self.settings = Some(settings);
        self
    }
}

impl<P, C> FromIterator<(P, C)> for AdhocWorkspaceContent
where
    P: Into<String>,
    C: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (P, C)>>(iter: I) -> Self {
        Self {
            files: iter
                .into_iter()
                .map(|(path, contents)| (path.into(), contents.into()))
                .collect(),
            settings: None,
        }
    }
}
