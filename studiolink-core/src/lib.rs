//! Deep links, button assets and ad-hoc workspace forms for Firebase Studio.
//!
//! The crate has three independent pieces:
//!
//! - [`destination`] - builds "Open in Firebase Studio" deep-link URLs
//! - [`button`] - CDN URLs for branded button images and HTML snippets embedding them
//! - [`adhoc`] - encodes a file tree into a hidden POST form that provisions a workspace
//!
//! Everything except [`launch_adhoc_workspace`] is a pure function of its input.
//!
//! # Example
//!
//! ```
//! use studiolink_core::{OpenDestination, resolve_open_url};
//!
//! let url = resolve_open_url(&OpenDestination::git("github.com/org/repo"), None);
//! assert_eq!(
//!     url,
//!     "https://studio.firebase.google.com/import?url=https%3A%2F%2Fgithub.com%2Forg%2Frepo"
//! );
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod adhoc;
pub mod button;
pub mod destination;
mod error;
pub mod markup;

pub use adhoc::{
    AdhocForm, AdhocWorkspaceContent, BaselineEnvironment, DocumentHost, FormTarget,
    HiddenField, LaunchOptions, WorkspaceSettings, encode_fields, launch_adhoc_workspace,
    launch_adhoc_workspace_with, render_launch_page,
};
pub use button::{
    ButtonColor, ButtonHtmlColor, ButtonHtmlConfig, ButtonImageConfig, ButtonLabel, ButtonSize,
    ImageFormat, alt_text_for, resolve_button_html, resolve_button_image_url,
    resolve_button_markdown,
};
pub use destination::{OpenDestination, encode_uri_component, normalize_git_url, resolve_open_url};
pub use error::{Error, Result};

/// Default base URL for "Open in Firebase Studio" links.
pub const DEFAULT_BASE_URL: &str = "https://studio.firebase.google.com";

/// Default endpoint that provisions ad-hoc workspaces.
pub const DEFAULT_LAUNCH_URL: &str = "https://studio.firebase.google.com/run.api";

/// Root of the CDN serving button images.
pub const BUTTON_CDN_URL: &str = "https://cdn.firebasestudio.dev/btn/";
