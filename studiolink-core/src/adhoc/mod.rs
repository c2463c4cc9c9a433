//! Ad-hoc workspaces: a file tree posted to the provisioning endpoint.
//!
//! The payload travels as hidden fields of a POST form rather than a
//! programmatic request, so that submitting it navigates the browser (or a
//! new tab) straight into the new workspace:
//!
//! ```text
//! project[files][<percent-encoded path>] = <file text>
//! project[settings]                      = {"baselineEnvironment":"html","referrer":"docs"}
//! ```

mod content;
mod form;
mod launch;
mod page;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web;

pub use content::{AdhocWorkspaceContent, BaselineEnvironment, WorkspaceSettings};
pub use form::{AdhocForm, FormTarget, HiddenField, LaunchOptions, encode_fields};
pub use launch::{DocumentHost, launch_adhoc_workspace, launch_adhoc_workspace_with};
pub use page::render_launch_page;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web::BrowserDocument;
