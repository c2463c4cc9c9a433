//! studio.toml parsing and validation.
//!
//! A studio.toml keeps the link, button and workspace settings for a project
//! so they don't have to be repeated as flags:
//!
//! ```toml
//! [link]
//! destination = { type = "git", repo_url = "github.com/org/repo" }
//!
//! [button]
//! color = "dynamic"
//!
//! [workspace]
//! files = "site"
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod manifest;
mod validate;

pub use error::{Error, Result, SourceContext};
pub use file::StudioToml;
pub use manifest::{ButtonConfig, Link, Manifest, Workspace};
