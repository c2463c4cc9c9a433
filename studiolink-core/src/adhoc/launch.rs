use tracing::{debug, trace};

use super::{AdhocForm, AdhocWorkspaceContent, LaunchOptions};
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
use crate::Error;
use crate::Result;

/// A document that can host a transient launch form.
///
/// Submitting navigates away (or opens a tab); nothing about the provisioning
/// response is observable here.
pub trait DocumentHost {
    /// The attached form element.
    type Handle;

    /// Create the form with its hidden fields and attach it to the document.
    fn attach(&mut self, form: &AdhocForm) -> Result<Self::Handle>;

    /// Submit an attached form.
    fn submit(&mut self, handle: &Self::Handle) -> Result<()>;

    /// Remove the form from the document.
    fn detach(&mut self, handle: Self::Handle) -> Result<()>;
}

/// Create a new ad-hoc workspace by submitting a form through `host`.
///
/// The whole form is computed before the document is touched. The form is
/// detached again even if submitting fails.
pub fn launch_adhoc_workspace_with<H>(
    host: &mut H,
    content: &AdhocWorkspaceContent,
    options: &LaunchOptions,
) -> Result<()>
where
    H: DocumentHost + ?Sized,
{
    let form = AdhocForm::build(content, options)?;

    let handle = host.attach(&form)?;
    trace!("attached launch form");
    debug!(action = %form.action, "submitting ad-hoc workspace form");
    let submitted = host.submit(&handle);
    let detached = host.detach(handle);
    trace!("detached launch form");

    submitted.and(detached)
}

/// Create a new ad-hoc workspace from the current browser page.
///
/// Only supported in a browser: build for `wasm32` with the `web` feature.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub fn launch_adhoc_workspace(
    content: &AdhocWorkspaceContent,
    options: &LaunchOptions,
) -> Result<()> {
    let mut document = super::BrowserDocument::current()?;
    launch_adhoc_workspace_with(&mut document, content, options)
}

/// Create a new ad-hoc workspace from the current browser page.
///
/// Only supported in a browser: build for `wasm32` with the `web` feature.
/// Elsewhere this fails with [`Error::UnsupportedEnvironment`]; see
/// [`render_launch_page`](super::render_launch_page) for a page that
/// launches the workspace once opened.
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub fn launch_adhoc_workspace(
    _content: &AdhocWorkspaceContent,
    _options: &LaunchOptions,
) -> Result<()> {
    Err(Error::UnsupportedEnvironment)
}
