//! Browser document host backed by `web-sys`.

use tracing::trace;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlFormElement, HtmlInputElement};

use super::{AdhocForm, DocumentHost};
use crate::{Error, Result};

/// The page's own `document.body`.
pub struct BrowserDocument {
    document: Document,
    body: HtmlElement,
}

impl BrowserDocument {
    /// Get the current page's document.
    ///
    /// Fails with [`Error::UnsupportedEnvironment`] in workers and other
    /// contexts without a `window.document.body`.
    pub fn current() -> Result<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(Error::UnsupportedEnvironment)?;
        let body = document.body().ok_or(Error::UnsupportedEnvironment)?;
        Ok(Self { document, body })
    }

    fn create<T: JsCast>(&self, tag: &str) -> Result<T> {
        self.document
            .create_element(tag)
            .map_err(|e| js_error("createElement", e))?
            .dyn_into::<T>()
            .map_err(|_| Error::dom("createElement", format!("<{tag}> has an unexpected type")))
    }
}

impl DocumentHost for BrowserDocument {
    type Handle = HtmlFormElement;

    fn attach(&mut self, form: &AdhocForm) -> Result<HtmlFormElement> {
        let element: HtmlFormElement = self.create("form")?;
        element.set_method(AdhocForm::METHOD);
        element.set_action(&form.action);
        element.set_target(form.target.as_str());
        element
            .set_attribute("style", AdhocForm::STYLE)
            .map_err(|e| js_error("setAttribute", e))?;

        for field in &form.fields {
            let input: HtmlInputElement = self.create("input")?;
            input.set_type("hidden");
            input.set_name(&field.name);
            input.set_value(&field.value);
            element
                .append_child(&input)
                .map_err(|e| js_error("appendChild", e))?;
        }

        self.body
            .append_child(&element)
            .map_err(|e| js_error("appendChild", e))?;
        trace!(fields = form.fields.len(), "appended form to document body");
        Ok(element)
    }

    fn submit(&mut self, handle: &HtmlFormElement) -> Result<()> {
        handle.submit().map_err(|e| js_error("submit", e))
    }

    fn detach(&mut self, handle: HtmlFormElement) -> Result<()> {
        self.body
            .remove_child(&handle)
            .map(|_| ())
            .map_err(|e| js_error("removeChild", e))
    }
}

fn js_error(operation: &'static str, value: JsValue) -> Error {
    let message = value.as_string().unwrap_or_else(|| format!("{value:?}"));
    Error::dom(operation, message)
}
