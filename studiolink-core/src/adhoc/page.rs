//! Standalone pages that launch a workspace when opened.

use super::{AdhocForm, AdhocWorkspaceContent, LaunchOptions};
use crate::{
    Result,
    markup::{MarkupBuilder, attr},
};

const FORM_ID: &str = "studiolink-launch";

/// Render an HTML page that submits the launch form as soon as it loads.
///
/// This is the way to launch from outside a browser: write the page to disk
/// or serve it, and opening it performs the same POST a browser-side launch
/// would. Readers without JavaScript get a visible submit button.
pub fn render_launch_page(
    content: &AdhocWorkspaceContent,
    options: &LaunchOptions,
) -> Result<String> {
    let form = AdhocForm::build(content, options)?;

    let form_open = format!(
        "<form {} {} {} {} {}>",
        attr("id", FORM_ID),
        attr("method", AdhocForm::METHOD),
        attr("action", &form.action),
        attr("target", form.target.as_str()),
        attr("style", AdhocForm::STYLE),
    );

    let page = MarkupBuilder::new()
        .line("<!DOCTYPE html>")
        .block_with_close("<html>", "</html>", |b| {
            b.block_with_close("<head>", "</head>", |b| {
                b.line(r#"<meta charset="utf-8">"#)
                    .line("<title>Opening Firebase Studio</title>")
            })
            .block_with_close("<body>", "</body>", |b| {
                b.block_with_close(&form_open, "</form>", |b| {
                    b.each(&form.fields, |b, field| {
                        b.line(&format!(
                            r#"<input type="hidden" {} {}>"#,
                            attr("name", &field.name),
                            attr("value", &field.value)
                        ))
                    })
                })
                .block_with_close("<noscript>", "</noscript>", |b| {
                    b.line(&format!(
                        r#"<button type="submit" form="{FORM_ID}">Open in Firebase Studio</button>"#
                    ))
                })
                .line(&format!(
                    r#"<script>document.getElementById("{FORM_ID}").submit();</script>"#
                ))
            })
        })
        .build();

    Ok(page)
}
