//! Builder for indented HTML snippets.

use std::borrow::Cow;

/// Fluent API for building markup with two-space indentation.
///
/// # Example
///
/// ```
/// use studiolink_core::markup::{MarkupBuilder, attr};
///
/// let html = MarkupBuilder::new()
///     .block_with_close("<p>", "</p>", |b| b.line(&attr("class", "x")))
///     .build();
///
/// assert_eq!(html, "<p>\n  class=\"x\"\n</p>\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MarkupBuilder {
    indent_level: usize,
    buffer: String,
}

impl MarkupBuilder {
    const INDENT: &'static str = "  ";

    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add an opening line, indented content, and a closing line.
    pub fn block_with_close<F>(self, open: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(open).indent();
        f(builder).dedent().line(close)
    }

    /// Add a tag whose attributes are each on their own line.
    ///
    /// The last attribute closes the tag: `<img\n  a="1"\n  b="2">`.
    pub fn tag(self, name: &str, attrs: &[String]) -> Self {
        let mut builder = self.line(&format!("<{name}")).indent();
        for (i, a) in attrs.iter().enumerate() {
            if i + 1 == attrs.len() {
                builder = builder.line(&format!("{a}>"));
            } else {
                builder = builder.line(a);
            }
        }
        builder.dedent()
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the markup.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(Self::INDENT);
        }
    }
}

/// Render `name="value"` with the value escaped for a double-quoted attribute.
pub fn attr(name: &str, value: &str) -> String {
    format!("{name}=\"{}\"", escape_attr(value))
}

/// Escape a value for use inside a double-quoted attribute.
///
/// Carriage returns become character references, since HTML parsers
/// normalize a literal `\r\n` to `\n`.
pub fn escape_attr(value: &str) -> Cow<'_, str> {
    let escaped = html_escape::encode_double_quoted_attribute(value);
    if escaped.contains('\r') {
        Cow::Owned(escaped.replace('\r', "&#13;"))
    } else {
        escaped
    }
}
