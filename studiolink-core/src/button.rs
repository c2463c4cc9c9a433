//! "Open in Firebase Studio" button images and snippets.
//!
//! Image URLs follow the CDN's asset layout:
//!
//! ```text
//! https://cdn.firebasestudio.dev/btn/<label>_<color>_<size>[@2x].<format>
//! ```
//!
//! PNG images are only published at 2x resolution, hence the `@2x` suffix.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::{
    BUTTON_CDN_URL, Error, OpenDestination, Result,
    markup::{MarkupBuilder, attr},
    resolve_open_url,
};

/// The text label shown in the button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonLabel {
    #[default]
    Open,
    Try,
    Export,
    Continue,
}

impl ButtonLabel {
    pub const ALL: [ButtonLabel; 4] = [Self::Open, Self::Try, Self::Export, Self::Continue];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Try => "try",
            Self::Export => "export",
            Self::Continue => "continue",
        }
    }

    /// Human-readable text used as the image's `alt` attribute.
    pub fn alt_text(&self) -> &'static str {
        match self {
            Self::Open => "Open in Firebase Studio",
            Self::Try => "Try in Firebase Studio",
            Self::Export => "Export to Firebase Studio",
            Self::Continue => "Continue in Firebase Studio",
        }
    }
}

/// Look up the alt text for an untyped label.
pub fn alt_text_for(label: &str) -> Result<&'static str> {
    label.parse::<ButtonLabel>().map(|l| l.alt_text())
}

/// Button color of a published image. `Bright` is the branded gradient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonColor {
    #[default]
    Dark,
    Light,
    Blue,
    Bright,
}

impl ButtonColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Blue => "blue",
            Self::Bright => "bright",
        }
    }
}

/// Button color for an HTML snippet.
///
/// The dynamic variants follow the reader's `prefers-color-scheme`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum ButtonHtmlColor {
    Static(ButtonColor),
    /// Dark button on dark schemes, light button on light schemes.
    Dynamic,
    /// Light button on dark schemes, dark button on light schemes.
    DynamicReverse,
}

impl ButtonHtmlColor {
    /// Color of the `<img>` fallback for clients without media query support.
    pub const FALLBACK: ButtonColor = ButtonColor::Blue;

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Static(color) => color.as_str(),
            Self::Dynamic => "dynamic",
            Self::DynamicReverse => "dynamic-reverse",
        }
    }
}

impl Default for ButtonHtmlColor {
    fn default() -> Self {
        Self::Static(ButtonColor::default())
    }
}

impl TryFrom<String> for ButtonHtmlColor {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl Serialize for ButtonHtmlColor {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl From<ButtonColor> for ButtonHtmlColor {
    fn from(color: ButtonColor) -> Self {
        Self::Static(color)
    }
}

/// Button height in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum ButtonSize {
    Small,
    #[default]
    Large,
}

impl ButtonSize {
    pub fn pixels(&self) -> u32 {
        match self {
            Self::Small => 20,
            Self::Large => 32,
        }
    }
}

impl TryFrom<u32> for ButtonSize {
    type Error = Error;

    fn try_from(px: u32) -> Result<Self> {
        match px {
            20 => Ok(Self::Small),
            32 => Ok(Self::Large),
            _ => Err(Error::invalid_button("size", px.to_string())),
        }
    }
}

impl From<ButtonSize> for u32 {
    fn from(size: ButtonSize) -> Self {
        size.pixels()
    }
}

/// Image format. PNG is served at @2x resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    Svg,
    Png,
}

impl ImageFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(ButtonLabel, ButtonColor, ButtonHtmlColor, ImageFormat);

impl fmt::Display for ButtonSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pixels())
    }
}

impl FromStr for ButtonLabel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "open" => Ok(Self::Open),
            "try" => Ok(Self::Try),
            "export" => Ok(Self::Export),
            "continue" => Ok(Self::Continue),
            _ => Err(Error::invalid_button("label", s)),
        }
    }
}

impl FromStr for ButtonColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            "blue" => Ok(Self::Blue),
            "bright" => Ok(Self::Bright),
            _ => Err(Error::invalid_button("color", s)),
        }
    }
}

impl FromStr for ButtonHtmlColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dynamic" => Ok(Self::Dynamic),
            "dynamic-reverse" => Ok(Self::DynamicReverse),
            _ => s.parse().map(Self::Static),
        }
    }
}

impl FromStr for ButtonSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.parse::<u32>()
            .map_err(|_| Error::invalid_button("size", s))
            .and_then(Self::try_from)
    }
}

impl FromStr for ImageFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            _ => Err(Error::invalid_button("format", s)),
        }
    }
}

/// Configuration for a button image. Every field has a default.
///
/// Serializes with the web shape: `{ "label", "color", "size", "imageFormat" }`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ButtonImageConfig {
    pub label: ButtonLabel,
    pub color: ButtonColor,
    pub size: ButtonSize,
    #[serde(rename = "imageFormat")]
    pub format: ImageFormat,
}

impl ButtonImageConfig {
    /// Parse an image config from untyped JSON.
    ///
    /// Out-of-range values fail with [`Error::InvalidButtonConfig`], as do
    /// keys other than `label`, `color`, `size` and `imageFormat`.
    pub fn from_json(value: &Value) -> Result<Self> {
        if let Some(fields) = value.as_object() {
            if let Some(key) = fields.keys().find(|k| !IMAGE_KEYS.contains(&k.as_str())) {
                return Err(Error::invalid_button("key", key.as_str()));
            }
        }

        let mut config = Self::default();
        if let Some(label) = json_field(value, "label")? {
            config.label = label.parse()?;
        }
        if let Some(color) = json_field(value, "color")? {
            config.color = color.parse()?;
        }
        if let Some(size) = json_field(value, "size")? {
            config.size = size.parse()?;
        }
        if let Some(format) = json_field(value, "imageFormat")? {
            config.format = format.parse()?;
        }
        Ok(config)
    }

    pub fn with_label(mut self, label: ButtonLabel) -> Self {
        self.label = label;
        self
    }

    pub fn with_color(mut self, color: ButtonColor) -> Self {
        self.color = color;
        self
    }

    pub fn with_size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.format = format;
        self
    }
}

/// Get the CDN URL for a button image.
pub fn resolve_button_image_url(config: &ButtonImageConfig) -> String {
    let scale = match config.format {
        ImageFormat::Png => "@2x",
        ImageFormat::Svg => "",
    };
    format!(
        "{BUTTON_CDN_URL}{}_{}_{}{scale}.{}",
        config.label, config.color, config.size, config.format
    )
}

const IMAGE_KEYS: [&str; 4] = ["label", "color", "size", "imageFormat"];

/// Configuration for a button snippet linking to a destination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ButtonHtmlConfig {
    pub destination: OpenDestination,
    /// Studio base URL for the link; `None` uses [`DEFAULT_BASE_URL`](crate::DEFAULT_BASE_URL).
    pub base_url: Option<String>,
    pub label: ButtonLabel,
    pub color: ButtonHtmlColor,
    pub size: ButtonSize,
    pub format: ImageFormat,
}

impl ButtonHtmlConfig {
    pub fn new(destination: OpenDestination) -> Self {
        Self {
            destination,
            base_url: None,
            label: ButtonLabel::default(),
            color: ButtonHtmlColor::default(),
            size: ButtonSize::default(),
            format: ImageFormat::default(),
        }
    }

    pub fn with_label(mut self, label: ButtonLabel) -> Self {
        self.label = label;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<ButtonHtmlColor>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.format = format;
        self
    }

    /// Parse a snippet config from untyped JSON.
    ///
    /// Accepts `{ "destination": {...}, "label"?, "color"?, "size"?, "imageFormat"? }`.
    /// Out-of-range values fail with [`Error::InvalidButtonConfig`].
    pub fn from_json(value: &Value) -> Result<Self> {
        let destination = match value.get("destination") {
            Some(destination) => OpenDestination::from_json(destination)?,
            None => {
                return Err(Error::UnknownDestinationKind {
                    kind: String::new(),
                });
            }
        };

        let mut config = Self::new(destination);
        if let Some(label) = json_field(value, "label")? {
            config.label = label.parse()?;
        }
        if let Some(color) = json_field(value, "color")? {
            config.color = color.parse()?;
        }
        if let Some(size) = json_field(value, "size")? {
            config.size = size.parse()?;
        }
        if let Some(format) = json_field(value, "imageFormat")? {
            config.format = format.parse()?;
        }
        Ok(config)
    }

    /// Image config for one concrete color of this button.
    pub fn image(&self, color: ButtonColor) -> ButtonImageConfig {
        ButtonImageConfig {
            label: self.label,
            color,
            size: self.size,
            format: self.format,
        }
    }
}

/// Read an optional string-or-number field as text.
fn json_field(value: &Value, key: &'static str) -> Result<Option<String>> {
    let field = match key {
        "imageFormat" => "format",
        other => other,
    };
    match value.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(Error::invalid_button(field, other.to_string())),
    }
}

/// Get the HTML for a button, wrapped in a link to its destination.
///
/// Dynamic colors render a `<picture>` that switches between the dark and
/// light images with the reader's color scheme.
pub fn resolve_button_html(config: &ButtonHtmlConfig) -> String {
    let href = resolve_open_url(&config.destination, config.base_url.as_deref());

    let html = MarkupBuilder::new().block_with_close(
        &format!("<a {}>", attr("href", &href)),
        "</a>",
        |b| match config.color {
            ButtonHtmlColor::Static(color) => image_tag(b, config, color),
            ButtonHtmlColor::Dynamic => {
                picture_tag(b, config, ButtonColor::Dark, ButtonColor::Light)
            }
            ButtonHtmlColor::DynamicReverse => {
                picture_tag(b, config, ButtonColor::Light, ButtonColor::Dark)
            }
        },
    );

    html.build().trim_end().to_string()
}

fn image_tag(b: MarkupBuilder, config: &ButtonHtmlConfig, color: ButtonColor) -> MarkupBuilder {
    b.tag(
        "img",
        &[
            attr("height", &config.size.to_string()),
            attr("alt", config.label.alt_text()),
            attr("src", &resolve_button_image_url(&config.image(color))),
        ],
    )
}

fn picture_tag(
    b: MarkupBuilder,
    config: &ButtonHtmlConfig,
    dark: ButtonColor,
    light: ButtonColor,
) -> MarkupBuilder {
    let sources = [("dark", dark), ("light", light)];
    b.block_with_close("<picture>", "</picture>", |b| {
        let b = b.each(sources, |b, (scheme, color)| {
            b.tag(
                "source",
                &[
                    attr("media", &format!("(prefers-color-scheme: {scheme})")),
                    attr("srcset", &resolve_button_image_url(&config.image(color))),
                ],
            )
        });
        image_tag(b, config, ButtonHtmlColor::FALLBACK)
    })
}

/// Get a Markdown badge for a button, for READMEs that don't allow raw HTML.
///
/// Markdown can't switch images by color scheme, so dynamic colors use the
/// fallback image.
pub fn resolve_button_markdown(config: &ButtonHtmlConfig) -> String {
    let color = match config.color {
        ButtonHtmlColor::Static(color) => color,
        ButtonHtmlColor::Dynamic | ButtonHtmlColor::DynamicReverse => ButtonHtmlColor::FALLBACK,
    };
    format!(
        "[![{}]({})]({})",
        config.label.alt_text(),
        resolve_button_image_url(&config.image(color)),
        resolve_open_url(&config.destination, config.base_url.as_deref())
    )
}
