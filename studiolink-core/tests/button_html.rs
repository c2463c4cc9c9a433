//! Snapshot tests for button snippets.
//!
//! The exact layout is what sites paste into their pages, so changes here
//! should be deliberate. Run `cargo insta review` after intentional changes.

use studiolink_core::{
    ButtonColor, ButtonHtmlColor, ButtonHtmlConfig, ButtonLabel, ButtonSize, ImageFormat,
    OpenDestination, resolve_button_html,
};

#[test]
fn test_static_button() {
    let config = ButtonHtmlConfig::new(OpenDestination::git("github.com/firebase/studio-demo"));
    insta::assert_snapshot!(resolve_button_html(&config), @r#"
    <a href="https://studio.firebase.google.com/import?url=https%3A%2F%2Fgithub.com%2Ffirebase%2Fstudio-demo">
      <img
        height="32"
        alt="Open in Firebase Studio"
        src="https://cdn.firebasestudio.dev/btn/open_dark_32.svg">
    </a>
    "#);
}

#[test]
fn test_static_png_button() {
    let config = ButtonHtmlConfig::new(OpenDestination::named_template("gemini"))
        .with_label(ButtonLabel::Try)
        .with_color(ButtonColor::Bright)
        .with_size(ButtonSize::Small)
        .with_format(ImageFormat::Png);
    insta::assert_snapshot!(resolve_button_html(&config), @r#"
    <a href="https://studio.firebase.google.com/new/gemini">
      <img
        height="20"
        alt="Try in Firebase Studio"
        src="https://cdn.firebasestudio.dev/btn/try_bright_20@2x.png">
    </a>
    "#);
}

#[test]
fn test_dynamic_button() {
    let config = ButtonHtmlConfig::new(OpenDestination::prototype_prompt("a recipe app"))
        .with_label(ButtonLabel::Continue)
        .with_color(ButtonHtmlColor::Dynamic);
    insta::assert_snapshot!(resolve_button_html(&config), @r#"
    <a href="https://studio.firebase.google.com/?prototypePrompt=a%20recipe%20app">
      <picture>
        <source
          media="(prefers-color-scheme: dark)"
          srcset="https://cdn.firebasestudio.dev/btn/continue_dark_32.svg">
        <source
          media="(prefers-color-scheme: light)"
          srcset="https://cdn.firebasestudio.dev/btn/continue_light_32.svg">
        <img
          height="32"
          alt="Continue in Firebase Studio"
          src="https://cdn.firebasestudio.dev/btn/continue_blue_32.svg">
      </picture>
    </a>
    "#);
}

#[test]
fn test_dynamic_reverse_button() {
    let config = ButtonHtmlConfig::new(OpenDestination::custom_template("github.com/org/tpl"))
        .with_label(ButtonLabel::Export)
        .with_color(ButtonHtmlColor::DynamicReverse)
        .with_size(ButtonSize::Small);
    insta::assert_snapshot!(resolve_button_html(&config), @r#"
    <a href="https://studio.firebase.google.com/new?template=https%3A%2F%2Fgithub.com%2Forg%2Ftpl">
      <picture>
        <source
          media="(prefers-color-scheme: dark)"
          srcset="https://cdn.firebasestudio.dev/btn/export_light_20.svg">
        <source
          media="(prefers-color-scheme: light)"
          srcset="https://cdn.firebasestudio.dev/btn/export_dark_20.svg">
        <img
          height="20"
          alt="Export to Firebase Studio"
          src="https://cdn.firebasestudio.dev/btn/export_blue_20.svg">
      </picture>
    </a>
    "#);
}

#[test]
fn test_element_counts() {
    let destination = OpenDestination::named_template("flutter");
    let colors = [
        ButtonHtmlColor::Static(ButtonColor::Dark),
        ButtonHtmlColor::Static(ButtonColor::Light),
        ButtonHtmlColor::Static(ButtonColor::Blue),
        ButtonHtmlColor::Static(ButtonColor::Bright),
        ButtonHtmlColor::Dynamic,
        ButtonHtmlColor::DynamicReverse,
    ];

    for color in colors {
        let html =
            resolve_button_html(&ButtonHtmlConfig::new(destination.clone()).with_color(color));
        match color {
            ButtonHtmlColor::Static(_) => {
                assert_eq!(html.matches("<img").count(), 1, "{color}");
                assert_eq!(html.matches("<source").count(), 0, "{color}");
                assert!(!html.contains("<picture>"), "{color}");
            }
            ButtonHtmlColor::Dynamic | ButtonHtmlColor::DynamicReverse => {
                assert_eq!(html.matches("<img").count(), 1, "{color}");
                assert_eq!(html.matches("<source").count(), 2, "{color}");
                assert_eq!(html.matches("<picture>").count(), 1, "{color}");
            }
        }
    }
}
