//! Property tests for URL construction.

use percent_encoding::percent_decode_str;
use proptest::prelude::*;
use studiolink_core::{
    ButtonColor, ButtonImageConfig, ButtonLabel, ButtonSize, ImageFormat, OpenDestination,
    normalize_git_url, resolve_button_image_url, resolve_open_url,
};

const BASE: &str = "https://studio.firebase.google.com";

fn decode(s: &str) -> String {
    percent_decode_str(s).decode_utf8().unwrap().into_owned()
}

/// Host-and-path strings without a scheme, e.g. `github.com/org/repo`.
fn bare_repo() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,12}\\.[a-z]{2,4}(/[A-Za-z0-9._-]{1,10}){0,3}"
}

fn label() -> impl Strategy<Value = ButtonLabel> {
    prop::sample::select(ButtonLabel::ALL.to_vec())
}

fn color() -> impl Strategy<Value = ButtonColor> {
    prop::sample::select(vec![
        ButtonColor::Dark,
        ButtonColor::Light,
        ButtonColor::Blue,
        ButtonColor::Bright,
    ])
}

fn size() -> impl Strategy<Value = ButtonSize> {
    prop::sample::select(vec![ButtonSize::Small, ButtonSize::Large])
}

proptest! {
    #[test]
    fn normalize_keeps_existing_scheme(
        scheme in prop::sample::select(vec!["http://", "https://"]),
        rest in bare_repo(),
        pad in "[ \t]{0,3}",
    ) {
        let url = format!("{scheme}{rest}");
        let padded = format!("{pad}{url}{pad}");
        prop_assert_eq!(normalize_git_url(&padded), url);
    }

    #[test]
    fn normalize_prepends_https(rest in bare_repo()) {
        prop_assert_eq!(normalize_git_url(&rest), format!("https://{rest}"));
    }

    #[test]
    fn normalize_blank_is_empty(blank in "[ \t\n]{0,8}") {
        prop_assert_eq!(normalize_git_url(&blank), "");
    }

    #[test]
    fn git_url_round_trips(repo in bare_repo()) {
        let url = resolve_open_url(&OpenDestination::git(repo.clone()), None);
        let encoded = url.strip_prefix(&format!("{BASE}/import?url=")).unwrap();
        prop_assert_eq!(decode(encoded), normalize_git_url(&repo));
    }

    #[test]
    fn custom_template_round_trips(repo in bare_repo()) {
        let url = resolve_open_url(&OpenDestination::custom_template(repo.clone()), None);
        let encoded = url.strip_prefix(&format!("{BASE}/new?template=")).unwrap();
        prop_assert_eq!(decode(encoded), normalize_git_url(&repo));
    }

    #[test]
    fn named_template_round_trips(id in "\\PC{0,24}") {
        let url = resolve_open_url(&OpenDestination::named_template(id.clone()), None);
        let encoded = url.strip_prefix(&format!("{BASE}/new/")).unwrap();
        prop_assert!(!encoded.contains('/'));
        prop_assert_eq!(decode(encoded), id.trim());
    }

    #[test]
    fn prompt_round_trips_untrimmed(prompt in "\\PC{0,40}") {
        let url = resolve_open_url(&OpenDestination::prototype_prompt(prompt.clone()), None);
        let encoded = url.strip_prefix(&format!("{BASE}/?prototypePrompt=")).unwrap();
        prop_assert!(!encoded.contains('&'));
        prop_assert_eq!(decode(encoded), prompt);
    }

    #[test]
    fn named_templates_are_distinct(a in "[a-z0-9 -]{1,16}", b in "[a-z0-9 -]{1,16}") {
        prop_assume!(a.trim() != b.trim());
        prop_assert_ne!(
            resolve_open_url(&OpenDestination::named_template(a), None),
            resolve_open_url(&OpenDestination::named_template(b), None)
        );
    }

    #[test]
    fn trailing_slash_is_ignored(host in "[a-z]{1,10}\\.dev", id in "[a-z]{1,10}") {
        let dest = OpenDestination::named_template(id);
        prop_assert_eq!(
            resolve_open_url(&dest, Some(&format!("https://{host}/"))),
            resolve_open_url(&dest, Some(&format!("https://{host}")))
        );
    }

    #[test]
    fn png_images_are_2x(label in label(), color in color(), size in size()) {
        let config = ButtonImageConfig { label, color, size, format: ImageFormat::Png };
        let url = resolve_button_image_url(&config);
        prop_assert!(url.ends_with("@2x.png"));

        let svg = resolve_button_image_url(&config.with_format(ImageFormat::Svg));
        prop_assert!(!svg.contains("@2x"));
        let expected = format!("{label}_{color}_{size}.svg");
        prop_assert!(svg.ends_with(&expected));
    }
}
