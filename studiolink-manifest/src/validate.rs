//! Validation of raw manifest values.

use studiolink_core::OpenDestination;
use toml::Spanned;

use crate::{Result, error::SourceContext, manifest::RawDestination};

/// Require a non-blank string, returning it trimmed.
pub(crate) fn non_blank(ctx: &SourceContext, field: &str, value: &Spanned<String>) -> Result<String> {
    let trimmed = value.get_ref().trim();
    if trimmed.is_empty() {
        return Err(ctx.validation_error_at(format!("'{field}' must not be empty"), value.span()));
    }
    Ok(trimmed.to_string())
}

/// Require an absolute http(s) URL.
pub(crate) fn http_url(ctx: &SourceContext, field: &str, value: &Spanned<String>) -> Result<String> {
    let url = non_blank(ctx, field, value)?;
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ctx.validation_error_at(
            format!("'{field}' must start with http:// or https://"),
            value.span(),
        ));
    }
    Ok(url)
}

/// Turn a raw destination table into a typed destination.
///
/// The field matching the `type` must be present and non-blank, and fields
/// belonging to other types are rejected.
pub(crate) fn destination(
    ctx: &SourceContext,
    raw: &Spanned<RawDestination>,
) -> Result<OpenDestination> {
    let table = raw.get_ref();
    let kind = table.kind.get_ref().as_str();

    let (field, value) = match kind {
        "git" => ("repo_url", &table.repo_url),
        "named-template" => ("template_id", &table.template_id),
        "custom-template" => ("template_repo_url", &table.template_repo_url),
        "prototype-prompt" => ("prompt", &table.prompt),
        _ => return Err(ctx.unknown_destination_error(kind, table.kind.span())),
    };

    let candidates = [
        ("repo_url", &table.repo_url),
        ("template_id", &table.template_id),
        ("template_repo_url", &table.template_repo_url),
        ("prompt", &table.prompt),
    ];
    for (other, other_value) in candidates {
        if other == field {
            continue;
        }
        if let Some(other_value) = other_value {
            return Err(ctx.validation_error_at(
                format!("'{other}' is not used by '{kind}' destinations, expected '{field}'"),
                other_value.span(),
            ));
        }
    }

    let Some(value) = value else {
        return Err(ctx.validation_error_at(
            format!("'{kind}' destination requires '{field}'"),
            raw.span(),
        ));
    };

    // Prompts keep their whitespace; everything else is checked trimmed.
    let destination = match kind {
        "git" => OpenDestination::git(non_blank(ctx, field, value)?),
        "named-template" => OpenDestination::named_template(non_blank(ctx, field, value)?),
        "custom-template" => OpenDestination::custom_template(non_blank(ctx, field, value)?),
        _ => {
            non_blank(ctx, field, value)?;
            OpenDestination::prototype_prompt(value.get_ref().as_str())
        }
    };
    Ok(destination)
}
