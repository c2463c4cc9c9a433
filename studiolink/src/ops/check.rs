//! Check operation - studio.toml validation.

use studiolink_core::{resolve_button_image_url, resolve_open_url};
use studiolink_manifest::StudioToml;

use super::collect_files;
use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Parsing already validated the manifest's values; this resolves what they
/// produce and checks the workspace directory can actually be collected.
pub fn check(file: &StudioToml) -> CheckReport {
    let manifest = file.manifest();
    let mut report = CheckReport::new(file.path());

    if let Some(link) = &manifest.link {
        report.summary.push((
            "link".to_string(),
            resolve_open_url(&link.destination, link.base_url.as_deref()),
        ));
    }

    match manifest.button.image_config() {
        Ok(image) => report
            .summary
            .push(("image".to_string(), resolve_button_image_url(&image))),
        Err(_) => report.infos.push(format!(
            "button color '{}' is only available as an HTML snippet",
            manifest.button.color.unwrap_or_default()
        )),
    }

    if let Some(workspace) = &manifest.workspace {
        for name in &workspace.exclude {
            if name.contains('/') || name.contains('\\') {
                report.warnings.push(format!(
                    "exclude entry '{name}' contains a path separator; only file and directory names are matched"
                ));
            }
        }

        let dir = file.resolve(&workspace.files);
        match collect_files(&dir, &workspace.exclude) {
            Ok(content) if content.files.is_empty() => {
                report
                    .warnings
                    .push(format!("workspace directory '{}' has no files", dir.display()));
            }
            Ok(content) => report.summary.push((
                "workspace".to_string(),
                format!("{} ({} files)", dir.display(), content.files.len()),
            )),
            Err(e) => report.errors.push(format!("{e:#}")),
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn open(temp: &TempDir, manifest: &str) -> StudioToml {
        let path = temp.path().join("studio.toml");
        fs::write(&path, manifest).unwrap();
        StudioToml::open(&path).unwrap()
    }

    #[test]
    fn test_valid_manifest() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("site")).unwrap();
        fs::write(temp.path().join("site/index.html"), "<p>hi</p>").unwrap();

        let file = open(
            &temp,
            "[link]\ndestination = { type = \"named-template\", template_id = \"gemini\" }\n\
             [workspace]\nfiles = \"site\"\n",
        );
        let report = check(&file);

        assert!(report.is_valid());
        assert!(report.warnings.is_empty());
        let keys: Vec<&str> = report.summary.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["link", "image", "workspace"]);
        assert_eq!(report.summary[0].1, "https://studio.firebase.google.com/new/gemini");
    }

    #[test]
    fn test_missing_workspace_directory() {
        let temp = TempDir::new().unwrap();
        let file = open(&temp, "[workspace]\nfiles = \"site\"\n");
        let report = check(&file);
        assert!(!report.is_valid());
        assert!(report.errors[0].contains("is not a directory"));
    }

    #[test]
    fn test_dynamic_color_info() {
        let temp = TempDir::new().unwrap();
        let file = open(&temp, "[button]\ncolor = \"dynamic-reverse\"\n");
        let report = check(&file);
        assert!(report.is_valid());
        assert_eq!(
            report.infos,
            vec!["button color 'dynamic-reverse' is only available as an HTML snippet"]
        );
    }

    #[test]
    fn test_exclude_with_separator_warns() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("site")).unwrap();
        fs::write(temp.path().join("site/a.txt"), "a").unwrap();
        let file = open(
            &temp,
            "[workspace]\nfiles = \"site\"\nexclude = [\"build/out\"]\n",
        );
        let report = check(&file);
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
    }
}
