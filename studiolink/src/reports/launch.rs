//! Launch dry-run report.

use std::path::{Path, PathBuf};

use studiolink_core::AdhocForm;

use super::output::{Output, Report};

/// The form a launch would submit, without the page around it.
#[derive(Debug)]
pub struct LaunchReport {
    /// Directory the files were collected from.
    pub source: PathBuf,
    pub action: String,
    pub target: &'static str,
    /// Field names with their value sizes in bytes.
    pub fields: Vec<(String, usize)>,
}

impl LaunchReport {
    pub fn new(source: &Path, form: &AdhocForm) -> Self {
        Self {
            source: source.to_path_buf(),
            action: form.action.clone(),
            target: form.target.as_str(),
            fields: form
                .fields
                .iter()
                .map(|f| (f.name.clone(), f.value.len()))
                .collect(),
        }
    }
}

impl Report for LaunchReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("source", &self.source.display().to_string());
        out.key_value("action", &self.action);
        out.key_value("method", AdhocForm::METHOD);
        out.key_value("target", self.target);
        out.newline();

        out.section(&format!("{} fields", self.fields.len()));
        for (name, len) in &self.fields {
            out.list_item(&format!("{name} ({len} bytes)"));
        }
    }
}

#[cfg(test)]
mod tests {
    use studiolink_core::{AdhocWorkspaceContent, LaunchOptions, WorkspaceSettings};

    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_render() {
        let content = AdhocWorkspaceContent::new()
            .with_file("index.html", "<p>hi</p>")
            .with_settings(WorkspaceSettings::default().with_referrer("docs"));
        let form = AdhocForm::build(&content, &LaunchOptions::default().same_tab()).unwrap();

        let mut out = BufferOutput::default();
        LaunchReport::new(Path::new("site"), &form).render(&mut out);
        assert_eq!(
            out.lines,
            vec![
                "source: site",
                "action: https://studio.firebase.google.com/run.api",
                "method: post",
                "target: _self",
                "",
                "2 fields:",
                "  - project[files][index.html] (9 bytes)",
                "  - project[settings] (19 bytes)",
            ]
        );
    }
}
