//! Check command report data structures.

use std::path::{Path, PathBuf};

use super::output::{Output, Report};

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// What the manifest resolves to, in display order.
    pub summary: Vec<(String, String)>,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
}

impl CheckReport {
    pub fn new(config_path: &Path) -> Self {
        Self {
            config_path: config_path.to_path_buf(),
            summary: Vec::new(),
            errors: Vec::new(),
            warnings: Vec::new(),
            infos: Vec::new(),
        }
    }

    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.warning(&format!("error: {}", error));
        }

        for warning in &self.warnings {
            out.warning(&format!("warning: {}", warning));
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        if !self.summary.is_empty() {
            out.newline();
            for (key, value) in &self.summary {
                out.key_value_indented(key, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_render_valid() {
        let mut report = CheckReport::new(Path::new("studio.toml"));
        report
            .summary
            .push(("link".to_string(), "https://example.dev/new/gemini".to_string()));

        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.lines,
            vec![
                "✓ studio.toml is valid",
                "",
                "  link: https://example.dev/new/gemini",
            ]
        );
    }

    #[test]
    fn test_render_errors() {
        let mut report = CheckReport::new(Path::new("studio.toml"));
        report.errors.push("'site' is not a directory".to_string());

        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(out.lines, vec!["error: 'site' is not a directory", ""]);
    }
}
