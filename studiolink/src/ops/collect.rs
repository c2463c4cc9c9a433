//! Collecting a directory into ad-hoc workspace content.

use std::{fs, path::Path};

use eyre::{Context, Result, bail, eyre};
use studiolink_core::AdhocWorkspaceContent;
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

/// Read every file under `root` into workspace content.
///
/// Paths are relative to `root` and use `/` separators. Files and directories
/// whose name is in `exclude` are skipped. Entries are visited in file name
/// order so the same tree always produces the same form.
pub fn collect_files(root: &Path, exclude: &[String]) -> Result<AdhocWorkspaceContent> {
    if !root.is_dir() {
        bail!("'{}' is not a directory", root.display());
    }

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_excluded(entry, exclude));

    let mut content = AdhocWorkspaceContent::new();
    for entry in walker {
        let entry = entry.wrap_err_with(|| format!("failed to walk '{}'", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let name = workspace_path(root, path)?;
        let bytes = fs::read(path).wrap_err_with(|| format!("failed to read '{}'", path.display()))?;
        let text = String::from_utf8(bytes).map_err(|_| {
            eyre!(
                "'{}' is not UTF-8 text; ad-hoc workspaces only accept text files",
                path.display()
            )
        })?;

        trace!(path = %name, bytes = text.len(), "collected file");
        content = content.with_file(name, text);
    }

    debug!(root = %root.display(), files = content.files.len(), "collected workspace files");
    Ok(content)
}

fn is_excluded(entry: &DirEntry, exclude: &[String]) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| exclude.iter().any(|e| e == name))
}

fn workspace_path(root: &Path, path: &Path) -> Result<String> {
    let relative = path
        .strip_prefix(root)
        .wrap_err_with(|| format!("'{}' is outside '{}'", path.display(), root.display()))?;

    let parts: Option<Vec<&str>> = relative
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect();
    match parts {
        Some(parts) => Ok(parts.join("/")),
        None => bail!("'{}' is not a UTF-8 path", path.display()),
    }
}
