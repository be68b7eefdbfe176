//! Listing of the behavior scripts available in a cardpack.

use std::path::Path;

use crate::core::config::{SCRIPTS_DIR, SCRIPT_EXTENSION};

/// Every `*.lua` file under `<root>/scripts/`, recursively.
///
/// Paths are relative to `root`, forward-slash separated and sorted. A
/// missing scripts directory yields an empty list; unreadable
/// subdirectories are skipped.
#[must_use]
pub fn list_scripts(root: &Path) -> Vec<String> {
    let scripts_dir = root.join(SCRIPTS_DIR);
    if !scripts_dir.is_dir() {
        tracing::warn!(dir = %scripts_dir.display(), "cardpack has no scripts directory");
        return Vec::new();
    }

    let mut found = Vec::new();
    let mut pending = vec![scripts_dir];
    while let Some(dir) = pending.pop() {
        let entries = match std::fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "skipping unreadable script directory");
                continue;
            }
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                pending.push(path);
            } else if is_script(&path) {
                if let Some(relative) = relative_slash_path(root, &path) {
                    found.push(relative);
                }
            }
        }
    }

    found.sort();
    tracing::debug!(count = found.len(), "listed cardpack scripts");
    found
}

fn is_script(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(SCRIPT_EXTENSION))
}

/// `path` relative to `root`, joined with `/`.
pub(crate) fn relative_slash_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<_> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();
    Some(parts.join("/"))
}
