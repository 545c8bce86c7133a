// src/core/discovery.rs
use anyhow::{Context as _, Result, ensure};
use glob::Pattern;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Directories pruned from discovery unless the caller overrides the
/// exclude set.
pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &[
    ".git",
    ".venv",
    "venv",
    "__pycache__",
    "build",
    "dist",
    "target",
];

/// Recursively discovers `*.tex` files under a root directory.
///
/// Prunes directories whose name starts with `.` and directories matching
/// any entry of `exclude_dirs` (entries are glob patterns, so both `build`
/// and `build*` work). Entries that cannot be read are skipped with a
/// warning. Results are resolved and returned in deterministic sorted
/// order.
///
/// # Arguments
///
/// * `root` - The directory to search
/// * `exclude_dirs` - Directory-name patterns to prune
///
/// # Errors
///
/// This function may return an error if:
/// * `root` is not a directory
/// * An exclude entry is not a valid glob pattern
pub fn discover_tex_files(root: &Path, exclude_dirs: &[&str]) -> Result<Vec<PathBuf>> {
    ensure!(root.is_dir(), "not a directory: {}", root.display());

    let patterns = compile_exclude_patterns(exclude_dirs)?;
    let mut found: Vec<PathBuf> = Vec::new();

    // Depth 0 is the root itself, which must always be admitted: pruning it
    // (a hidden directory, say a tempdir named `.tmpXYZ`) would silence the
    // entire walk.
    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !should_exclude(e, &patterns))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("skipping unreadable entry: {err}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if has_tex_extension(entry.path()) {
            let path = entry.into_path();
            let resolved = fs::canonicalize(&path).unwrap_or(path);
            found.push(resolved);
        }
    }

    found.sort();
    found.dedup();
    debug!("discovered {} .tex files under {}", found.len(), root.display());
    Ok(found)
}

/// True if the file name ends in `.tex`, case-insensitively.
pub fn has_tex_extension(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.to_ascii_lowercase().ends_with(".tex"))
}

fn compile_exclude_patterns(exclude_dirs: &[&str]) -> Result<Vec<Pattern>> {
    exclude_dirs
        .iter()
        .map(str::trim)
        .filter(|dir| !dir.is_empty())
        .map(|dir| Pattern::new(dir).with_context(|| format!("invalid exclude pattern: {dir}")))
        .collect()
}

fn should_exclude(entry: &DirEntry, patterns: &[Pattern]) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let Some(name) = entry.file_name().to_str() else {
        return false;
    };
    if name.starts_with('.') {
        return true;
    }
    patterns.iter().any(|pattern| pattern.matches(name))
}
