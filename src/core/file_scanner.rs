//! Source file collection.
//!
//! Walks every source root recursively and keeps the regular files whose name
//! ends with one of the configured extensions. Roots are visited in the given
//! order and entries within a root in file-name order, so the resulting list
//! is stable between runs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use walkdir::WalkDir;

/// Options controlling which files are collected.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Extensions without the leading dot (e.g. `cs`).
    pub extensions: Vec<String>,
    /// Glob patterns matched against entry paths, relative to their root or
    /// as walked; matches are skipped.
    pub ignores: Vec<String>,
}

pub fn collect_source_files(roots: &[PathBuf], options: &ScanOptions) -> Result<Vec<PathBuf>> {
    let ignore_patterns = options
        .ignores
        .iter()
        .map(|p| {
            Pattern::new(p).with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", p))
        })
        .collect::<Result<Vec<_>>>()?;
    let suffixes: Vec<String> = options
        .extensions
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect();

    let mut files = Vec::new();

    for root in roots {
        if !root.exists() {
            bail!(
                "Source root '{}' does not exist.\n\
                 Hint: Check the 'sourceRoots' setting or pass --source-root.",
                root.display()
            );
        }
        if !root.is_dir() {
            bail!("Source root '{}' is not a directory.", root.display());
        }

        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !is_ignored(entry.path(), root, &ignore_patterns));

        for entry in walker {
            let entry =
                entry.with_context(|| format!("Failed to walk source root: {}", root.display()))?;
            if entry.file_type().is_file() && has_extension(entry.path(), &suffixes) {
                files.push(entry.into_path());
            }
        }
    }

    Ok(files)
}

/// Patterns match either the path relative to its root or the full walk path.
fn is_ignored(path: &Path, root: &Path, patterns: &[Pattern]) -> bool {
    if patterns.is_empty() {
        return false;
    }
    let relative = path.strip_prefix(root).unwrap_or(path);
    patterns
        .iter()
        .any(|p| p.matches_path(relative) || p.matches_path(path))
}

fn has_extension(path: &Path, suffixes: &[String]) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()))
}
