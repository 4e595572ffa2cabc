//! Source file discovery.
//! Walks the `source/` tree below the base directory and keeps the files
//! whose base-relative path matches the source glob pattern.

use crate::constants::{SOURCE_DIR, SOURCE_PATTERN};
use crate::error::{Error, Result};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use log::debug;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Compiles a glob pattern into a matcher.
///
/// `*` (and a `**` that is not a whole path component) matches across
/// separators, so `source/**pp` matches files at any depth below `source/`.
/// Matching is case-sensitive.
///
/// # Errors
/// * `Error::Pattern` if the pattern is not a valid glob
pub fn build_source_matcher(pattern: &str) -> Result<GlobSet> {
    let glob = GlobBuilder::new(pattern)
        .literal_separator(false)
        .case_insensitive(false)
        .build()
        .map_err(|e| Error::Pattern(format!("'{pattern}': {e}")))?;

    GlobSetBuilder::new()
        .add(glob)
        .build()
        .map_err(|e| Error::Pattern(format!("'{pattern}': {e}")))
}

/// Finds matching source files below `base_dir`.
///
/// Returned paths are relative to `base_dir` and come in the order the
/// filesystem enumerates them. A missing `source/` directory yields no
/// matches. Entries whose name starts with `.` are skipped, hidden
/// directories included. Symlinks to files count as files.
pub fn find_sources<P: AsRef<Path>>(base_dir: P, matcher: &GlobSet) -> Result<Vec<PathBuf>> {
    let base_dir = base_dir.as_ref();
    let source_root = base_dir.join(SOURCE_DIR);
    if !source_root.is_dir() {
        debug!("No source directory at {}", source_root.display());
        return Ok(Vec::new());
    }

    let mut matches = Vec::new();
    let walker = WalkDir::new(&source_root)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));
    for entry in walker {
        let entry = entry.map_err(|e| Error::Walk(e.to_string()))?;
        if !entry.path().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(base_dir)
            .map_err(|e| Error::Walk(e.to_string()))?;
        if matcher.is_match(relative) {
            debug!("Matched source file: {}", relative.display());
            matches.push(relative.to_path_buf());
        } else {
            debug!("Skipping source file: {}", relative.display());
        }
    }
    Ok(matches)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

/// Default matcher for [`SOURCE_PATTERN`].
pub fn default_source_matcher() -> Result<GlobSet> {
    build_source_matcher(SOURCE_PATTERN)
}
