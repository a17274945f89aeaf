//! Glob expansion relative to a root directory.

use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern, PatternError};

/// Match options used for every cache pattern.
///
/// `*` never crosses a path separator and never matches a leading dot.
/// Case sensitivity follows the platform's default filesystem.
pub fn match_options() -> MatchOptions {
    MatchOptions {
        case_sensitive: !cfg!(any(target_os = "windows", target_os = "macos")),
        require_literal_separator: true,
        require_literal_leading_dot: true,
    }
}

/// Expands one pattern under `root`, returning matched paths in glob order.
///
/// An empty root yields no matches. Entries that cannot be read while
/// walking are skipped.
pub fn expand(root: &Path, pattern: &str) -> Result<Vec<PathBuf>, PatternError> {
    if root.as_os_str().is_empty() {
        return Ok(Vec::new());
    }

    let full = rooted_pattern(root, pattern);
    let paths = glob::glob_with(&full, match_options())?;

    let mut matches = Vec::new();
    for entry in paths {
        match entry {
            Ok(path) => matches.push(path),
            Err(e) => {
                tracing::debug!(path = %e.path().display(), error = %e.error(), "skipping unreadable entry");
            }
        }
    }
    Ok(matches)
}

/// Expands several patterns under `root`, without duplicates.
///
/// Invalid patterns are logged and contribute no matches.
pub fn expand_all<S: AsRef<str>>(root: &Path, patterns: &[S]) -> Vec<PathBuf> {
    let mut all: Vec<PathBuf> = Vec::new();
    for pattern in patterns {
        match expand(root, pattern.as_ref()) {
            Ok(paths) => {
                for path in paths {
                    if !all.contains(&path) {
                        all.push(path);
                    }
                }
            }
            Err(e) => {
                tracing::warn!(pattern = pattern.as_ref(), error = %e, "invalid glob pattern");
            }
        }
    }
    all
}

/// True if at least one pattern matches something under `root`.
pub fn any_match<S: AsRef<str>>(root: &Path, patterns: &[S]) -> bool {
    if root.as_os_str().is_empty() {
        return false;
    }

    patterns.iter().any(|pattern| {
        let full = rooted_pattern(root, pattern.as_ref());
        match glob::glob_with(&full, match_options()) {
            Ok(mut paths) => paths.any(|entry| entry.is_ok()),
            Err(e) => {
                tracing::warn!(pattern = pattern.as_ref(), error = %e, "invalid glob pattern");
                false
            }
        }
    })
}

/// Joins an escaped root with a relative pattern.
fn rooted_pattern(root: &Path, pattern: &str) -> String {
    let escaped_root = Pattern::escape(&root.to_string_lossy());
    PathBuf::from(escaped_root)
        .join(pattern)
        .to_string_lossy()
        .into_owned()
}
