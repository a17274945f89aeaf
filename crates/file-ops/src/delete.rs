//! Best-effort deletion of matched files.

use std::io;
use std::path::{Path, PathBuf};

/// Why a single file could not be removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalFailure {
    /// The process lacks permission to delete the file.
    PermissionDenied,
    /// Another process (usually the game) still holds the file open.
    InUse,
    /// Anything else, e.g. the match was a directory.
    Other,
}

impl RemovalFailure {
    fn classify(e: &io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::PermissionDenied => RemovalFailure::PermissionDenied,
            io::ErrorKind::ResourceBusy => RemovalFailure::InUse,
            // ERROR_SHARING_VIOLATION
            _ if cfg!(target_os = "windows") && e.raw_os_error() == Some(32) => {
                RemovalFailure::InUse
            }
            _ => RemovalFailure::Other,
        }
    }
}

/// A file whose removal failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedRemoval {
    pub path: PathBuf,
    pub reason: RemovalFailure,
    pub message: String,
}

/// Outcome of a removal pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemovalReport {
    /// Files that were deleted.
    pub removed: Vec<PathBuf>,
    /// Files that could not be deleted.
    pub failed: Vec<FailedRemoval>,
    /// Files that would have been deleted in dry-run mode.
    pub planned: Vec<PathBuf>,
}

impl RemovalReport {
    /// Appends another report to this one.
    pub fn merge(&mut self, other: RemovalReport) {
        self.removed.extend(other.removed);
        self.failed.extend(other.failed);
        self.planned.extend(other.planned);
    }

    /// True when no removal failed.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Deletes every given file, continuing past individual failures.
pub fn remove_files(paths: impl IntoIterator<Item = PathBuf>) -> RemovalReport {
    let mut report = RemovalReport::default();

    for path in paths {
        match std::fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(file = %path.display(), "removed");
                report.removed.push(path);
            }
            Err(e) => {
                let reason = RemovalFailure::classify(&e);
                match reason {
                    RemovalFailure::PermissionDenied => {
                        tracing::warn!(file = %path.display(), error = %e, "permission denied");
                    }
                    RemovalFailure::InUse => {
                        tracing::warn!(file = %path.display(), error = %e, "file is still in use");
                    }
                    RemovalFailure::Other => {
                        tracing::warn!(file = %path.display(), error = %e, "failed to remove file");
                    }
                }
                report.failed.push(FailedRemoval {
                    path,
                    reason,
                    message: e.to_string(),
                });
            }
        }
    }

    report
}

/// Deletes everything the patterns match under `root`.
///
/// With `dry_run` set nothing is touched; the matches are listed in
/// [`RemovalReport::planned`] instead.
pub fn remove_matches<S: AsRef<str>>(root: &Path, patterns: &[S], dry_run: bool) -> RemovalReport {
    let matches = crate::expand_all(root, patterns);

    if dry_run {
        for path in &matches {
            tracing::info!(file = %path.display(), "would remove");
        }
        return RemovalReport {
            planned: matches,
            ..RemovalReport::default()
        };
    }

    remove_files(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn removes_matching_files_only() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        fs::write(root.join("ScriptError_01.xml"), "err").unwrap();
        fs::write(root.join("ScriptError_02.xml"), "err").unwrap();
        fs::write(root.join("Sims3Logs.xml"), "log").unwrap();

        let report = remove_matches(root, &["ScriptError_*.xml"], false);
        assert_eq!(report.removed.len(), 2);
        assert!(report.is_clean());
        assert!(!root.join("ScriptError_01.xml").exists());
        assert!(!root.join("ScriptError_02.xml").exists());
        assert!(root.join("Sims3Logs.xml").exists());
    }

    #[test]
    fn no_matches_is_a_noop() {
        let tmp = tempfile::tempdir().unwrap();
        let report = remove_matches(tmp.path(), &["DCCache/*"], false);
        assert_eq!(report, RemovalReport::default());
    }

    #[test]
    fn failure_does_not_stop_remaining_files() {
        let tmp = tempfile::tempdir().unwrap();
        let cache = tmp.path().join("DCCache");
        fs::create_dir_all(cache.join("locked")).unwrap();
        fs::write(cache.join("a.dat"), "a").unwrap();
        fs::write(cache.join("z.dat"), "z").unwrap();

        // The subdirectory matches too but cannot be removed as a file.
        let report = remove_matches(tmp.path(), &["DCCache/*"], false);

        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].path, cache.join("locked"));
        assert_eq!(report.removed.len(), 2);
        assert!(!cache.join("a.dat").exists());
        assert!(!cache.join("z.dat").exists());
        assert!(cache.join("locked").exists());
    }

    #[test]
    fn vanished_file_is_reported_not_raised() {
        let tmp = tempfile::tempdir().unwrap();
        let present = tmp.path().join("present.package");
        fs::write(&present, "x").unwrap();

        let report = remove_files(vec![tmp.path().join("gone.package"), present.clone()]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].reason, RemovalFailure::Other);
        assert_eq!(report.removed, vec![present]);
    }

    #[test]
    fn classifies_failure_kinds() {
        let denied = io::Error::from(io::ErrorKind::PermissionDenied);
        let busy = io::Error::from(io::ErrorKind::ResourceBusy);
        let missing = io::Error::from(io::ErrorKind::NotFound);

        assert_eq!(RemovalFailure::classify(&denied), RemovalFailure::PermissionDenied);
        assert_eq!(RemovalFailure::classify(&busy), RemovalFailure::InUse);
        assert_eq!(RemovalFailure::classify(&missing), RemovalFailure::Other);
    }

    #[cfg(target_os = "windows")]
    #[test]
    fn sharing_violation_is_in_use() {
        let err = io::Error::from_raw_os_error(32);
        assert_eq!(RemovalFailure::classify(&err), RemovalFailure::InUse);
    }

    #[test]
    fn dry_run_touches_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("socialCache.package");
        fs::write(&file, "x").unwrap();

        let report = remove_matches(tmp.path(), &["socialCache.package"], true);
        assert_eq!(report.planned, vec![file.clone()]);
        assert!(report.removed.is_empty());
        assert!(file.exists());
    }

    #[test]
    fn merge_reports() {
        let mut a = RemovalReport {
            removed: vec![PathBuf::from("a")],
            ..RemovalReport::default()
        };
        let b = RemovalReport {
            removed: vec![PathBuf::from("b")],
            planned: vec![PathBuf::from("c")],
            ..RemovalReport::default()
        };
        a.merge(b);
        assert_eq!(a.removed.len(), 2);
        assert_eq!(a.planned.len(), 1);
    }
}
