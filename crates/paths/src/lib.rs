//! Directory layout of a Sims 3 setup and auto-detection of its roots.
//!
//! Two roots matter:
//! - the **document root**, where the game writes caches, saves and mods;
//! - the **install root**, holding one subdirectory per installed pack.

pub mod layout;
#[cfg(not(target_os = "windows"))]
pub mod detect_unix;
#[cfg(target_os = "windows")]
pub mod detect_windows;

pub use layout::{ASSETS_DIR_NAME, Layout, THEME_FILE_NAME};

use std::path::PathBuf;

/// Errors for path detection.
#[derive(Debug, thiserror::Error)]
pub enum PathsError {
    #[error("document folder not found")]
    DocumentRootNotFound,

    #[error("game installation not found")]
    InstallRootNotFound,

    #[error("home directory not set")]
    NoHome,
}

/// Returns the directory containing the running executable.
///
/// Relative resources (settings file, theme assets) resolve against it.
/// Falls back to the current directory when the executable path is unknown.
pub fn app_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Resolves `path` against the application directory unless it is absolute.
pub fn resolve_in_app_dir(path: impl Into<PathBuf>) -> PathBuf {
    let path = path.into();
    if path.is_absolute() {
        path
    } else {
        app_dir().join(path)
    }
}

/// Auto-detects the game's document root.
pub fn detect_document_root() -> Result<PathBuf, PathsError> {
    #[cfg(target_os = "windows")]
    let root = detect_windows::document_root();

    #[cfg(not(target_os = "windows"))]
    let root = detect_unix::document_root();

    if let Ok(path) = &root {
        tracing::debug!(path = %path.display(), "detected document root");
    }
    root
}

/// Auto-detects the game's install root.
pub fn detect_install_root() -> Result<PathBuf, PathsError> {
    #[cfg(target_os = "windows")]
    let root = detect_windows::install_root();

    #[cfg(not(target_os = "windows"))]
    let root = detect_unix::install_root();

    if let Ok(path) = &root {
        tracing::debug!(path = %path.display(), "detected install root");
    }
    root
}
