//! Error types for catalog operations.

use std::path::PathBuf;

/// Errors addressing catalog entries.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown entry: {0}")]
    UnknownKey(String),
}

/// The random pick had nothing to pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("no DLCs selected")]
    NothingEnabled,
}

/// Errors installing the selected theme.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("theme asset not found: {0}")]
    MissingAsset(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
