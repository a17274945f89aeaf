//! Error types for the confirm workflow.

use std::path::PathBuf;

use s3mp_catalog::{SelectionError, ThemeError};
use s3mp_settings::SettingsError;

/// Errors that abort the workflow.
#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    /// The document root is unset or not a directory. Nothing was touched.
    #[error("document folder does not exist: {0:?}; please choose a valid directory")]
    Directory(PathBuf),

    #[error("failed to save settings: {0}")]
    Settings(#[from] SettingsError),

    /// No DLC was enabled. Cache cleanup has already run.
    #[error("{0}")]
    Selection(#[from] SelectionError),

    #[error("failed to install theme: {0}")]
    Theme(#[from] ThemeError),

    #[error("workflow already completed")]
    AlreadyDone,
}
