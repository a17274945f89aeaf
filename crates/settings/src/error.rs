//! Error types for settings persistence.

/// Errors produced while reading or writing the settings file.
///
/// [`load`](crate::load) never surfaces these; they are only returned by
/// [`try_load`](crate::try_load) and [`save`](crate::save).
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
