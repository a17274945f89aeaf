//! Loading and saving the settings file.

use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::document::SettingsDocument;
use crate::error::SettingsError;

/// Loads the settings document, falling back to an empty one on any failure.
///
/// Missing files are expected on first run and logged at debug level; any
/// other failure (unreadable file, malformed JSON) is logged as a warning.
pub fn load(path: &Path) -> SettingsDocument {
    match try_load(path) {
        Ok(doc) => {
            tracing::debug!(path = %path.display(), "settings loaded");
            doc
        }
        Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            SettingsDocument::default()
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to load settings, using defaults");
            SettingsDocument::default()
        }
    }
}

/// Reads and parses the settings file, surfacing the failure.
pub fn try_load(path: &Path) -> Result<SettingsDocument, SettingsError> {
    let content = std::fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&content)?;
    Ok(SettingsDocument::from_value(&value))
}

/// Writes the document, overwriting any existing file.
///
/// The parent directory is created when missing.
pub fn save(path: &Path, doc: &SettingsDocument) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let content = to_json(doc)?;
    std::fs::write(path, content)?;

    tracing::debug!(path = %path.display(), "settings saved");
    Ok(())
}

/// Serializes the document as tab-indented JSON.
pub fn to_json(doc: &SettingsDocument) -> Result<String, SettingsError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"\t");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    doc.serialize(&mut ser)?;
    String::from_utf8(buf)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
}
