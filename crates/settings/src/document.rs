//! The persisted settings document.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// User preferences as stored on disk.
///
/// Only serialized directly; reading goes through [`from_value`](Self::from_value).
///
/// Toggle maps are keyed by the entry's stable key (cache name or DLC id).
/// Keys that no longer exist in a catalog are carried along but never read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SettingsDocument {
    /// Game installation directory (may be empty).
    pub game_path: String,

    /// User-data directory the game writes caches and saves into.
    pub document_path: String,

    /// Persisted cache toggles.
    pub caches: BTreeMap<String, bool>,

    /// Persisted DLC toggles.
    pub dlcs: BTreeMap<String, bool>,
}

impl SettingsDocument {
    /// Builds a document from arbitrary JSON, keeping every field that has
    /// the expected shape and dropping the rest.
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            tracing::debug!("settings root is not an object, ignoring");
            return Self::default();
        };

        Self {
            game_path: string_field(object, "game_path"),
            document_path: string_field(object, "document_path"),
            caches: toggle_field(object, "caches"),
            dlcs: toggle_field(object, "dlcs"),
        }
    }

    /// Returns the persisted value for a cache entry, if any.
    pub fn cache_enabled(&self, key: &str) -> Option<bool> {
        self.caches.get(key).copied()
    }

    /// Returns the persisted value for a DLC entry, if any.
    pub fn dlc_enabled(&self, key: &str) -> Option<bool> {
        self.dlcs.get(key).copied()
    }

    /// True when nothing at all was loaded.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

fn string_field(object: &serde_json::Map<String, Value>, name: &str) -> String {
    match object.get(name) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => {
            tracing::debug!(field = name, value = %other, "dropping non-string settings field");
            String::new()
        }
        None => String::new(),
    }
}

fn toggle_field(object: &serde_json::Map<String, Value>, name: &str) -> BTreeMap<String, bool> {
    let Some(value) = object.get(name) else {
        return BTreeMap::new();
    };
    let Some(map) = value.as_object() else {
        tracing::debug!(field = name, "dropping non-object toggle map");
        return BTreeMap::new();
    };

    map.iter()
        .filter_map(|(key, v)| match v.as_bool() {
            Some(enabled) => Some((key.clone(), enabled)),
            None => {
                tracing::debug!(field = name, key = %key, "dropping non-bool toggle");
                None
            }
        })
        .collect()
}
