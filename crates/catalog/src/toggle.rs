//! Shared toggle behavior of catalog entries.

use std::collections::BTreeMap;

use crate::error::CatalogError;

/// A user-selectable catalog entry.
pub trait Toggle {
    /// Stable identifier used for persistence. Unique within its list.
    fn key(&self) -> &str;

    /// Human-readable name.
    fn label(&self) -> &str;

    fn is_enabled(&self) -> bool;

    fn set_enabled(&mut self, enabled: bool);

    /// Value used when nothing is persisted for this entry.
    fn default_enabled(&self) -> bool;
}

/// Picks the persisted value if present, else the default.
pub fn seed(persisted: Option<bool>, default_enabled: bool) -> bool {
    persisted.unwrap_or(default_enabled)
}

/// Selects or deselects every entry.
pub fn set_all<T: Toggle>(items: &mut [T], enabled: bool) {
    for item in items {
        item.set_enabled(enabled);
    }
}

/// Sets one entry by key.
pub fn set_by_key<T: Toggle>(items: &mut [T], key: &str, enabled: bool) -> Result<(), CatalogError> {
    let item = items
        .iter_mut()
        .find(|item| item.key() == key)
        .ok_or_else(|| CatalogError::UnknownKey(key.to_string()))?;
    item.set_enabled(enabled);
    Ok(())
}

/// Current state of every entry, keyed for persistence.
pub fn snapshot<'a, T: Toggle + 'a>(items: impl IntoIterator<Item = &'a T>) -> BTreeMap<String, bool> {
    items
        .into_iter()
        .map(|item| (item.key().to_string(), item.is_enabled()))
        .collect()
}
