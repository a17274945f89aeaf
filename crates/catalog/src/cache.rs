//! Cache catalog: pattern-matched, regenerable game data.

use std::collections::BTreeMap;
use std::path::Path;

use s3mp_file_ops::RemovalReport;
use s3mp_settings::SettingsDocument;

use crate::builtin::{CACHES, CacheDef};
use crate::error::CatalogError;
use crate::toggle::{self, Toggle};

/// A named set of cache files eligible for deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    name: String,
    patterns: Vec<String>,
    enabled: bool,
    default_enabled: bool,
}

impl CacheEntry {
    /// Creates an entry, enabled according to its default.
    pub fn new<I, S>(name: impl Into<String>, patterns: I, default_enabled: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            patterns: patterns.into_iter().map(Into::into).collect(),
            enabled: default_enabled,
            default_enabled,
        }
    }

    fn from_def(def: &CacheDef, doc: &SettingsDocument) -> Self {
        let mut entry = Self::new(def.name, def.patterns.iter().copied(), def.default_enabled);
        entry.seed_from(doc);
        entry
    }

    /// Applies the persisted value for this entry, if any.
    pub fn seed_from(&mut self, doc: &SettingsDocument) {
        self.enabled = toggle::seed(doc.cache_enabled(&self.name), self.default_enabled);
    }

    /// Glob patterns, relative to the document root.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// True if at least one pattern matches under `root`.
    ///
    /// Only gates the UI affordance; [`remove`](Self::remove) does not
    /// consult it.
    pub fn exists(&self, root: &Path) -> bool {
        let exists = s3mp_file_ops::any_match(root, &self.patterns);

        if tracing::enabled!(tracing::Level::DEBUG) {
            let matches = s3mp_file_ops::expand_all(root, &self.patterns);
            let sample: Vec<_> = matches.iter().take(3).map(|p| p.display().to_string()).collect();
            tracing::debug!(cache = %self.name, exists, matches = matches.len(), sample = ?sample, "cache check");
        }

        exists
    }

    /// Deletes every file this entry matches under `root`, best-effort.
    pub fn remove(&self, root: &Path, dry_run: bool) -> RemovalReport {
        let report = s3mp_file_ops::remove_matches(root, &self.patterns, dry_run);
        if !dry_run {
            tracing::info!(
                cache = %self.name,
                removed = report.removed.len(),
                failed = report.failed.len(),
                "cache cleaned"
            );
        }
        report
    }
}

impl Toggle for CacheEntry {
    fn key(&self) -> &str {
        &self.name
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn default_enabled(&self) -> bool {
        self.default_enabled
    }
}

/// Ordered list of cache entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheCatalog {
    entries: Vec<CacheEntry>,
}

impl CacheCatalog {
    /// Builds the built-in catalog, seeded from the settings document.
    pub fn builtin(doc: &SettingsDocument) -> Self {
        Self {
            entries: CACHES.iter().map(|def| CacheEntry::from_def(def, doc)).collect(),
        }
    }

    /// Builds a catalog from explicit entries.
    pub fn from_entries(entries: Vec<CacheEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CacheEntry] {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Option<&CacheEntry> {
        self.entries.iter().find(|e| e.key() == key)
    }

    /// Selects or deselects every entry.
    pub fn set_all(&mut self, enabled: bool) {
        toggle::set_all(&mut self.entries, enabled);
    }

    /// Sets one entry by name.
    pub fn set_enabled(&mut self, key: &str, enabled: bool) -> Result<(), CatalogError> {
        toggle::set_by_key(&mut self.entries, key, enabled)
    }

    /// Existence of each entry's content under `root`, in catalog order.
    pub fn availability(&self, root: &Path) -> Vec<(String, bool)> {
        self.entries
            .iter()
            .map(|e| (e.name.clone(), e.exists(root)))
            .collect()
    }

    /// Removes every enabled entry under `root`, in catalog order.
    ///
    /// Always completes; per-file failures are collected in the report.
    pub fn remove_all(&self, root: &Path, dry_run: bool) -> RemovalReport {
        let mut report = RemovalReport::default();
        for entry in self.entries.iter().filter(|e| e.is_enabled()) {
            report.merge(entry.remove(root, dry_run));
        }
        report
    }

    /// Current toggles, keyed for persistence.
    pub fn snapshot(&self) -> BTreeMap<String, bool> {
        toggle::snapshot(&self.entries)
    }
}
