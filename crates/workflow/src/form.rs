//! Editable form state: paths plus the two catalogs.

use s3mp_catalog::{CacheCatalog, DlcRegistry};
use s3mp_paths::Layout;
use s3mp_settings::SettingsDocument;

/// Availability of every entry, as shown next to its toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Availability {
    /// Cache name and whether it currently matches anything.
    pub caches: Vec<(String, bool)>,
    /// DLC id and whether it is installed (always true without install root).
    pub dlcs: Vec<(String, bool)>,
}

impl Availability {
    pub fn cache(&self, key: &str) -> Option<bool> {
        lookup(&self.caches, key)
    }

    pub fn dlc(&self, key: &str) -> Option<bool> {
        lookup(&self.dlcs, key)
    }
}

fn lookup(list: &[(String, bool)], key: &str) -> Option<bool> {
    list.iter().find(|(k, _)| k == key).map(|(_, v)| *v)
}

/// Everything the user edits before confirming.
#[derive(Debug, Clone)]
pub struct Form {
    pub game_path: String,
    pub document_path: String,
    pub caches: CacheCatalog,
    pub dlcs: DlcRegistry,
    /// Whether confirming writes the settings file.
    pub save_settings: bool,
}

impl Form {
    /// Builds the form from the built-in catalogs and a loaded document.
    pub fn from_settings(doc: &SettingsDocument) -> Self {
        Self {
            game_path: doc.game_path.clone(),
            document_path: doc.document_path.clone(),
            caches: CacheCatalog::builtin(doc),
            dlcs: DlcRegistry::builtin(doc),
            save_settings: true,
        }
    }

    /// Directory layout for the current paths.
    pub fn layout(&self) -> Layout {
        Layout::from_settings(&self.document_path, &self.game_path)
    }

    /// Changes the install path and re-checks availability.
    pub fn set_game_path(&mut self, path: impl Into<String>) -> Availability {
        self.game_path = path.into();
        self.refresh_availability()
    }

    /// Changes the document path and re-checks availability.
    pub fn set_document_path(&mut self, path: impl Into<String>) -> Availability {
        self.document_path = path.into();
        self.refresh_availability()
    }

    /// Re-checks every entry against the current paths.
    ///
    /// Uninstalled DLCs are deselected as a side effect.
    pub fn refresh_availability(&mut self) -> Availability {
        let layout = self.layout();
        Availability {
            caches: self.caches.availability(layout.document_root()),
            dlcs: self.dlcs.gate_all(layout.install_root()),
        }
    }

    /// The document to persist for the current form.
    pub fn to_settings(&self) -> SettingsDocument {
        SettingsDocument {
            game_path: self.game_path.clone(),
            document_path: self.document_path.clone(),
            caches: self.caches.snapshot(),
            dlcs: self.dlcs.snapshot(),
        }
    }
}
