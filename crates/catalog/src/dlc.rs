//! DLC registry: install gating and random title-screen theme selection.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rand::Rng;
use rand::seq::SliceRandom;
use s3mp_paths::THEME_FILE_NAME;
use s3mp_settings::SettingsDocument;

use crate::builtin::{DlcDef, EXPANSION_PACKS, STUFF_PACKS};
use crate::error::{CatalogError, SelectionError, ThemeError};
use crate::toggle::{self, Toggle};

/// Category list a DLC belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackKind {
    /// Base game and expansion packs.
    Expansion,
    /// Stuff packs.
    Stuff,
}

/// What applying a selection did to the theme destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeAction {
    /// The entry's asset was copied over the destination.
    Installed { source: PathBuf, destination: PathBuf },
    /// The entry has no asset; the destination was cleared.
    Cleared { destination: PathBuf, removed: bool },
}

/// An optional content pack, associated with at most one theme asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DlcEntry {
    id: String,
    name: String,
    asset: String,
    enabled: bool,
    default_enabled: bool,
}

impl DlcEntry {
    /// Creates an entry, enabled according to its default.
    ///
    /// An empty `asset` means the pack has no theme to install.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        asset: impl Into<String>,
        default_enabled: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            asset: asset.into(),
            enabled: default_enabled,
            default_enabled,
        }
    }

    fn from_def(def: &DlcDef, doc: &SettingsDocument) -> Self {
        let mut entry = Self::new(def.id, def.name, def.asset, def.default_enabled);
        entry.seed_from(doc);
        entry
    }

    /// Applies the persisted value for this entry, if any.
    pub fn seed_from(&mut self, doc: &SettingsDocument) {
        self.enabled = toggle::seed(doc.dlc_enabled(&self.id), self.default_enabled);
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Theme asset file name, if the pack has one.
    pub fn asset_filename(&self) -> Option<&str> {
        (!self.asset.is_empty()).then_some(self.asset.as_str())
    }

    /// Reports whether the pack is installed, deselecting it if not.
    ///
    /// Without an install root (None or empty) gating is off: every pack
    /// counts as available and nothing is changed. Otherwise the pack is
    /// available iff `<install_root>/<id>` is a directory.
    pub fn gate_by_install(&mut self, install_root: Option<&Path>) -> bool {
        let Some(root) = install_root.filter(|r| !r.as_os_str().is_empty()) else {
            return true;
        };

        let installed = root.join(&self.id).is_dir();
        if !installed {
            if self.enabled {
                tracing::debug!(dlc = %self.id, "not installed, deselecting");
            }
            self.enabled = false;
        }
        installed
    }

    /// Installs this entry's theme into `mod_dir`, superseding any previous
    /// one. Entries without an asset clear the destination instead.
    pub fn apply_selection(&self, assets_dir: &Path, mod_dir: &Path) -> Result<ThemeAction, ThemeError> {
        let destination = mod_dir.join(THEME_FILE_NAME);

        let Some(asset) = self.asset_filename() else {
            // A leftover theme would override the pack's own title screen.
            let removed = match s3mp_file_ops::remove_if_present(&destination) {
                Ok(removed) => removed,
                Err(e) => {
                    tracing::warn!(file = %destination.display(), error = %e, "failed to clear theme");
                    false
                }
            };
            tracing::info!(dlc = %self.id, removed, "theme cleared");
            return Ok(ThemeAction::Cleared {
                destination,
                removed,
            });
        };

        let source = assets_dir.join(asset);
        if !source.is_file() {
            return Err(ThemeError::MissingAsset(source));
        }

        s3mp_file_ops::install_file(&source, &destination)?;
        tracing::info!(dlc = %self.id, asset, "theme installed");
        Ok(ThemeAction::Installed {
            source,
            destination,
        })
    }
}

impl Toggle for DlcEntry {
    fn key(&self) -> &str {
        &self.id
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

/// The two DLC category lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DlcRegistry {
    expansion_packs: Vec<DlcEntry>,
    stuff_packs: Vec<DlcEntry>,
}

impl DlcRegistry {
    /// Builds the built-in registry, seeded from the settings document.
    pub fn builtin(doc: &SettingsDocument) -> Self {
        Self {
            expansion_packs: EXPANSION_PACKS
                .iter()
                .map(|def| DlcEntry::from_def(def, doc))
                .collect(),
            stuff_packs: STUFF_PACKS
                .iter()
                .map(|def| DlcEntry::from_def(def, doc))
                .collect(),
        }
    }

    /// Builds a registry from explicit lists.
    pub fn new(expansion_packs: Vec<DlcEntry>, stuff_packs: Vec<DlcEntry>) -> Self {
        Self {
            expansion_packs,
            stuff_packs,
        }
    }

    pub fn list(&self, kind: PackKind) -> &[DlcEntry] {
        match kind {
            PackKind::Expansion => &self.expansion_packs,
            PackKind::Stuff => &self.stuff_packs,
        }
    }

    fn list_mut(&mut self, kind: PackKind) -> &mut [DlcEntry] {
        match kind {
            PackKind::Expansion => &mut self.expansion_packs,
            PackKind::Stuff => &mut self.stuff_packs,
        }
    }

    /// Every entry, expansion packs first.
    pub fn iter(&self) -> impl Iterator<Item = &DlcEntry> {
        self.expansion_packs.iter().chain(self.stuff_packs.iter())
    }

    fn iter_mut(&mut self) -> impl Iterator<Item = &mut DlcEntry> {
        self.expansion_packs
            .iter_mut()
            .chain(self.stuff_packs.iter_mut())
    }

    pub fn get(&self, key: &str) -> Option<&DlcEntry> {
        self.iter().find(|e| e.key() == key)
    }

    /// Selects or deselects every entry of one list.
    pub fn set_all(&mut self, kind: PackKind, enabled: bool) {
        toggle::set_all(self.list_mut(kind), enabled);
    }

    /// Sets one entry by id, in whichever list it lives.
    pub fn set_enabled(&mut self, key: &str, enabled: bool) -> Result<(), CatalogError> {
        let entry = self
            .iter_mut()
            .find(|e| e.key() == key)
            .ok_or_else(|| CatalogError::UnknownKey(key.to_string()))?;
        entry.set_enabled(enabled);
        Ok(())
    }

    /// Gates every entry against the install root, in registry order.
    pub fn gate_all(&mut self, install_root: Option<&Path>) -> Vec<(String, bool)> {
        self.iter_mut()
            .map(|e| {
                let available = e.gate_by_install(install_root);
                (e.id.clone(), available)
            })
            .collect()
    }

    /// Enabled entries across both lists.
    pub fn enabled(&self) -> Vec<&DlcEntry> {
        self.iter().filter(|e| e.is_enabled()).collect()
    }

    /// Picks one enabled entry uniformly at random across both lists.
    pub fn choose_one<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&DlcEntry, SelectionError> {
        self.enabled()
            .choose(rng)
            .copied()
            .ok_or(SelectionError::NothingEnabled)
    }

    /// Current toggles, keyed for persistence.
    pub fn snapshot(&self) -> BTreeMap<String, bool> {
        toggle::snapshot(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::fs;

    fn three_packs() -> DlcRegistry {
        DlcRegistry::new(
            vec![
                DlcEntry::new("EP1", "World Adventures", "ep1.package", true),
                DlcEntry::new("EP2", "Ambitions", "ep2.package", false),
            ],
            vec![
                DlcEntry::new("SP1", "High-End Loft Stuff", "sp1.package", true),
                DlcEntry::new("SP2", "Fast Lane Stuff", "sp2.package", true),
            ],
        )
    }

    #[test]
    fn builtin_defaults_all_enabled() {
        let registry = DlcRegistry::builtin(&SettingsDocument::default());
        assert_eq!(registry.list(PackKind::Expansion).len(), EXPANSION_PACKS.len());
        assert_eq!(registry.list(PackKind::Stuff).len(), STUFF_PACKS.len());
        assert!(registry.iter().all(|e| e.is_enabled() == e.default_enabled()));
    }

    #[test]
    fn builtin_seeded_from_document() {
        let mut doc = SettingsDocument::default();
        doc.dlcs.insert("EP4".into(), false);
        doc.dlcs.insert("SP8".into(), false);

        let registry = DlcRegistry::builtin(&doc);
        assert!(!registry.get("EP4").unwrap().is_enabled());
        assert!(!registry.get("SP8").unwrap().is_enabled());
        assert!(registry.get("EP5").unwrap().is_enabled());
    }

    #[test]
    fn gate_without_install_root_keeps_everything() {
        let mut registry = three_packs();
        let before = registry.clone();

        assert!(registry.gate_all(None).iter().all(|(_, ok)| *ok));
        assert!(registry.gate_all(Some(Path::new(""))).iter().all(|(_, ok)| *ok));
        assert_eq!(registry, before);
    }

    #[test]
    fn gate_deselects_missing_packs() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("EP1")).unwrap();
        // A plain file does not count as an installed pack.
        fs::write(tmp.path().join("SP1"), "x").unwrap();

        let mut registry = three_packs();
        let availability = registry.gate_all(Some(tmp.path()));

        assert_eq!(
            availability,
            vec![
                ("EP1".to_string(), true),
                ("EP2".to_string(), false),
                ("SP1".to_string(), false),
                ("SP2".to_string(), false),
            ]
        );
        assert!(registry.get("EP1").unwrap().is_enabled());
        assert!(!registry.get("SP1").unwrap().is_enabled());
        assert!(!registry.get("SP2").unwrap().is_enabled());
    }

    #[test]
    fn gate_does_not_reenable_installed() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("EP2")).unwrap();

        let mut entry = DlcEntry::new("EP2", "Ambitions", "ep2.package", false);
        assert!(entry.gate_by_install(Some(tmp.path())));
        assert!(!entry.is_enabled());
    }

    #[test]
    fn set_all_per_list() {
        let mut registry = three_packs();
        registry.set_all(PackKind::Stuff, false);
        assert!(registry.list(PackKind::Stuff).iter().all(|e| !e.is_enabled()));
        assert!(registry.get("EP1").unwrap().is_enabled());

        registry.set_all(PackKind::Expansion, true);
        assert!(registry.get("EP2").unwrap().is_enabled());
    }

    #[test]
    fn set_enabled_across_lists() {
        let mut registry = three_packs();
        registry.set_enabled("SP2", false).unwrap();
        registry.set_enabled("EP2", true).unwrap();
        assert!(!registry.get("SP2").unwrap().is_enabled());
        assert!(registry.get("EP2").unwrap().is_enabled());
        assert!(registry.set_enabled("EP99", true).is_err());
    }

    #[test]
    fn choose_from_nothing_fails() {
        let mut registry = three_packs();
        registry.set_all(PackKind::Expansion, false);
        registry.set_all(PackKind::Stuff, false);

        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            registry.choose_one(&mut rng).unwrap_err(),
            SelectionError::NothingEnabled
        );
    }

    #[test]
    fn choose_only_enabled() {
        let registry = three_packs();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            let chosen = registry.choose_one(&mut rng).unwrap();
            assert_ne!(chosen.id(), "EP2");
        }
    }

    #[test]
    fn choose_is_uniform_across_lists() {
        // 1 expansion + 2 stuff packs enabled: each should get ~1/3, not
        // 1/2 for the lone expansion pack.
        let registry = three_packs();
        let mut rng = StdRng::seed_from_u64(0x5153_4d50);
        let trials = 10_000;

        let mut counts: BTreeMap<String, u32> = BTreeMap::new();
        for _ in 0..trials {
            let chosen = registry.choose_one(&mut rng).unwrap();
            *counts.entry(chosen.id().to_string()).or_default() += 1;
        }

        assert_eq!(counts.len(), 3);
        let expected = trials as f64 / 3.0;
        let chi_square: f64 = counts
            .values()
            .map(|&observed| {
                let diff = observed as f64 - expected;
                diff * diff / expected
            })
            .sum();
        // 2 degrees of freedom, p = 0.001
        assert!(chi_square < 13.816, "chi-square {chi_square} for {counts:?}");
    }

    #[test]
    fn apply_copies_asset() {
        let tmp = tempfile::tempdir().unwrap();
        let assets = tmp.path().join("dlcs");
        let mods = tmp.path().join("Mods").join("Packages");
        fs::create_dir_all(&assets).unwrap();
        fs::write(assets.join("ep1.package"), b"DBPF ep1 theme").unwrap();

        let entry = DlcEntry::new("EP1", "World Adventures", "ep1.package", true);
        let action = entry.apply_selection(&assets, &mods).unwrap();

        let destination = mods.join(THEME_FILE_NAME);
        assert_eq!(
            action,
            ThemeAction::Installed {
                source: assets.join("ep1.package"),
                destination: destination.clone(),
            }
        );
        assert_eq!(fs::read(&destination).unwrap(), b"DBPF ep1 theme");
    }

    #[test]
    fn apply_supersedes_previous_theme() {
        let tmp = tempfile::tempdir().unwrap();
        let assets = tmp.path().join("dlcs");
        let mods = tmp.path().join("mods");
        fs::create_dir_all(&assets).unwrap();
        fs::create_dir_all(&mods).unwrap();
        fs::write(assets.join("sp9.package"), b"movie").unwrap();
        fs::write(mods.join(THEME_FILE_NAME), b"previous theme").unwrap();

        let entry = DlcEntry::new("SP9", "Movie Stuff", "sp9.package", true);
        entry.apply_selection(&assets, &mods).unwrap();
        assert_eq!(fs::read(mods.join(THEME_FILE_NAME)).unwrap(), b"movie");
    }

    #[test]
    fn apply_without_asset_clears_destination() {
        let tmp = tempfile::tempdir().unwrap();
        let mods = tmp.path().join("mods");
        fs::create_dir_all(&mods).unwrap();
        fs::write(mods.join(THEME_FILE_NAME), b"stale").unwrap();

        let entry = DlcEntry::new("EP11", "Into the Future", "", true);
        assert_eq!(entry.asset_filename(), None);

        let action = entry.apply_selection(tmp.path(), &mods).unwrap();
        assert!(matches!(action, ThemeAction::Cleared { removed: true, .. }));
        assert!(!mods.join(THEME_FILE_NAME).exists());

        // Nothing left to clear is fine too.
        let action = entry.apply_selection(tmp.path(), &mods).unwrap();
        assert!(matches!(action, ThemeAction::Cleared { removed: false, .. }));
    }

    #[test]
    fn apply_with_missing_asset_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let entry = DlcEntry::new("EP3", "Late Night", "ep3.package", true);
        let result = entry.apply_selection(tmp.path(), &tmp.path().join("mods"));
        assert!(matches!(result, Err(ThemeError::MissingAsset(_))));
        assert!(!tmp.path().join("mods").join(THEME_FILE_NAME).exists());
    }
}
