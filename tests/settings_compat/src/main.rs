fn main() {
    println!("Run `cargo test -p settings-compat` to execute settings file compatibility tests.");
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use s3mp_catalog::builtin::{CACHES, EXPANSION_PACKS, STUFF_PACKS};
    use s3mp_catalog::{CacheCatalog, DlcRegistry, Toggle};
    use s3mp_settings::{SettingsDocument, SettingsError};

    /// Returns the path to the fixtures directory.
    fn fixtures_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
    }

    /// Loads a fixture JSON file and returns it as a `serde_json::Value`.
    fn load_fixture(name: &str) -> serde_json::Value {
        let path = fixtures_dir().join(name);
        let data = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()));
        serde_json::from_str(&data)
            .unwrap_or_else(|e| panic!("failed to parse fixture {}: {e}", path.display()))
    }

    fn load_document(name: &str) -> SettingsDocument {
        s3mp_settings::try_load(&fixtures_dir().join(name))
            .unwrap_or_else(|e| panic!("failed to load {name}: {e}"))
    }

    #[test]
    fn full_file_roundtrips() {
        let fixture = load_fixture("full.json");
        let doc = load_document("full.json");

        let written = s3mp_settings::to_json(&doc).unwrap();
        let reparsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(fixture, reparsed, "roundtrip mismatch:\n  file: {fixture}\n  ours: {reparsed}");
    }

    #[test]
    fn full_file_is_tab_indented() {
        let raw = fs::read_to_string(fixtures_dir().join("full.json")).unwrap();
        let written = s3mp_settings::to_json(&load_document("full.json")).unwrap();
        assert!(raw.contains("\n\t\"game_path\""));
        assert!(written.contains("\n\t\"game_path\""));
        assert!(written.contains("\n\t\t\"CASPartCache\": true"));
    }

    #[test]
    fn full_file_covers_builtin_catalogs() {
        let doc = load_document("full.json");
        assert_eq!(doc.caches.len(), CACHES.len());
        assert_eq!(doc.dlcs.len(), EXPANSION_PACKS.len() + STUFF_PACKS.len());
        for def in CACHES {
            assert!(doc.caches.contains_key(def.name), "missing cache {}", def.name);
        }
        for def in EXPANSION_PACKS.iter().chain(STUFF_PACKS) {
            assert!(doc.dlcs.contains_key(def.id), "missing dlc {}", def.id);
        }
    }

    #[test]
    fn full_file_seeds_catalogs() {
        let doc = load_document("full.json");
        let caches = CacheCatalog::builtin(&doc);
        let dlcs = DlcRegistry::builtin(&doc);

        assert!(caches.get("IGACache").unwrap().is_enabled());
        assert!(!caches.get("DCCache").unwrap().is_enabled());
        assert!(!dlcs.get("EP4").unwrap().is_enabled());
        assert!(!dlcs.get("SP6").unwrap().is_enabled());
        assert!(dlcs.get("EP11").unwrap().is_enabled());

        assert_eq!(caches.snapshot(), doc.caches);
        assert_eq!(dlcs.snapshot(), doc.dlcs);
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let doc = load_document("partial.json");
        assert_eq!(doc.game_path, "");
        assert!(doc.dlcs.is_empty());

        let caches = CacheCatalog::builtin(&doc);
        assert!(caches.get("DCCache").unwrap().is_enabled());
        assert!(caches.get("CASPartCache").unwrap().is_enabled());
        assert!(caches.get("RetiredCache").is_none());

        let dlcs = DlcRegistry::builtin(&doc);
        assert!(dlcs.iter().all(|d| d.is_enabled()));
    }

    #[test]
    fn wrong_types_are_dropped_per_field() {
        let doc = load_document("wrong_types.json");
        assert_eq!(doc.game_path, "");
        assert_eq!(doc.document_path, "/docs");
        assert!(doc.caches.is_empty());
        assert_eq!(doc.dlcs.len(), 1);
        assert_eq!(doc.dlc_enabled("EP2"), Some(false));
        assert_eq!(doc.dlc_enabled("EP1"), None);
    }

    #[test]
    fn malformed_file_is_an_error_but_load_recovers() {
        let path = fixtures_dir().join("malformed.json");
        assert!(matches!(
            s3mp_settings::try_load(&path),
            Err(SettingsError::Json(_))
        ));
        assert!(s3mp_settings::load(&path).is_empty());
    }
}
