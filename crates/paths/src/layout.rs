use std::path::{Path, PathBuf};

/// File name the selected theme is installed under.
///
/// Always the same name, so installing a new theme replaces the previous one.
pub const THEME_FILE_NAME: &str = "randomized-loading-screen-theme.package";

/// Directory (next to the executable) holding the theme package files.
pub const ASSETS_DIR_NAME: &str = "dlcs";

/// Provides access to the directories of one game setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    document_root: PathBuf,
    install_root: Option<PathBuf>,
}

impl Layout {
    /// Creates a layout for a document root, without an install root.
    pub fn new(document_root: impl Into<PathBuf>) -> Self {
        Self {
            document_root: document_root.into(),
            install_root: None,
        }
    }

    /// Creates a layout from the raw path strings kept in the settings.
    ///
    /// An empty install path means "not set".
    pub fn from_settings(document_path: &str, game_path: &str) -> Self {
        let layout = Self::new(document_path);
        if game_path.is_empty() {
            layout
        } else {
            layout.with_install_root(game_path)
        }
    }

    /// Sets the install root.
    pub fn with_install_root(mut self, install_root: impl Into<PathBuf>) -> Self {
        let install_root = install_root.into();
        self.install_root = if install_root.as_os_str().is_empty() {
            None
        } else {
            Some(install_root)
        };
        self
    }

    /// Returns the document root.
    pub fn document_root(&self) -> &Path {
        &self.document_root
    }

    /// Returns the install root, if one is set.
    pub fn install_root(&self) -> Option<&Path> {
        self.install_root.as_deref()
    }

    /// True when the document root is set and is an existing directory.
    pub fn has_valid_document_root(&self) -> bool {
        !self.document_root.as_os_str().is_empty() && self.document_root.is_dir()
    }

    /// Returns the directory the game loads package mods from.
    pub fn mods_dir(&self) -> PathBuf {
        self.document_root.join("Mods").join("Packages")
    }

    /// Returns the path the selected theme is installed to.
    pub fn theme_destination(&self) -> PathBuf {
        self.mods_dir().join(THEME_FILE_NAME)
    }

    /// Returns the install subdirectory of a pack, if an install root is set.
    pub fn pack_dir(&self, pack_id: &str) -> Option<PathBuf> {
        self.install_root.as_ref().map(|root| root.join(pack_id))
    }
}
