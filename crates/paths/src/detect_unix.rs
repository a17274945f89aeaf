use std::path::{Path, PathBuf};

use crate::PathsError;

/// Returns the document root on Linux/Unix systems.
///
/// The game only runs through Wine here, so besides a plain
/// `~/Documents` checkout the default Wine prefix is searched too.
pub fn document_root() -> Result<PathBuf, PathsError> {
    let home = home_dir()?;
    let user = std::env::var("USER").unwrap_or_default();
    document_root_in(&home, &user)
}

/// Returns the install root from the default Wine prefix.
pub fn install_root() -> Result<PathBuf, PathsError> {
    let home = home_dir()?;
    install_root_in(&home)
}

pub(crate) fn document_root_in(home: &Path, user: &str) -> Result<PathBuf, PathsError> {
    let mut candidates = vec![home.join("Documents")];
    if !user.is_empty() {
        let wine_user = home.join(".wine").join("drive_c").join("users").join(user);
        candidates.push(wine_user.join("Documents"));
        candidates.push(wine_user.join("My Documents"));
    }

    candidates
        .into_iter()
        .map(|docs| docs.join("Electronic Arts").join("The Sims 3"))
        .find(|dir| dir.is_dir())
        .ok_or(PathsError::DocumentRootNotFound)
}

pub(crate) fn install_root_in(home: &Path) -> Result<PathBuf, PathsError> {
    let drive_c = home.join(".wine").join("drive_c");

    ["Program Files (x86)", "Program Files"]
        .iter()
        .map(|pf| drive_c.join(pf).join("Electronic Arts").join("The Sims 3"))
        .find(|dir| dir.is_dir())
        .ok_or(PathsError::InstallRootNotFound)
}

fn home_dir() -> Result<PathBuf, PathsError> {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .ok_or(PathsError::NoHome)
}
