use std::path::PathBuf;

use crate::PathsError;

/// Returns the document root under the user's Documents folder.
pub fn document_root() -> Result<PathBuf, PathsError> {
    let profile = std::env::var_os("USERPROFILE")
        .map(PathBuf::from)
        .ok_or(PathsError::NoHome)?;

    let dir = profile
        .join("Documents")
        .join("Electronic Arts")
        .join("The Sims 3");
    if dir.is_dir() {
        Ok(dir)
    } else {
        Err(PathsError::DocumentRootNotFound)
    }
}

/// Returns the install root recorded in the registry by the EA installer.
pub fn install_root() -> Result<PathBuf, PathsError> {
    // 32-bit installer on 64-bit Windows
    if let Ok(path) = read_install_registry(r"SOFTWARE\WOW6432Node\Sims\The Sims 3") {
        return Ok(path);
    }

    if let Ok(path) = read_install_registry(r"SOFTWARE\Sims\The Sims 3") {
        return Ok(path);
    }

    Err(PathsError::InstallRootNotFound)
}

fn read_install_registry(subkey: &str) -> Result<PathBuf, PathsError> {
    use winreg::RegKey;
    use winreg::enums::HKEY_LOCAL_MACHINE;

    let hklm = RegKey::predef(HKEY_LOCAL_MACHINE);
    let key = hklm
        .open_subkey(subkey)
        .map_err(|_| PathsError::InstallRootNotFound)?;
    let install_dir: String = key
        .get_value("Install Dir")
        .map_err(|_| PathsError::InstallRootNotFound)?;
    Ok(PathBuf::from(install_dir))
}
