//! Settings persistence for the title screen randomizer and cache cleaner.
//!
//! The settings file is a flat, tab-indented JSON document:
//!
//! ```json
//! {
//! 	"game_path": "C:/Program Files (x86)/Electronic Arts/The Sims 3",
//! 	"document_path": "C:/Users/me/Documents/Electronic Arts/The Sims 3",
//! 	"caches": { "CASPartCache": true },
//! 	"dlcs": { "EP1": true }
//! }
//! ```
//!
//! Reading is lossy: a missing or corrupt file yields an empty
//! document, and a single bad field never fails the whole load.

mod document;
mod error;
mod store;

pub use document::SettingsDocument;
pub use error::SettingsError;
pub use store::{load, save, to_json, try_load};

/// Default settings file name, resolved against the application directory.
pub const SETTINGS_FILE_NAME: &str = "settings.json";
