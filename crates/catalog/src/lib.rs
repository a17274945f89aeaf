//! Cache and DLC catalogs.
//!
//! Both catalogs are flat lists of toggles seeded from the settings
//! document. They share the [`Toggle`] behavior but differ in what
//! "content exists" means and in what applying an entry does:
//!
//! - **Caches** match glob patterns under the document root and are deleted
//!   best-effort.
//! - **DLCs** are gated by a per-pack directory under the install root; one
//!   enabled DLC is picked uniformly at random and its theme installed.

pub mod builtin;
pub mod cache;
pub mod dlc;
pub mod error;
pub mod toggle;

pub use cache::{CacheCatalog, CacheEntry};
pub use dlc::{DlcEntry, DlcRegistry, PackKind, ThemeAction};
pub use error::{CatalogError, SelectionError, ThemeError};
pub use toggle::Toggle;
