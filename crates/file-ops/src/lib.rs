//! File operations for cache cleanup and theme installation.
//!
//! Patterns are always resolved relative to a root directory. Deletion is
//! best-effort: every matched file is attempted independently and failures
//! are collected, never raised.

mod delete;
mod install;
mod pattern;

pub use delete::{FailedRemoval, RemovalFailure, RemovalReport, remove_files, remove_matches};
pub use install::{install_file, remove_if_present};
pub use pattern::{any_match, expand, expand_all, match_options};
