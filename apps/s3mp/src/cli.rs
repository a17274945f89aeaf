//! Command-line interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use s3mp_settings::SETTINGS_FILE_NAME;

#[derive(Debug, Parser)]
#[command(name = "s3mp", version, about = "The Sims 3 Management Program")]
pub struct Cli {
    /// Enable light mode
    #[arg(long, short = 'l', global = true)]
    pub light: bool,

    /// Enable debug mode: list cache files instead of deleting them
    #[arg(long, short = 'd', global = true)]
    pub debug: bool,

    /// Name of the settings file (relative to the program folder)
    #[arg(long, global = true, value_name = "PATH", default_value = SETTINGS_FILE_NAME)]
    pub settings: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show paths, cache toggles and DLC toggles with their availability
    Show(FormArgs),
    /// Confirm: save settings, clean caches and install a random title screen
    Run(RunArgs),
    /// Print auto-detected game folders
    Detect,
}

/// Edits applied to the loaded settings before showing or running.
#[derive(Debug, Clone, Default, Args)]
pub struct FormArgs {
    /// Path to The Sims 3 installation folder (optional, empty to unset)
    #[arg(long, value_name = "PATH")]
    pub game_path: Option<String>,

    /// Path to The Sims 3 in your Documents folder
    #[arg(long, value_name = "PATH")]
    pub document_path: Option<String>,

    /// Enable a cache or DLC by key (repeatable)
    #[arg(long, value_name = "KEY")]
    pub enable: Vec<String>,

    /// Disable a cache or DLC by key (repeatable)
    #[arg(long, value_name = "KEY")]
    pub disable: Vec<String>,

    /// Select all caches
    #[arg(long, conflicts_with = "no_caches")]
    pub all_caches: bool,

    /// Deselect all caches
    #[arg(long)]
    pub no_caches: bool,

    /// Select all expansion packs
    #[arg(long, conflicts_with = "no_eps")]
    pub all_eps: bool,

    /// Deselect all expansion packs
    #[arg(long)]
    pub no_eps: bool,

    /// Select all stuff packs
    #[arg(long, conflicts_with = "no_sps")]
    pub all_sps: bool,

    /// Deselect all stuff packs
    #[arg(long)]
    pub no_sps: bool,
}

#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub form: FormArgs,

    /// Do not write the settings file
    #[arg(long)]
    pub no_save: bool,

    /// Folder holding the title screen packages
    #[arg(long, value_name = "PATH")]
    pub assets_dir: Option<PathBuf>,
}
