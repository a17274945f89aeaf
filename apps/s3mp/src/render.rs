//! Terminal rendering of the form and run results.

use std::fmt::Write;

use clap::builder::styling::{AnsiColor, Style};
use s3mp_catalog::{PackKind, ThemeAction, Toggle};
use s3mp_workflow::{Availability, ExecutionSummary, Form};

/// Color theme selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Styles used when rendering.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    heading: Style,
    enabled: Style,
    disabled: Style,
    unavailable: Style,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                heading: AnsiColor::BrightCyan.on_default().bold(),
                enabled: AnsiColor::BrightGreen.on_default(),
                disabled: AnsiColor::White.on_default(),
                unavailable: AnsiColor::BrightBlack.on_default(),
            },
            Theme::Light => Self {
                heading: AnsiColor::Blue.on_default().bold(),
                enabled: AnsiColor::Green.on_default(),
                disabled: AnsiColor::Black.on_default(),
                unavailable: AnsiColor::BrightBlack.on_default(),
            },
        }
    }

    /// No escape codes at all, for pipes and tests.
    pub fn plain() -> Self {
        Self {
            heading: Style::new(),
            enabled: Style::new(),
            disabled: Style::new(),
            unavailable: Style::new(),
        }
    }

    fn paint(&self, style: Style, text: &str) -> String {
        format!("{}{text}{}", style.render(), style.render_reset())
    }
}

/// Renders the whole form with per-entry availability.
pub fn form(palette: &Palette, form: &Form, availability: &Availability) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", palette.paint(palette.heading, "Select Path"));
    let _ = writeln!(out, "  Installation folder (optional): {}", or_unset(&form.game_path));
    let _ = writeln!(out, "  Documents folder:               {}", or_unset(&form.document_path));
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", palette.paint(palette.heading, "Cache Cleaner"));
    for entry in form.caches.entries() {
        let available = availability.cache(entry.key()).unwrap_or(false);
        let _ = writeln!(out, "  {}", toggle_line(palette, entry, available, "nothing to delete"));
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", palette.paint(palette.heading, "Title Screen Selector"));
    for (kind, title) in [
        (PackKind::Expansion, "Expansion packs"),
        (PackKind::Stuff, "Stuff packs"),
    ] {
        let _ = writeln!(out, "  {title}");
        for entry in form.dlcs.list(kind) {
            let available = availability.dlc(entry.key()).unwrap_or(true);
            let _ = writeln!(out, "    {}", toggle_line(palette, entry, available, "not installed"));
        }
    }

    out
}

/// Renders what a completed run did.
pub fn summary(palette: &Palette, summary: &ExecutionSummary, dry_run: bool) -> String {
    let mut out = String::new();

    if summary.settings_saved {
        let _ = writeln!(out, "Settings saved.");
    }

    if dry_run {
        let _ = writeln!(out, "Would remove {} cache file(s):", summary.cleanup.planned.len());
        for path in &summary.cleanup.planned {
            let _ = writeln!(out, "  {}", path.display());
        }
    } else {
        let _ = writeln!(out, "Removed {} cache file(s).", summary.cleanup.removed.len());
    }
    for failed in &summary.cleanup.failed {
        let line = format!("  could not remove {}: {}", failed.path.display(), failed.message);
        let _ = writeln!(out, "{}", palette.paint(palette.unavailable, &line));
    }

    let chosen = palette.paint(palette.enabled, &summary.chosen_name);
    let _ = writeln!(out, "Title screen: {chosen}");
    match &summary.theme {
        ThemeAction::Installed { destination, .. } => {
            let _ = writeln!(out, "Theme installed to {}", destination.display());
        }
        ThemeAction::Cleared { .. } => {
            let _ = writeln!(out, "Default title screen restored.");
        }
    }

    out
}

fn toggle_line<T: Toggle>(palette: &Palette, entry: &T, available: bool, missing: &str) -> String {
    let label = format!("{:<28} ({})", entry.label(), entry.key());
    if !available {
        let text = format!("[-] {label} {missing}");
        return palette.paint(palette.unavailable, &text);
    }
    if entry.is_enabled() {
        palette.paint(palette.enabled, &format!("[x] {label}"))
    } else {
        palette.paint(palette.disabled, &format!("[ ] {label}"))
    }
}

fn or_unset(path: &str) -> &str {
    if path.is_empty() { "(not set)" } else { path }
}
