//! Command dispatch.

use std::io::IsTerminal;

use anyhow::{Context, bail};
use s3mp_catalog::{CatalogError, PackKind};
use s3mp_settings::SettingsDocument;
use s3mp_workflow::{Form, Options, Workflow, WorkflowError};

use crate::cli::{Cli, Command, FormArgs, RunArgs};
use crate::render::{self, Palette, Theme};

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let settings_path = s3mp_paths::resolve_in_app_dir(&cli.settings);
    let palette = palette(&cli);

    match &cli.command {
        Command::Show(args) => {
            let doc = s3mp_settings::load(&settings_path);
            let mut form = build_form(&doc, args)?;
            let availability = form.refresh_availability();
            print!("{}", render::form(&palette, &form, &availability));
            Ok(())
        }
        Command::Run(args) => {
            let doc = s3mp_settings::load(&settings_path);
            run_workflow(&cli, settings_path, &doc, args, &palette)
        }
        Command::Detect => {
            detect();
            Ok(())
        }
    }
}

fn palette(cli: &Cli) -> Palette {
    if !std::io::stdout().is_terminal() {
        return Palette::plain();
    }
    let theme = if cli.light { Theme::Light } else { Theme::Dark };
    Palette::for_theme(theme)
}

fn run_workflow(
    cli: &Cli,
    settings_path: std::path::PathBuf,
    doc: &SettingsDocument,
    args: &RunArgs,
    palette: &Palette,
) -> anyhow::Result<()> {
    let mut form = build_form(doc, &args.form)?;
    form.save_settings = !args.no_save;
    form.refresh_availability();

    let assets_dir = args
        .assets_dir
        .clone()
        .unwrap_or_else(|| s3mp_paths::resolve_in_app_dir(s3mp_paths::ASSETS_DIR_NAME));

    let options = Options {
        settings_path,
        assets_dir,
        dry_run: cli.debug,
    };

    let mut workflow = Workflow::new(form, options);
    let summary = workflow.execute().map_err(|e| match e {
        WorkflowError::Directory(_) => anyhow::Error::new(e).context("Directory Error"),
        WorkflowError::Selection(_) => anyhow::Error::new(e).context("Selection Error"),
        other => anyhow::Error::new(other),
    })?;

    print!("{}", render::summary(palette, &summary, cli.debug));
    Ok(())
}

/// Builds the form from the loaded document and command-line edits.
///
/// Paths still empty afterwards are filled by auto-detection, unless the
/// user passed them explicitly.
fn build_form(doc: &SettingsDocument, args: &FormArgs) -> anyhow::Result<Form> {
    let mut form = apply_args(Form::from_settings(doc), args)?;

    if form.document_path.is_empty() && args.document_path.is_none() {
        match s3mp_paths::detect_document_root() {
            Ok(path) => form.document_path = path.to_string_lossy().into_owned(),
            Err(e) => tracing::debug!(error = %e, "no document folder detected"),
        }
    }
    if form.game_path.is_empty() && args.game_path.is_none() {
        match s3mp_paths::detect_install_root() {
            Ok(path) => form.game_path = path.to_string_lossy().into_owned(),
            Err(e) => tracing::debug!(error = %e, "no installation detected"),
        }
    }

    Ok(form)
}

/// Applies path overrides, bulk selections and per-key toggles, in that order.
fn apply_args(mut form: Form, args: &FormArgs) -> anyhow::Result<Form> {
    if let Some(path) = &args.game_path {
        form.game_path = path.clone();
    }
    if let Some(path) = &args.document_path {
        form.document_path = path.clone();
    }

    if args.all_caches || args.no_caches {
        form.caches.set_all(args.all_caches);
    }
    if args.all_eps || args.no_eps {
        form.dlcs.set_all(PackKind::Expansion, args.all_eps);
    }
    if args.all_sps || args.no_sps {
        form.dlcs.set_all(PackKind::Stuff, args.all_sps);
    }

    for key in &args.enable {
        set_key(&mut form, key, true)?;
    }
    for key in &args.disable {
        set_key(&mut form, key, false)?;
    }

    Ok(form)
}

fn set_key(form: &mut Form, key: &str, enabled: bool) -> anyhow::Result<()> {
    match form.caches.set_enabled(key, enabled) {
        Err(CatalogError::UnknownKey(_)) => {}
        other => return other.map_err(Into::into),
    }
    match form.dlcs.set_enabled(key, enabled) {
        Err(CatalogError::UnknownKey(_)) => {
            bail!("unknown cache or DLC: {key}")
        }
        other => other.with_context(|| format!("failed to toggle {key}")),
    }
}

fn detect() {
    match s3mp_paths::detect_document_root() {
        Ok(path) => println!("Documents folder:    {}", path.display()),
        Err(e) => println!("Documents folder:    {e}"),
    }
    match s3mp_paths::detect_install_root() {
        Ok(path) => println!("Installation folder: {}", path.display()),
        Err(e) => println!("Installation folder: {e}"),
    }
}
