//! The confirm/execute state machine.

use std::path::PathBuf;

use rand::Rng;
use s3mp_catalog::{ThemeAction, Toggle};
use s3mp_file_ops::RemovalReport;

use crate::error::WorkflowError;
use crate::form::Form;

/// Workflow lifecycle. `Done` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Idle,
    Done,
}

/// Fixed locations and modes for one run.
#[derive(Debug, Clone)]
pub struct Options {
    /// Where the settings document is written.
    pub settings_path: PathBuf,
    /// Directory holding the theme package files.
    pub assets_dir: PathBuf,
    /// List cache deletions instead of performing them.
    pub dry_run: bool,
}

/// What a completed run did.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    pub settings_saved: bool,
    pub cleanup: RemovalReport,
    /// Id of the chosen DLC.
    pub chosen_id: String,
    /// Display name of the chosen DLC.
    pub chosen_name: String,
    pub theme: ThemeAction,
}

/// Runs the confirm action over a form.
#[derive(Debug)]
pub struct Workflow {
    form: Form,
    options: Options,
    state: State,
}

impl Workflow {
    pub fn new(form: Form, options: Options) -> Self {
        Self {
            form,
            options,
            state: State::Idle,
        }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Executes the workflow with the thread-local RNG.
    pub fn execute(&mut self) -> Result<ExecutionSummary, WorkflowError> {
        self.execute_with(&mut rand::thread_rng())
    }

    /// Executes the workflow with the given RNG.
    ///
    /// On error the workflow stays `Idle` so the user can fix the form and
    /// confirm again. Cache deletion is not undone when a later step fails.
    pub fn execute_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<ExecutionSummary, WorkflowError> {
        if self.state == State::Done {
            return Err(WorkflowError::AlreadyDone);
        }

        // 1. Validate.
        let layout = self.form.layout();
        if !layout.has_valid_document_root() {
            return Err(WorkflowError::Directory(layout.document_root().to_path_buf()));
        }

        // 2. Persist.
        let settings_saved = if self.form.save_settings {
            s3mp_settings::save(&self.options.settings_path, &self.form.to_settings())?;
            tracing::info!(path = %self.options.settings_path.display(), "settings saved");
            true
        } else {
            false
        };

        // 3. Clean caches.
        let cleanup = self
            .form
            .caches
            .remove_all(layout.document_root(), self.options.dry_run);
        if !cleanup.is_clean() {
            tracing::warn!(failed = cleanup.failed.len(), "some cache files could not be removed");
        }

        // 4. Pick a DLC. Packs missing from the install root are never eligible.
        self.form.dlcs.gate_all(layout.install_root());
        let chosen = self.form.dlcs.choose_one(rng)?;
        tracing::info!(dlc = %chosen.id(), name = %chosen.label(), "chosen title screen");

        // 5. Install its theme.
        let theme = chosen.apply_selection(&self.options.assets_dir, &layout.mods_dir())?;

        let summary = ExecutionSummary {
            settings_saved,
            cleanup,
            chosen_id: chosen.id().to_string(),
            chosen_name: chosen.label().to_string(),
            theme,
        };

        self.state = State::Done;
        Ok(summary)
    }
}
