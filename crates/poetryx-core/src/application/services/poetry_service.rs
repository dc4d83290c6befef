//! Poetry Service - drives the external `poetry` executable.
//!
//! Owns the resolved executable path and the two exit-code-gated
//! invocations the pipeline needs:
//!
//! 1. `poetry new <name> --directory=<root>` (scaffolding)
//! 2. `poetry install --directory=<project>` (dependency installation)

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::{
    application::ports::{CommandOutput, CommandRunner, Filesystem},
    domain::Project,
    error::{CoreError, CoreResult},
};

/// Drives the external Poetry tool through the [`CommandRunner`] port.
pub struct PoetryService {
    executable: PathBuf,
    runner: Box<dyn CommandRunner>,
    filesystem: Box<dyn Filesystem>,
}

impl PoetryService {
    /// Create a service around a resolved `poetry` executable.
    pub fn new(
        executable: PathBuf,
        runner: Box<dyn CommandRunner>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            executable,
            runner,
            filesystem,
        }
    }

    /// Path of the executable this service drives.
    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Scaffold a new project under `root`.
    ///
    /// Fails with [`CoreError::ProjectExists`] if `root/name` already exists —
    /// checked *before* the external tool is invoked, so a re-run never
    /// spawns a second `poetry new`. On success the returned handle is
    /// trusted from Poetry's exit code alone; the generated tree is not
    /// re-verified, and callers relying on specific generated files must
    /// tolerate their absence.
    #[instrument(skip(self), fields(root = %root.display()))]
    pub fn create_project(&self, root: &Path, name: &str) -> CoreResult<Project> {
        let project_path = root.join(name);
        if self.filesystem.exists(&project_path) {
            return Err(CoreError::ProjectExists { path: project_path });
        }

        let args = vec![
            "new".to_owned(),
            name.to_owned(),
            format!("--directory={}", root.display()),
        ];
        let output = self.runner.run(&self.executable, &args)?;
        self.gate("new", output)?;

        info!(name, "`poetry new` ran successfully");
        Ok(Project::new(name, project_path))
    }

    /// Run Poetry's install step against a finished project.
    #[instrument(skip(self), fields(project = project.name()))]
    pub fn install(&self, project: &Project) -> CoreResult<()> {
        let args = vec![
            "install".to_owned(),
            format!("--directory={}", project.path().display()),
        ];
        let output = self.runner.run(&self.executable, &args)?;
        self.gate("install", output)?;

        info!("`poetry install` ran successfully");
        Ok(())
    }

    /// Translate a nonzero exit into [`CoreError::ExternalTool`].
    fn gate(&self, command: &str, output: CommandOutput) -> CoreResult<()> {
        if output.success() {
            return Ok(());
        }
        Err(CoreError::ExternalTool {
            command: command.to_owned(),
            status: output.status,
            stderr: output.stderr,
        })
    }
}
