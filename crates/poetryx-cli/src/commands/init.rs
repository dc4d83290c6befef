//! `poetryx init` — the full bootstrap pipeline.
//!
//! Locate `poetry` → scaffold the project → provision scaffold directories
//! and ignore entries → initialize the entry file → register the run script
//! → install. All steps run sequentially; the first failure aborts the rest.
//! Artifacts created by earlier steps are not rolled back — every mutation
//! step is idempotent, so a re-run picks up where the failed run left off
//! (scaffolding itself fails fast instead, refusing to touch an existing
//! project directory).

use std::path::PathBuf;

use tracing::{debug, instrument};

use poetryx_adapters::{LocalFilesystem, SystemCommandRunner, TomlManifestStore, locator};
use poetryx_core::{
    application::{PoetryService, ProjectService},
    error::CoreError,
};

use crate::{
    cli::InitArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Run the bootstrap pipeline for one project.
#[instrument(skip_all, fields(name = %args.name))]
pub fn execute(args: InitArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    validate_name(&args.name)?;

    let executable = resolve_executable(&args, &config)?;
    debug!(executable = %executable.display(), "using poetry executable");

    let root = match args.directory {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let poetry = PoetryService::new(
        executable,
        Box::new(SystemCommandRunner::new()),
        Box::new(LocalFilesystem::new()),
    );
    let projects = ProjectService::new(
        Box::new(TomlManifestStore::new()),
        Box::new(LocalFilesystem::new()),
    );

    let project = poetry.create_project(&root, &args.name)?;
    output.success(&format!(
        "Created project at {}",
        project.path().display()
    ))?;

    for directory in &config.scaffold.directories {
        projects.ensure_directory(&project, directory)?;
        output.print(&format!("  created directory {directory}/"))?;
        if projects.add_ignored_path(&project, directory)? {
            output.print(&format!("  added {directory}/ to .gitignore"))?;
        }
    }

    if projects.ensure_default_entry_file(&project)? {
        output.success(&format!("Initialized {}/__init__.py", args.name))?;
    }

    let script_name = &config.scaffold.script_name;
    let target = format!("{}:main", args.name);
    if projects.add_script(&project, script_name, &target)? {
        output.success(&format!("Registered script {script_name} = \"{target}\""))?;
    }

    if args.no_install {
        output.warning("Skipping `poetry install` (--no-install)")?;
    } else {
        output.info("Running `poetry install`...")?;
        poetry.install(&project)?;
        output.success("Dependencies installed")?;
    }

    Ok(())
}

/// Resolve the Poetry executable: explicit flag, then config, then the
/// platform search path.
///
/// A resolution failure is always surfaced as [`CliError::PoetryNotFound`]
/// so the user gets remediation guidance instead of a bare error.
fn resolve_executable(args: &InitArgs, config: &AppConfig) -> CliResult<PathBuf> {
    let explicit = args.poetry_path.as_ref().or(config.poetry.path.as_ref());
    match explicit {
        Some(path) => locator::locate_at(path).map_err(|err| match err {
            CoreError::ExecutableNotFound => CliError::PoetryNotFound {
                explicit: Some(path.clone()),
            },
            other => CliError::Core(other),
        }),
        None => locator::locate_from_search_path().map_err(|err| match err {
            CoreError::ExecutableNotFound => CliError::PoetryNotFound { explicit: None },
            other => CliError::Core(other),
        }),
    }
}

/// Reject names Poetry itself would choke on.
fn validate_name(name: &str) -> CliResult<()> {
    let reason = if name.is_empty() {
        Some("must not be empty")
    } else if name.chars().any(char::is_whitespace) {
        Some("must not contain whitespace")
    } else if name.contains(['/', '\\']) {
        Some("must not contain path separators")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(CliError::InvalidProjectName {
            name: name.to_owned(),
            reason: reason.to_owned(),
        }),
        None => Ok(()),
    }
}
