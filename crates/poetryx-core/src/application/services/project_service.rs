//! Project Service - idempotent mutations of generated project artifacts.
//!
//! Every operation here follows the same shape: inspect current state,
//! short-circuit when the desired state already holds, otherwise apply the
//! smallest change that establishes it. Re-running any operation with
//! identical inputs produces no further observable change.

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Filesystem, ManifestStore},
    domain::{IgnoreRules, Project, entry},
    error::CoreResult,
};

/// Mutates the artifacts `poetry new` leaves behind: the build manifest,
/// the ignore file, the entry file, and scaffold subdirectories.
pub struct ProjectService {
    manifests: Box<dyn ManifestStore>,
    filesystem: Box<dyn Filesystem>,
}

impl ProjectService {
    pub fn new(manifests: Box<dyn ManifestStore>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            manifests,
            filesystem,
        }
    }

    /// Register `name -> target` in the manifest's `[tool.poetry.scripts]`
    /// table.
    ///
    /// Read-merge-write: the manifest is read fully, the scripts table is
    /// deep-copied and updated, and the whole document is rewritten. When
    /// the entry is already present with the same target, **no file write
    /// occurs at all** — the returned `false` makes that observable.
    ///
    /// Read and write failures propagate unchanged.
    #[instrument(skip(self), fields(project = project.name()))]
    pub fn add_script(&self, project: &Project, name: &str, target: &str) -> CoreResult<bool> {
        let manifest = self.manifests.read(project)?;
        match manifest.with_script(name, target) {
            None => {
                debug!(name, target, "script already registered");
                Ok(false)
            }
            Some(updated) => {
                self.manifests.write(project, &updated)?;
                info!(name, target, "script registered");
                Ok(true)
            }
        }
    }

    /// Recursively create `project/<name>`. Silently succeeds when the
    /// directory already exists.
    #[instrument(skip(self), fields(project = project.name()))]
    pub fn ensure_directory(&self, project: &Project, name: &str) -> CoreResult<()> {
        self.filesystem.create_dir_all(&project.path().join(name))
    }

    /// Append `name` as a directory-qualified pattern (`name/`) to the
    /// project's ignore file, unless the candidate is already covered.
    ///
    /// The membership test compiles the current ignore file into
    /// [`IgnoreRules`] and evaluates the *candidate path being added* — a
    /// path counts as covered only when the last matching rule in file
    /// order is a positive match. Returns whether a line was appended.
    #[instrument(skip(self), fields(project = project.name()))]
    pub fn add_ignored_path(&self, project: &Project, name: &str) -> CoreResult<bool> {
        let ignore_path = project.ignore_path();
        let content = match self.filesystem.read_to_string(&ignore_path)? {
            Some(content) => content,
            None => {
                self.filesystem.write_file(&ignore_path, "")?;
                String::new()
            }
        };

        let rules = IgnoreRules::parse(&content);
        if rules.is_ignored(name) {
            debug!(name, "path already ignored");
            return Ok(false);
        }

        self.filesystem
            .append_file(&ignore_path, &format!("{name}/\n"))?;
        info!(name, "path added to ignore file");
        Ok(true)
    }

    /// Write the canonical entry-point stub into `<name>/__init__.py`.
    ///
    /// A file with any existing content is left untouched; the write only
    /// happens after the existence/emptiness check passes, so the stub
    /// never clobbers user edits. Returns whether the stub was written.
    #[instrument(skip(self), fields(project = project.name()))]
    pub fn ensure_default_entry_file(&self, project: &Project) -> CoreResult<bool> {
        let entry_path = project.entry_file_path();
        let existing = self.filesystem.read_to_string(&entry_path)?;
        if !entry::needs_initialization(existing.as_deref()) {
            debug!("entry file already has content");
            return Ok(false);
        }

        self.filesystem
            .write_file(&entry_path, entry::DEFAULT_ENTRY_SOURCE)?;
        info!(path = %entry_path.display(), "entry file initialized");
        Ok(true)
    }
}
