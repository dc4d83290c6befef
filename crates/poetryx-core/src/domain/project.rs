//! The [`Project`] handle: name plus on-disk location of a scaffolded project.

use std::path::{Path, PathBuf};

/// Conventional file names inside a Poetry project tree.
pub const MANIFEST_FILE_NAME: &str = "pyproject.toml";
pub const IGNORE_FILE_NAME: &str = ".gitignore";
pub const ENTRY_FILE_NAME: &str = "__init__.py";

/// Handle to a scaffolded Poetry project.
///
/// Created once by [`PoetryService::create_project`] and immutable
/// thereafter; it identifies the filesystem location of every generated
/// artifact. The handle owns no open resources — each operation on the
/// project opens, uses, and closes what it needs.
///
/// [`PoetryService::create_project`]: crate::application::PoetryService::create_project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    name: String,
    path: PathBuf,
}

impl Project {
    /// Build a handle for a project named `name` rooted at `path`.
    ///
    /// `path` is the project directory itself (i.e. `<parent>/<name>`), not
    /// the directory containing it.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Location of the build manifest (`pyproject.toml`).
    pub fn manifest_path(&self) -> PathBuf {
        self.path.join(MANIFEST_FILE_NAME)
    }

    /// Location of the ignore file (`.gitignore`).
    pub fn ignore_path(&self) -> PathBuf {
        self.path.join(IGNORE_FILE_NAME)
    }

    /// Location of the package entry file (`<name>/__init__.py`).
    ///
    /// `poetry new` generates a package directory named after the project;
    /// the entry file lives inside it.
    pub fn entry_file_path(&self) -> PathBuf {
        self.path.join(&self.name).join(ENTRY_FILE_NAME)
    }
}
