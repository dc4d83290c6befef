//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `poetryx-adapters` crate provides implementations:
//!
//! - [`CommandRunner`]: `SystemCommandRunner` (production), `MockCommandRunner`
//!   (tests, generated by mockall)
//! - [`Filesystem`]: `LocalFilesystem` (production), `MemoryFilesystem` (tests)
//! - [`ManifestStore`]: `TomlManifestStore` (production)

use std::path::Path;

use crate::domain::{Project, PyprojectManifest};
use crate::error::CoreResult;

/// Captured result of one external process invocation.
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    /// Exit code; `None` when the process was terminated by a signal.
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Port for spawning the external package manager.
///
/// Every invocation is a synchronous blocking call with no timeout and no
/// cancellation path: a hang in the external tool hangs the pipeline. That
/// is an accepted limitation of this system, not something implementations
/// should paper over.
///
/// Injected into [`PoetryService`] so tests can substitute a fake without
/// spawning real processes.
///
/// [`PoetryService`]: crate::application::PoetryService
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args`, blocking until it exits.
    ///
    /// Returns `Ok` with the captured output for any exit status; an `Err`
    /// means the process could not be spawned at all.
    fn run(&self, program: &Path, args: &[String]) -> CoreResult<CommandOutput>;
}

/// Port for filesystem operations on project artifacts.
///
/// Each call opens, operates on, and closes the file on every exit path;
/// no handles outlive a single operation.
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories. No-op when it already
    /// exists.
    fn create_dir_all(&self, path: &Path) -> CoreResult<()>;

    /// Read a file's full content, or `None` when it does not exist.
    fn read_to_string(&self, path: &Path) -> CoreResult<Option<String>>;

    /// Write content to a file, truncating any previous content.
    fn write_file(&self, path: &Path, content: &str) -> CoreResult<()>;

    /// Append content to a file, creating it if missing.
    fn append_file(&self, path: &Path, content: &str) -> CoreResult<()>;
}

/// Port for reading and writing the build manifest.
pub trait ManifestStore: Send + Sync {
    /// Parse the project's manifest file into the in-memory model.
    ///
    /// Fails with `FileNotFound` when the manifest is missing and
    /// `ManifestParse` on malformed content.
    fn read(&self, project: &Project) -> CoreResult<PyprojectManifest>;

    /// Serialize the full document and overwrite the manifest file.
    ///
    /// The write truncates then streams the new content — it is not atomic.
    /// A crash mid-write can leave a truncated manifest; no rename-swap is
    /// performed.
    fn write(&self, project: &Project, manifest: &PyprojectManifest) -> CoreResult<()>;
}
