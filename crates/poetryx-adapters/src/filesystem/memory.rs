//! In-memory filesystem for tests - no disk access.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use poetryx_core::{application::ports::Filesystem, error::CoreResult};

/// Test double backed by a mutex-guarded map of path to content.
///
/// Directories are tracked as a plain set; `create_dir_all` records the path
/// and all its ancestors, matching the recursive semantics of the real
/// implementation.
#[derive(Debug, Default)]
pub struct MemoryFilesystem {
    files: Mutex<HashMap<PathBuf, String>>,
    dirs: Mutex<HashSet<PathBuf>>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file before handing the filesystem to the code under test.
    pub fn insert_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.lock().unwrap().insert(path.into(), content.into());
    }

    /// Inspect a file after the code under test ran.
    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }

    /// Whether `create_dir_all` was asked to provide this directory.
    pub fn has_dir(&self, path: impl AsRef<Path>) -> bool {
        self.dirs.lock().unwrap().contains(path.as_ref())
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path) || self.has_dir(path)
    }

    fn create_dir_all(&self, path: &Path) -> CoreResult<()> {
        let mut dirs = self.dirs.lock().unwrap();
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            dirs.insert(ancestor.to_path_buf());
        }
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> CoreResult<Option<String>> {
        Ok(self.files.lock().unwrap().get(path).cloned())
    }

    fn write_file(&self, path: &Path, content: &str) -> CoreResult<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_owned());
        Ok(())
    }

    fn append_file(&self, path: &Path, content: &str) -> CoreResult<()> {
        self.files
            .lock()
            .unwrap()
            .entry(path.to_path_buf())
            .or_default()
            .push_str(content);
        Ok(())
    }
}
