//! Local filesystem adapter using std::fs.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use poetryx_core::{
    application::ports::Filesystem,
    error::{CoreError, CoreResult},
};

/// Production filesystem implementation using `std::fs`.
///
/// Every method opens, uses, and closes its file handle within the call;
/// nothing is held across operations.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> CoreResult<()> {
        std::fs::create_dir_all(path).map_err(|e| CoreError::io(path, e))
    }

    fn read_to_string(&self, path: &Path) -> CoreResult<Option<String>> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CoreError::io(path, e)),
        }
    }

    fn write_file(&self, path: &Path, content: &str) -> CoreResult<()> {
        std::fs::write(path, content).map_err(|e| CoreError::io(path, e))
    }

    fn append_file(&self, path: &Path, content: &str) -> CoreResult<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .map_err(|e| CoreError::io(path, e))?;
        file.write_all(content.as_bytes())
            .map_err(|e| CoreError::io(path, e))
    }
}
