//! Resolving the `poetry` executable.

use std::path::{Path, PathBuf};

use tracing::debug;

use poetryx_core::error::{CoreError, CoreResult};

/// Name of the executable looked up on the search path.
pub const POETRY_EXECUTABLE: &str = "poetry";

/// Resolve `poetry` from the platform's executable search mechanism.
///
/// Fails with [`CoreError::ExecutableNotFound`] when the tool is not on the
/// search path, and [`CoreError::PlatformUnsupported`] on targets with no
/// defined lookup strategy. No side effects beyond the lookup itself.
pub fn locate_from_search_path() -> CoreResult<PathBuf> {
    #[cfg(any(unix, windows))]
    {
        let path = which::which(POETRY_EXECUTABLE).map_err(|e| {
            debug!(error = %e, "poetry not found on search path");
            CoreError::ExecutableNotFound
        })?;
        debug!(path = %path.display(), "poetry resolved from search path");
        Ok(path)
    }
    #[cfg(not(any(unix, windows)))]
    {
        Err(CoreError::PlatformUnsupported {
            os: std::env::consts::OS.to_owned(),
        })
    }
}

/// Accept an explicitly supplied executable path.
///
/// Fails with [`CoreError::ExecutableNotFound`] when no file exists there —
/// a directory does not count; the path must point at the executable itself.
pub fn locate_at(path: &Path) -> CoreResult<PathBuf> {
    if path.is_file() {
        Ok(path.to_path_buf())
    } else {
        Err(CoreError::ExecutableNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn locate_at_accepts_existing_file() {
        let dir = TempDir::new().unwrap();
        let exe = dir.path().join("poetry");
        std::fs::write(&exe, "#!/bin/sh\n").unwrap();
        assert_eq!(locate_at(&exe).unwrap(), exe);
    }

    #[test]
    fn locate_at_rejects_missing_path() {
        let dir = TempDir::new().unwrap();
        let err = locate_at(&dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, CoreError::ExecutableNotFound));
    }

    #[test]
    fn locate_at_rejects_directory() {
        let dir = TempDir::new().unwrap();
        let err = locate_at(dir.path()).unwrap_err();
        assert!(matches!(err, CoreError::ExecutableNotFound));
    }
}
