//! TOML codec for the build manifest.

use std::io;
use std::path::Path;

use poetryx_core::{
    application::ports::ManifestStore,
    domain::{Project, PyprojectManifest},
    error::{CoreError, CoreResult},
};

/// Production [`ManifestStore`] backed by `std::fs` and the `toml` crate.
///
/// Reads materialize a fresh [`PyprojectManifest`] on every call; writes
/// serialize the whole document and overwrite the file in place. There is no
/// atomic rename-swap: a crash mid-write can leave a truncated manifest.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlManifestStore;

impl TomlManifestStore {
    pub fn new() -> Self {
        Self
    }

    fn parse(path: &Path, content: &str) -> CoreResult<PyprojectManifest> {
        toml::from_str(content).map_err(|e| CoreError::ManifestParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

impl ManifestStore for TomlManifestStore {
    fn read(&self, project: &Project) -> CoreResult<PyprojectManifest> {
        let path = project.manifest_path();
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(CoreError::FileNotFound { path });
            }
            Err(e) => return Err(CoreError::io(path, e)),
        };
        Self::parse(&path, &content)
    }

    fn write(&self, project: &Project, manifest: &PyprojectManifest) -> CoreResult<()> {
        let path = project.manifest_path();
        // Encode failures share the ManifestParse variant; they describe the
        // same document, just in the other direction.
        let content = toml::to_string(manifest).map_err(|e| CoreError::ManifestParse {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| CoreError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
[tool.poetry]
name = "demo"
version = "0.1.0"
description = "A demo project"
authors = ["Jane Doe <jane@example.com>"]
readme = "README.md"

[tool.poetry.dependencies]
python = "^3.11"

[build-system]
requires = ["poetry-core"]
build-backend = "poetry.core.masonry.api"
"#;

    fn project_in(dir: &TempDir) -> Project {
        Project::new("demo", dir.path())
    }

    #[test]
    fn read_parses_generated_manifest() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("pyproject.toml"), SAMPLE).unwrap();

        let manifest = TomlManifestStore::new().read(&project_in(&dir)).unwrap();
        assert_eq!(manifest.tool.poetry.name, "demo");
        assert_eq!(manifest.build_system.build_backend, "poetry.core.masonry.api");
        assert_eq!(
            manifest.tool.poetry.dependencies.get("python").map(String::as_str),
            Some("^3.11")
        );
        assert!(manifest.tool.poetry.scripts.is_empty());
    }

    #[test]
    fn read_missing_manifest_is_file_not_found() {
        let dir = TempDir::new().unwrap();
        let err = TomlManifestStore::new().read(&project_in(&dir)).unwrap_err();
        assert!(matches!(err, CoreError::FileNotFound { .. }));
    }

    #[test]
    fn read_malformed_manifest_is_parse_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("pyproject.toml"), "[tool.poetry\n").unwrap();
        let err = TomlManifestStore::new().read(&project_in(&dir)).unwrap_err();
        assert!(matches!(err, CoreError::ManifestParse { .. }));
    }

    #[test]
    fn write_then_read_preserves_content() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("pyproject.toml"), SAMPLE).unwrap();
        let store = TomlManifestStore::new();
        let project = project_in(&dir);

        let manifest = store.read(&project).unwrap();
        let updated = manifest.with_script("main", "demo:main").unwrap();
        store.write(&project, &updated).unwrap();

        let reread = store.read(&project).unwrap();
        assert_eq!(reread, updated);
        assert_eq!(
            reread.tool.poetry.scripts.get("main").map(String::as_str),
            Some("demo:main")
        );
        // Untouched fields survive the round-trip.
        assert_eq!(reread.tool.poetry.authors, manifest.tool.poetry.authors);
        assert_eq!(reread.build_system, manifest.build_system);
    }

    #[test]
    fn repeated_write_of_same_document_is_byte_identical() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("pyproject.toml"), SAMPLE).unwrap();
        let store = TomlManifestStore::new();
        let project = project_in(&dir);

        let manifest = store.read(&project).unwrap();
        store.write(&project, &manifest).unwrap();
        let first = std::fs::read(project.manifest_path()).unwrap();
        store.write(&project, &manifest).unwrap();
        let second = std::fs::read(project.manifest_path()).unwrap();
        assert_eq!(first, second);
    }
}
