//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`POETRYX_*`, `__` as section separator)
//! 3. Config file (`--config`, or the default location when present)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// External tool settings.
    pub poetry: PoetryConfig,
    /// What gets scaffolded into a fresh project.
    pub scaffold: ScaffoldConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoetryConfig {
    /// Explicit path to the Poetry executable. When unset the executable is
    /// resolved from the platform search path.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaffoldConfig {
    /// Subdirectories created in every new project and appended to its
    /// ignore file.
    pub directories: Vec<String>,
    /// Name of the script registered in `[tool.poetry.scripts]`.
    pub script_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            poetry: PoetryConfig { path: None },
            scaffold: ScaffoldConfig {
                directories: vec!["assets".into(), "build".into()],
                script_name: "main".into(),
            },
            output: OutputConfig {
                no_color: false,
                format: "human".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; when `None`
    /// the default location is consulted and silently skipped if absent.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        match config_file {
            Some(path) => {
                // An explicitly requested file must exist.
                builder = builder.add_source(File::from(path.clone()));
            }
            None => {
                let default_path = Self::config_path();
                if default_path.is_file() {
                    builder = builder.add_source(File::from(default_path));
                }
            }
        }

        builder = builder.add_source(Environment::with_prefix("POETRYX").separator("__"));

        let config = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.poetryx.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "poetryx", "poetryx")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".poetryx.toml"))
    }
}
