//! Unified error handling for Poetryx Core.
//!
//! Every operation in this crate returns a typed [`CoreError`] up to its
//! caller without local recovery; there are no retries anywhere in the core.
//! The pipeline aborts at the first failure and artifacts created by prior
//! steps are not rolled back — re-running must tolerate partially-created
//! state, which the idempotent mutation operations are designed for.

use std::path::PathBuf;
use thiserror::Error;

/// Root error type for Poetryx Core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The `poetry` executable could not be resolved, either from the
    /// platform search path or from an explicit location.
    #[error("could not find the Poetry executable")]
    ExecutableNotFound,

    /// No executable lookup strategy is defined for this platform.
    #[error("unsupported platform: {os}")]
    PlatformUnsupported { os: String },

    /// The target project directory already exists. Checked before the
    /// external tool is ever invoked.
    #[error("project directory already exists: {path}")]
    ProjectExists { path: PathBuf },

    /// A project artifact (typically the manifest) is missing.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The manifest could not be decoded — or re-encoded — as TOML.
    #[error("malformed manifest {path}: {reason}")]
    ManifestParse { path: PathBuf, reason: String },

    /// The external tool exited nonzero or could not be spawned.
    #[error("`poetry {command}` failed{}", exit_status_suffix(.status))]
    ExternalTool {
        command: String,
        /// Exit code, or `None` when the process could not be spawned or
        /// was killed by a signal.
        status: Option<i32>,
        stderr: String,
    },

    /// Generic filesystem failure.
    #[error("I/O error on {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn exit_status_suffix(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!(" with exit code {code}"),
        None => String::new(),
    }
}

impl CoreError {
    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ExecutableNotFound | Self::FileNotFound { .. } => ErrorCategory::NotFound,
            Self::ProjectExists { .. } => ErrorCategory::Conflict,
            Self::PlatformUnsupported { .. } => ErrorCategory::Environment,
            Self::ManifestParse { .. } => ErrorCategory::InvalidData,
            Self::ExternalTool { .. } | Self::Io { .. } => ErrorCategory::Internal,
        }
    }

    /// Shorthand for wrapping an `io::Error` with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    Conflict,
    Environment,
    InvalidData,
    Internal,
}

/// Convenient result type alias.
pub type CoreResult<T> = Result<T, CoreError>;
