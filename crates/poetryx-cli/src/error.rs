//! Comprehensive error handling for the Poetryx CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping

use std::error::Error;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use poetryx_core::error::{CoreError, ErrorCategory as CoreCategory};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Comprehensive CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// Project name validation failed.
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    /// The Poetry executable could not be resolved.
    ///
    /// Carried separately from [`CliError::Core`] so the CLI can render a
    /// guided remediation message instead of a raw error dump.
    #[error("Could not find the Poetry executable")]
    PoetryNotFound {
        /// The explicit path the user supplied, if any.
        explicit: Option<PathBuf>,
    },

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `poetryx-core`.
    ///
    /// Wrapped here so that the CLI can attach suggestions drawn from the
    /// core error's category without touching core internals.
    #[error("{0}")]
    Core(#[from] CoreError),

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, reason } => vec![
                format!("Project name '{}' is invalid: {}", name, reason),
                "Use alphanumeric characters, hyphens, and underscores".into(),
                "Examples: my-project, my_app, project123".into(),
            ],

            Self::PoetryNotFound { explicit: None } => vec![
                "Could not find Poetry on your PATH. Try setting the `--poetry-path` argument."
                    .into(),
                "It should point to the Poetry executable, not its containing folder.".into(),
                "Example: poetryx init foo --poetry-path ~/.local/bin/poetry".into(),
                "To install Poetry, see https://python-poetry.org/docs/#installation".into(),
            ],

            Self::PoetryNotFound {
                explicit: Some(path),
            } => vec![
                format!("Could not find Poetry at '{}'. Try checking it again.", path.display()),
                "It should point to the Poetry executable, not its containing folder.".into(),
                "Example: poetryx init foo --poetry-path ~/.local/bin/poetry".into(),
            ],

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Check your config file or pass a different one with --config".into(),
            ],

            Self::Core(core) => match core {
                CoreError::ProjectExists { path } => vec![
                    format!("The directory '{}' already exists", path.display()),
                    "Choose a different project name or parent directory".into(),
                    "Poetryx never overwrites an existing project".into(),
                ],
                CoreError::FileNotFound { path } => vec![
                    format!("Expected file is missing: {}", path.display()),
                    "Check that `poetry new` generated the project correctly".into(),
                ],
                CoreError::ManifestParse { path, .. } => vec![
                    format!("Could not parse '{}'", path.display()),
                    "Fix the manifest by hand or regenerate the project".into(),
                ],
                CoreError::ExternalTool { stderr, .. } if !stderr.is_empty() => vec![
                    "Poetry reported:".into(),
                    stderr.trim_end().to_owned(),
                ],
                CoreError::ExternalTool { .. } => vec![
                    "Run again with -vv to see the exact invocation".into(),
                ],
                CoreError::PlatformUnsupported { .. } => vec![
                    "Pass the executable explicitly with --poetry-path".into(),
                ],
                _ => vec![],
            },

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions and available disk space".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. } => ErrorCategory::UserError,
            Self::PoetryNotFound { .. } => ErrorCategory::NotFound,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Conflict => ErrorCategory::UserError,
                CoreCategory::Environment => ErrorCategory::Configuration,
                CoreCategory::InvalidData | CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {}\n", suggestion));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`] — no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {}\n", self));

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, conflicting state).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}
