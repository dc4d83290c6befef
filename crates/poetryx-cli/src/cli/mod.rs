//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "poetryx",
    bin_name = "poetryx",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Poetry project bootstrapper",
    long_about = "Poetryx drives the Poetry package manager to create a \
                  Python project, then wires up the generated artifacts: \
                  scaffold directories, .gitignore entries, an entry-point \
                  stub, and a [tool.poetry.scripts] registration.",
    after_help = "EXAMPLES:\n\
        \x20 poetryx init demo\n\
        \x20 poetryx init demo --directory ~/projects\n\
        \x20 poetryx init demo --poetry-path /opt/poetry/bin/poetry\n\
        \x20 poetryx completions bash > /usr/share/bash-completion/completions/poetryx",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create and wire up a Poetry project.
    #[command(
        visible_alias = "i",
        about = "Initialize a Poetry project with additional configurations",
        after_help = "EXAMPLES:\n\
            \x20 poetryx init demo\n\
            \x20 poetryx init demo -d ~/projects --no-install\n\
            \x20 poetryx init demo --poetry-path /opt/poetry/bin/poetry"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 poetryx completions bash > ~/.local/share/bash-completion/completions/poetryx\n\
            \x20 poetryx completions zsh  > ~/.zfunc/_poetryx\n\
            \x20 poetryx completions fish > ~/.config/fish/completions/poetryx.fish"
    )]
    Completions(CompletionsArgs),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `poetryx init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Name of the Poetry project to be created. Should not contain spaces.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: String,

    /// Containing folder of the project to be created.
    #[arg(
        short = 'd',
        long = "directory",
        value_name = "DIR",
        help = "Parent directory for the project (default: current directory)"
    )]
    pub directory: Option<PathBuf>,

    /// Explicit path to the Poetry executable.
    ///
    /// When omitted, the executable is resolved from the platform search
    /// path (and, failing that, from the `poetry.path` config key).
    #[arg(
        long = "poetry-path",
        value_name = "FILE",
        help = "Path to the Poetry executable (default: resolve from PATH)"
    )]
    pub poetry_path: Option<PathBuf>,

    /// Skip the final `poetry install` step.
    #[arg(long = "no-install", help = "Skip running `poetry install` at the end")]
    pub no_install: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `poetryx completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, value_name = "SHELL", help = "Shell to generate completions for")]
    pub shell: clap_complete::Shell,
}
