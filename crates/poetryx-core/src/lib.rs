//! Poetryx Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Poetryx
//! project bootstrapper, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          poetryx-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (PoetryService, ProjectService)       │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (CommandRunner, Filesystem, Manifests)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     poetryx-adapters (Infrastructure)   │
//! │ (SystemCommandRunner, LocalFilesystem,  │
//! │  TomlManifestStore, poetry locator)     │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (Project, PyprojectManifest, IgnoreRules)│
//! │         No I/O Dependencies             │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use poetryx_core::application::{PoetryService, ProjectService};
//!
//! // Services receive injected adapters (runner, filesystem, manifest store)
//! let poetry = PoetryService::new(executable, runner, filesystem);
//! let project = poetry.create_project("/work".as_ref(), "demo")?;
//!
//! let projects = ProjectService::new(manifests, filesystem);
//! projects.add_script(&project, "main", "demo:main")?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        PoetryService, ProjectService,
        ports::{CommandOutput, CommandRunner, Filesystem, ManifestStore},
    };
    pub use crate::domain::{IgnoreRules, Project, PyprojectManifest, entry::DEFAULT_ENTRY_SOURCE};
    pub use crate::error::{CoreError, CoreResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
