//! Infrastructure adapters for Poetryx.
//!
//! Implements the driven ports declared in `poetryx_core::application::ports`:
//!
//! - [`filesystem::LocalFilesystem`] / [`filesystem::MemoryFilesystem`]
//! - [`manifest_store::TomlManifestStore`]
//! - [`runner::SystemCommandRunner`]
//!
//! plus the [`locator`] functions that resolve the `poetry` executable.

pub mod filesystem;
pub mod locator;
pub mod manifest_store;
pub mod runner;

pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use manifest_store::TomlManifestStore;
pub use runner::SystemCommandRunner;
