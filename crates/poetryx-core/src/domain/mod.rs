//! Domain layer - pure logic, no I/O.
//!
//! Everything in this module is a value type or a pure function. The
//! filesystem and the external `poetry` process are only ever reached
//! through the application ports.

pub mod entry;
pub mod ignore;
pub mod manifest;
pub mod project;

pub use ignore::IgnoreRules;
pub use manifest::{BuildSystemTable, PoetryTable, PyprojectManifest, ToolTable};
pub use project::Project;
