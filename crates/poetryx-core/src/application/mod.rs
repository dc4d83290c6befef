//! Application layer - use-case orchestration over the domain.
//!
//! Services here coordinate the domain model through the driven ports in
//! [`ports`]; they contain no direct I/O. The `poetryx-adapters` crate
//! provides the production port implementations.

pub mod ports;
pub mod services;

pub use services::{PoetryService, ProjectService};
