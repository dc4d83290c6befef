//! Filesystem adapters: local (production) and in-memory (testing).

pub mod local;
pub mod memory;

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;
