//! Infrastructure adapters for Quire.
//!
//! This crate implements the ports defined in `quire-core::application::ports`.
//! It contains all I/O and the scaffold tables compiled into the binary.

pub mod builtin_tables;
pub mod filesystem;

// Re-export commonly used adapters
pub use builtin_tables::{DEFAULT_BASE_DIR, dissertation};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
