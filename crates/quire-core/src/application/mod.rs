//! Application layer for Quire.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but owns no data.
//! Tables, outcomes, and reports live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::ScaffoldService;

// Re-export port traits (for adapter implementation)
pub use ports::Filesystem;

pub use error::ApplicationError;
