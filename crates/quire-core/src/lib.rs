//! Quire Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Quire
//! scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            quire-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ScaffoldService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │             (Filesystem)                │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      quire-adapters (Infrastructure)    │
//! │  (LocalFilesystem, MemoryFilesystem)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use quire_core::prelude::*;
//!
//! let table = ScaffoldTable::builder("demo")
//!     .file("a/b.txt", "hello")
//!     .build()?;
//!
//! let service = ScaffoldService::new(Box::new(filesystem));
//! let report = service.run("proj", &table)?;
//! assert_eq!(report.outcome_of("a/b.txt"), Some(&EntryOutcome::Created));
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{ScaffoldService, ports::Filesystem};
    pub use crate::domain::{
        EntryOutcome, EntryReport, RelativePath, ScaffoldEntry, ScaffoldReport, ScaffoldTable,
    };
    pub use crate::error::{QuireError, QuireResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
