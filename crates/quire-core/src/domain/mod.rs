//! Core domain layer for Quire.
//!
//! This module contains pure data and invariants with no I/O. Filesystem
//! access happens only through the [`Filesystem`](crate::application::ports::Filesystem)
//! port.
//!
//! - **No I/O**: tables and reports are plain values
//! - **Immutable tables**: a [`ScaffoldTable`] is validated once at build time
//!   and never mutated afterwards
pub mod entities;
pub mod error;

mod validation;

pub use entities::{
    common::RelativePath,
    report::{EntryOutcome, EntryReport, ScaffoldReport},
    scaffold_table::{ScaffoldEntry, ScaffoldTable, ScaffoldTableBuilder},
};

pub use error::DomainError;
pub use validation::DomainValidator;
