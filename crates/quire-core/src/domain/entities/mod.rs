pub mod common;
pub mod report;
pub mod scaffold_table;

pub use crate::domain::DomainError;
pub use report::{EntryOutcome, EntryReport, ScaffoldReport};
pub use scaffold_table::{ScaffoldEntry, ScaffoldTable, ScaffoldTableBuilder};
