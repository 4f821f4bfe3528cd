use crate::domain::{entities::ScaffoldTable, error::DomainError};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_table(table: &ScaffoldTable) -> Result<(), DomainError> {
        table.validate()
    }
}
