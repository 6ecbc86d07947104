use crate::{config::DEFAULT_MAX_DEPTH, formula::Formula, schema::TableDefinition, FormulaError};

/// Record id key, always addressable even when the schema omits it.
pub const RECORD_ID_KEY: &str = "id";

/// Optional pass checking field references against the application field
/// keys declared in `TableDefinition::schema`.
///
/// Only keys are checked, literal types are not. Without a declared schema
/// the pass accepts everything and the resolver alone decides.
pub struct SchemaValidator;

impl SchemaValidator {
    pub fn validate(table: &TableDefinition, formula: &Formula) -> Result<(), FormulaError> {
        Self::validate_with_limit(table, formula, DEFAULT_MAX_DEPTH)
    }

    /// Trees nested deeper than `max_depth` fail with `DepthLimitExceeded`,
    /// even when the table declares no schema.
    pub fn validate_with_limit(table: &TableDefinition, formula: &Formula, max_depth: usize) -> Result<(), FormulaError> {
        let fields = formula.field_references_with_limit(max_depth)?;
        let Some(schema) = &table.schema else {
            return Ok(());
        };

        for field in fields {
            if field != RECORD_ID_KEY && !schema.contains_key(field) {
                return FormulaError::UnknownSchemaField(field.to_string()).err();
            }
        }
        Ok(())
    }
}
