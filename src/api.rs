use serde_json::Value;
use tracing::debug;

use crate::{
    compiler::{FormulaBackend, FormulaCompiler},
    formula::Formula,
    resolver::{FormulaTransformer, SchemaValidator},
    schema::TableDefinition,
    FormulaConfig, FormulaError,
};

/// Build a securely-escaped, rename-robust formula string for `table`.
///
/// Field references may use an alias from the table's alias map, a display
/// name or a field id; the output always uses the current display name.
///
/// ```
/// use airtable_formula::{formula, Column, Formula, TableDefinition};
///
/// let table = TableDefinition::new(vec![
///     Column::new("fld456", "First name"),
///     Column::new("fld789", "Age"),
/// ])
/// .with_alias("firstName", "fld456")
/// .with_alias("age", "fld789");
///
/// let text = formula(&table, &Formula::and([
///     Formula::eq(Formula::field("firstName"), "Robert"),
///     Formula::gt(Formula::field("age"), 35),
/// ])).unwrap();
///
/// assert_eq!(text, r#"AND({First name}="Robert",{Age}>35)"#);
/// ```
pub fn formula(table: &TableDefinition, tree: &Formula) -> Result<String, FormulaError> {
    formula_with_config(table, tree, &FormulaConfig::default())
}

pub fn formula_with_config(table: &TableDefinition, tree: &Formula, config: &FormulaConfig) -> Result<String, FormulaError> {
    formula_with_backend(table, tree, config, &FormulaCompiler::from_config(config))
}

/// Resolve `tree` against `table` and hand the result to `backend`.
/// Backend errors are returned as `FormulaError::Compile`.
pub fn formula_with_backend(
    table: &TableDefinition,
    tree: &Formula,
    config: &FormulaConfig,
    backend: &dyn FormulaBackend,
) -> Result<String, FormulaError> {
    debug!(columns = table.columns.len(), max_depth = config.max_depth, "compiling formula");

    if config.validate_schema {
        SchemaValidator::validate_with_limit(table, tree, config.max_depth)?;
    }

    let resolved = FormulaTransformer::transform_with_limit(table, tree, config.max_depth)?;
    Ok(backend.compile(&resolved)?)
}

/// Same as [`formula`], for a tree in its JSON form.
pub fn formula_from_json(table: &TableDefinition, tree: &Value) -> Result<String, FormulaError> {
    formula(table, &Formula::from_json(tree)?)
}
