use tracing::trace;

use crate::{schema::{AliasTarget, Column, TableDefinition}, FormulaError};

pub struct FieldResolver;

impl FieldResolver {
    /// Resolve a field token (alias, display name or field id) to the
    /// column's current display name.
    pub fn resolve(table: &TableDefinition, token: &str) -> Result<String, FormulaError> {
        let column = Self::resolve_column(table, token)?;
        trace!(token, name = %column.name, "resolved field reference");
        Ok(column.name.clone())
    }

    /// Resolve a field token to its column.
    ///
    /// Aliases are followed exactly once; the target is then matched against
    /// the columns in declared order, id before name.
    pub fn resolve_column<'a>(table: &'a TableDefinition, token: &str) -> Result<&'a Column, FormulaError> {
        let mapped_to = match table.alias(token) {
            Some(AliasTarget::Multiple(_)) => {
                return FormulaError::UnsupportedMapping { alias: token.to_string() }.err();
            }
            Some(AliasTarget::Single(target)) => Some(target.as_str()),
            None => None,
        };
        let lookup = mapped_to.unwrap_or(token);

        table.columns.iter()
            .find(|column| column.matches(lookup))
            .ok_or_else(|| FormulaError::FieldNotFound {
                token: token.to_string(),
                mapped_to: mapped_to.map(str::to_string),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::_tests::fixtures::{student_table, student_table_with_aliases};

    #[test]
    fn resolves_by_name_and_by_id() {
        let table = student_table();
        assert_eq!(FieldResolver::resolve(&table, "firstName").unwrap(), "firstName");
        assert_eq!(FieldResolver::resolve(&table, "fld789").unwrap(), "age");
        assert_eq!(FieldResolver::resolve(&table, "id").unwrap(), "id");
    }

    #[test]
    fn resolution_is_deterministic() {
        let table = student_table_with_aliases();
        let first = FieldResolver::resolve(&table, "age");
        for _ in 0..10 {
            assert_eq!(FieldResolver::resolve(&table, "age"), first);
        }
        let missing = FieldResolver::resolve(&table, "nope");
        assert_eq!(FieldResolver::resolve(&table, "nope"), missing);
    }

    #[test]
    fn alias_yields_canonical_name() {
        let table = student_table_with_aliases();
        assert_eq!(FieldResolver::resolve(&table, "firstName").unwrap(), "First name");
        assert_eq!(FieldResolver::resolve(&table, "age").unwrap(), "Age");
    }

    #[test]
    fn alias_may_target_a_display_name() {
        let table = student_table_with_aliases().with_alias("enrolled", "Enrollment year");
        assert_eq!(FieldResolver::resolve(&table, "enrolled").unwrap(), "Enrollment year");
    }

    #[test]
    fn alias_takes_precedence_over_column_names() {
        // "Age" is both a column name and an alias pointing elsewhere
        let table = student_table_with_aliases().with_alias("Age", "fld456");
        assert_eq!(FieldResolver::resolve(&table, "Age").unwrap(), "First name");
    }

    #[test]
    fn aliases_are_followed_only_once() {
        // hop -> "firstName" is itself an alias, but is looked up as a column
        let table = student_table_with_aliases().with_alias("hop", "firstName");
        let err = FieldResolver::resolve(&table, "hop").unwrap_err();
        assert_eq!(err, FormulaError::FieldNotFound {
            token: "hop".into(),
            mapped_to: Some("firstName".into()),
        });
    }

    #[test]
    fn array_mappings_are_rejected_whatever_they_hold() {
        for target in [vec!["fld456", "fld789"], vec!["fld456"], vec![]] {
            let table = student_table_with_aliases().with_alias("multi", target);
            let err = FieldResolver::resolve(&table, "multi").unwrap_err();
            assert_eq!(err, FormulaError::UnsupportedMapping { alias: "multi".into() });
        }
    }

    #[test]
    fn unknown_field_names_the_token() {
        let table = student_table();
        let err = FieldResolver::resolve(&table, "lastName").unwrap_err();
        assert_eq!(err.to_string(), "Field not found in table: lastName");
    }

    #[test]
    fn aliases_that_miss_report_the_original_token() {
        let table = student_table_with_aliases().with_alias("ghost", "fld000");
        let err = FieldResolver::resolve(&table, "ghost").unwrap_err();
        assert!(err.to_string().contains("ghost"));
        assert!(matches!(err, FormulaError::FieldNotFound { ref token, .. } if token == "ghost"));
    }

    #[test]
    fn first_matching_column_wins_on_collisions() {
        // malformed table: column 2's id equals column 1's name
        let table = TableDefinition::new(vec![
            Column::new("fldA", "shared"),
            Column::new("shared", "Other"),
        ]);
        assert_eq!(FieldResolver::resolve(&table, "shared").unwrap(), "shared");

        let table = TableDefinition::new(vec![
            Column::new("shared", "Other"),
            Column::new("fldA", "shared"),
        ]);
        assert_eq!(FieldResolver::resolve(&table, "shared").unwrap(), "Other");
    }

    #[test]
    fn empty_tables_resolve_nothing() {
        let table = TableDefinition::default();
        assert!(matches!(
            FieldResolver::resolve(&table, "anything"),
            Err(FormulaError::FieldNotFound { .. })
        ));
    }
}
