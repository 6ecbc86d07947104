use crate::{
    config::DEFAULT_MAX_DEPTH,
    formula::{FieldReference, Formula},
    resolver::FieldResolver,
    schema::TableDefinition,
    FormulaError,
};

pub struct FormulaTransformer;

impl FormulaTransformer {
    /// Rewrite every field reference in `node` to the column's display name.
    /// Calls keep their tag and argument order; literals are copied as is.
    pub fn transform(table: &TableDefinition, node: &Formula) -> Result<Formula, FormulaError> {
        Self::transform_with_limit(table, node, DEFAULT_MAX_DEPTH)
    }

    pub fn transform_with_limit(table: &TableDefinition, node: &Formula, max_depth: usize) -> Result<Formula, FormulaError> {
        Self::transform_at(table, node, 0, max_depth)
    }

    fn transform_at(table: &TableDefinition, node: &Formula, depth: usize, max_depth: usize) -> Result<Formula, FormulaError> {
        if depth > max_depth {
            return FormulaError::DepthLimitExceeded { limit: max_depth }.err();
        }

        match node {
            Formula::Call { tag, args } => {
                let mut new_args = Vec::with_capacity(args.len());
                for arg in args {
                    new_args.push(Self::transform_at(table, arg, depth + 1, max_depth)?);
                }
                Ok(Formula::Call { tag: tag.clone(), args: new_args })
            }
            Formula::Field(reference) => {
                let name = FieldResolver::resolve(table, &reference.field)?;
                Ok(Formula::Field(FieldReference::new(name)))
            }
            Formula::Literal(_) => Ok(node.clone()),
        }
    }
}
