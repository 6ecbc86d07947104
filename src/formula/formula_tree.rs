use std::fmt;

use crate::{config::DEFAULT_MAX_DEPTH, formula::{FieldReference, Literal}, FormulaError};

/// A formula expression tree.
///
/// Calls cover both operators (`"="`, `"&"`, ...) and functions (`"AND"`,
/// `"IF"`, ...); the backend decides how a tag is written out.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Formula {
    Call { tag: String, args: Vec<Formula> },
    Field(FieldReference),
    Literal(Literal),
}

impl Formula {
    pub fn call(tag: impl Into<String>, args: impl IntoIterator<Item = Formula>) -> Self {
        Formula::Call { tag: tag.into(), args: args.into_iter().collect() }
    }

    pub fn field(field: impl Into<String>) -> Self {
        Formula::Field(FieldReference::new(field))
    }

    pub fn literal(value: impl Into<Literal>) -> Self {
        Formula::Literal(value.into())
    }

    pub fn and(args: impl IntoIterator<Item = Formula>) -> Self {
        Self::call("AND", args)
    }

    pub fn or(args: impl IntoIterator<Item = Formula>) -> Self {
        Self::call("OR", args)
    }

    pub fn not(arg: Formula) -> Self {
        Self::call("NOT", [arg])
    }

    pub fn eq(left: impl Into<Formula>, right: impl Into<Formula>) -> Self {
        Self::call("=", [left.into(), right.into()])
    }

    pub fn ne(left: impl Into<Formula>, right: impl Into<Formula>) -> Self {
        Self::call("!=", [left.into(), right.into()])
    }

    pub fn gt(left: impl Into<Formula>, right: impl Into<Formula>) -> Self {
        Self::call(">", [left.into(), right.into()])
    }

    pub fn ge(left: impl Into<Formula>, right: impl Into<Formula>) -> Self {
        Self::call(">=", [left.into(), right.into()])
    }

    pub fn lt(left: impl Into<Formula>, right: impl Into<Formula>) -> Self {
        Self::call("<", [left.into(), right.into()])
    }

    pub fn le(left: impl Into<Formula>, right: impl Into<Formula>) -> Self {
        Self::call("<=", [left.into(), right.into()])
    }

    /// Tokens of every field reference in the tree, in depth-first order.
    pub fn field_references(&self) -> Result<Vec<&str>, FormulaError> {
        self.field_references_with_limit(DEFAULT_MAX_DEPTH)
    }

    pub fn field_references_with_limit(&self, max_depth: usize) -> Result<Vec<&str>, FormulaError> {
        let mut out = Vec::new();
        self.collect_fields(&mut out, 0, max_depth)?;
        Ok(out)
    }

    fn collect_fields<'a>(&'a self, out: &mut Vec<&'a str>, depth: usize, max_depth: usize) -> Result<(), FormulaError> {
        if depth > max_depth {
            return FormulaError::DepthLimitExceeded { limit: max_depth }.err();
        }

        match self {
            Formula::Call { args, .. } => {
                for arg in args {
                    arg.collect_fields(out, depth + 1, max_depth)?;
                }
            }
            Formula::Field(f) => out.push(&f.field),
            Formula::Literal(_) => {}
        }
        Ok(())
    }
}

impl From<FieldReference> for Formula {
    fn from(value: FieldReference) -> Self {
        Formula::Field(value)
    }
}

impl From<Literal> for Formula {
    fn from(value: Literal) -> Self {
        Formula::Literal(value)
    }
}

impl From<&str> for Formula {
    fn from(value: &str) -> Self {
        Formula::Literal(value.into())
    }
}

impl From<String> for Formula {
    fn from(value: String) -> Self {
        Formula::Literal(value.into())
    }
}

impl From<bool> for Formula {
    fn from(value: bool) -> Self {
        Formula::Literal(value.into())
    }
}

impl From<i64> for Formula {
    fn from(value: i64) -> Self {
        Formula::Literal(value.into())
    }
}

impl From<i32> for Formula {
    fn from(value: i32) -> Self {
        Formula::Literal(value.into())
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}
