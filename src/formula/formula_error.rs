use std::fmt::Display;

use crate::compiler::CompileError;

/// Everything that can make a `formula` call fail. All variants are fatal to
/// the call: there is no partial output.
#[derive(Debug, Clone, PartialEq)]
pub enum FormulaError {
    /// An alias maps onto several fields
    UnsupportedMapping { alias: String },
    /// No column id or name matched. `token` is what the formula referenced,
    /// `mapped_to` the alias target that was looked up instead, if any.
    FieldNotFound { token: String, mapped_to: Option<String> },
    /// Field key missing from the table's declared schema
    UnknownSchemaField(String),
    InvalidFormula(String),
    InvalidTable(String),
    DepthLimitExceeded { limit: usize },
    Compile(CompileError),
}

impl FormulaError {
    pub fn err<T>(self) -> Result<T, FormulaError> {
        Err(self)
    }
}

impl Display for FormulaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormulaError::UnsupportedMapping { alias } => {
                write!(f, "Array mappings not supported (alias '{}')", alias)
            }
            FormulaError::FieldNotFound { token, mapped_to: None } => {
                write!(f, "Field not found in table: {}", token)
            }
            FormulaError::FieldNotFound { token, mapped_to: Some(target) } => {
                write!(f, "Field not found in table: {} (mapped to {})", token, target)
            }
            FormulaError::UnknownSchemaField(name) => {
                write!(f, "Field is not declared in the table schema: {}", name)
            }
            FormulaError::InvalidFormula(msg) => write!(f, "Invalid formula: {}", msg),
            FormulaError::InvalidTable(msg) => write!(f, "Invalid table definition: {}", msg),
            FormulaError::DepthLimitExceeded { limit } => {
                write!(f, "Formula is nested deeper than the limit of {}", limit)
            }
            FormulaError::Compile(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for FormulaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormulaError::Compile(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CompileError> for FormulaError {
    fn from(value: CompileError) -> Self {
        FormulaError::Compile(value)
    }
}
