use std::fmt::Display;

/// Failures of the compilation backend.
#[derive(Debug, Clone, PartialEq)]
pub enum CompileError {
    /// Tag is neither an operator nor a known function
    UnknownOperator(String),
    /// Operator called with the wrong number of operands
    InvalidArity { operator: String, got: usize },
    /// Infinite numbers have no formula representation
    NonFiniteNumber(f64),
}

impl Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::UnknownOperator(tag) => write!(f, "Unknown operator or function: {}", tag),
            CompileError::InvalidArity { operator, got } => write!(
                f,
                "Operator {} called with an incorrect number of operands (got {})",
                operator, got
            ),
            CompileError::NonFiniteNumber(n) => write!(f, "Number {} cannot be written in a formula", n),
        }
    }
}

impl std::error::Error for CompileError {}
