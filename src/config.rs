use serde::{Deserialize, Serialize};

/// Deepest nesting accepted by default, well below what blows the stack.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Options for a `formula` call.
///
/// - `max_depth` bounds how deeply a tree may nest before it is rejected.
/// - `allow_unknown_functions` lets tags outside the built-in function list
///   through (they are written out as plain `NAME(...)` calls).
/// - `validate_schema` runs the schema validation pass before resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormulaConfig {
    /// Maximum nesting depth of the expression tree
    pub max_depth: usize,
    /// Emit unknown function tags instead of failing
    pub allow_unknown_functions: bool,
    /// Check field references against the table schema first
    pub validate_schema: bool,
}

impl Default for FormulaConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            allow_unknown_functions: false,
            validate_schema: false,
        }
    }
}

impl FormulaConfig {
    /// Create default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience: default configuration with schema validation turned on.
    pub fn strict() -> Self {
        Self {
            validate_schema: true,
            ..Self::default()
        }
    }

    /// Convenience: default configuration that accepts any function name.
    pub fn lenient() -> Self {
        Self {
            allow_unknown_functions: true,
            ..Self::default()
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
