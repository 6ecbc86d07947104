use serde::{Deserialize, Serialize};

/// Reference to a column by alias, display name or field id.
///
/// After resolution `field` always holds the display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldReference {
    pub field: String,
}

impl FieldReference {
    pub fn new(field: impl Into<String>) -> Self {
        Self { field: field.into() }
    }
}
