use serde::{Deserialize, Serialize};

/// One field definition of a table.
///
/// `id` is the stable identifier assigned by Airtable and never changes.
/// `name` is the display name; it can be renamed at any time and is the only
/// form the formula language understands.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Column {
    /// Stable field id, e.g. `fld456`
    pub id: String,
    /// Current display name, e.g. `First name`
    pub name: String,
}

impl Column {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into() }
    }

    /// True when `token` is either this column's id or its display name.
    /// The id is tested first.
    pub fn matches(&self, token: &str) -> bool {
        self.id == token || self.name == token
    }
}
