use serde::{Deserialize, Serialize};

/// Right-hand side of an alias map entry.
///
/// Code generators may map one application field onto several Airtable
/// fields; such entries deserialize as `Multiple` and are rejected when a
/// formula references them, since there is no single name to substitute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AliasTarget {
    /// A column id or display name
    Single(String),
    /// Several column ids or names
    Multiple(Vec<String>),
}

impl From<&str> for AliasTarget {
    fn from(value: &str) -> Self {
        AliasTarget::Single(value.to_string())
    }
}

impl From<String> for AliasTarget {
    fn from(value: String) -> Self {
        AliasTarget::Single(value)
    }
}

impl From<Vec<String>> for AliasTarget {
    fn from(value: Vec<String>) -> Self {
        AliasTarget::Multiple(value)
    }
}

impl From<Vec<&str>> for AliasTarget {
    fn from(value: Vec<&str>) -> Self {
        AliasTarget::Multiple(value.into_iter().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_string_and_array_targets() {
        let single: AliasTarget = serde_json::from_value(json!("fld456")).unwrap();
        assert_eq!(single, AliasTarget::Single("fld456".into()));

        let multiple: AliasTarget = serde_json::from_value(json!(["fld1", "fld2"])).unwrap();
        assert_eq!(multiple, AliasTarget::Multiple(vec!["fld1".into(), "fld2".into()]));
    }

    #[test]
    fn rejects_non_string_targets() {
        assert!(serde_json::from_value::<AliasTarget>(json!(42)).is_err());
        assert!(serde_json::from_value::<AliasTarget>(json!([1, 2])).is_err());
    }
}
