use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{schema::{AliasTarget, Column}, FormulaError};

/// Everything the resolver needs to know about one table.
///
/// A definition is borrowed for the duration of a single `formula` call and
/// never retained, so callers are free to rebuild it whenever the remote
/// schema changes (e.g. after a field rename).
///
/// JSON input may use either the flat shape
/// `{"columns": [...], "aliasMap": {...}, "schema": {...}}` or the shape
/// produced by airtable-ts `{"fields": [...], "tsDefinition": {"schema": {...}, "mappings": {...}}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawTableDefinition", rename_all = "camelCase")]
pub struct TableDefinition {
    /// Columns in declared order
    pub columns: Vec<Column>,
    /// Application alias -> column id or name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_map: Option<IndexMap<String, AliasTarget>>,
    /// Application field key -> type descriptor (e.g. `"number | null"`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<IndexMap<String, String>>,
}

impl TableDefinition {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns, alias_map: None, schema: None }
    }

    /// Add (or replace) one alias entry.
    pub fn with_alias(mut self, alias: impl Into<String>, target: impl Into<AliasTarget>) -> Self {
        self.alias_map
            .get_or_insert_with(IndexMap::new)
            .insert(alias.into(), target.into());
        self
    }

    pub fn with_alias_map(mut self, alias_map: IndexMap<String, AliasTarget>) -> Self {
        self.alias_map = Some(alias_map);
        self
    }

    /// Declare the application field keys (and their descriptors) used by
    /// the optional schema validation pass.
    pub fn with_schema<K, V>(mut self, schema: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.schema = Some(schema.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    pub fn alias(&self, alias: &str) -> Option<&AliasTarget> {
        self.alias_map.as_ref().and_then(|m| m.get(alias))
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    pub fn from_json(json_value: Value) -> Result<Self, FormulaError> {
        serde_json::from_value(json_value).map_err(|e| FormulaError::InvalidTable(e.to_string()))
    }

    /// Read a JSON table definition from disk.
    pub fn load_from_file(file_path: impl AsRef<Path>) -> Result<Self, FormulaError> {
        let file_path = file_path.as_ref();
        let content = std::fs::read_to_string(file_path).map_err(|e| {
            FormulaError::InvalidTable(format!("failed to read {}: {}", file_path.display(), e))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            FormulaError::InvalidTable(format!("failed to parse {}: {}", file_path.display(), e))
        })
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTableDefinition {
    #[serde(alias = "fields")]
    columns: Vec<Column>,
    #[serde(default)]
    alias_map: Option<IndexMap<String, AliasTarget>>,
    #[serde(default)]
    schema: Option<IndexMap<String, String>>,
    #[serde(default)]
    ts_definition: Option<RawTsDefinition>,
}

#[derive(Deserialize)]
struct RawTsDefinition {
    #[serde(default)]
    schema: Option<IndexMap<String, String>>,
    #[serde(default)]
    mappings: Option<IndexMap<String, AliasTarget>>,
}

impl From<RawTableDefinition> for TableDefinition {
    fn from(raw: RawTableDefinition) -> Self {
        let (ts_schema, ts_mappings) = match raw.ts_definition {
            Some(ts) => (ts.schema, ts.mappings),
            None => (None, None),
        };

        // flat keys win over the nested airtable-ts ones
        Self {
            columns: raw.columns,
            alias_map: raw.alias_map.or(ts_mappings),
            schema: raw.schema.or(ts_schema),
        }
    }
}
