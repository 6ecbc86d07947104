use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Built-in function registry, shared by every compiler.
pub static FUNCTIONS: Lazy<FunctionRegistry> = Lazy::new(FunctionRegistry::default_function_registry);

const LOGICAL: &[&str] = &[
    "AND", "BLANK", "ERROR", "FALSE", "IF", "ISERROR", "NOT", "OR", "SWITCH", "TRUE", "XOR",
];

const TEXT: &[&str] = &[
    "CONCATENATE", "ENCODE_URL_COMPONENT", "FIND", "LEFT", "LEN", "LOWER", "MID", "REGEX_EXTRACT",
    "REGEX_MATCH", "REGEX_REPLACE", "REPLACE", "REPT", "RIGHT", "SEARCH", "SUBSTITUTE", "T", "TRIM",
    "UPPER",
];

const NUMERIC: &[&str] = &[
    "ABS", "AVERAGE", "CEILING", "COUNT", "COUNTA", "COUNTALL", "EVEN", "EXP", "FLOOR", "INT", "LOG",
    "MAX", "MIN", "MOD", "ODD", "POWER", "ROUND", "ROUNDDOWN", "ROUNDUP", "SQRT", "SUM", "VALUE",
];

const DATE: &[&str] = &[
    "DATEADD", "DATESTR", "DATETIME_DIFF", "DATETIME_FORMAT", "DATETIME_PARSE", "DAY", "FROMNOW",
    "HOUR", "IS_AFTER", "IS_BEFORE", "IS_SAME", "MINUTE", "MONTH", "NOW", "SECOND", "SET_LOCALE",
    "SET_TIMEZONE", "TIMESTR", "TODAY", "TONOW", "WEEKDAY", "WEEKNUM", "WORKDAY", "WORKDAY_DIFF",
    "YEAR",
];

const ARRAY: &[&str] = &["ARRAYCOMPACT", "ARRAYFLATTEN", "ARRAYJOIN", "ARRAYSLICE", "ARRAYUNIQUE"];

const RECORD: &[&str] = &["CREATED_TIME", "LAST_MODIFIED_TIME", "RECORD_ID"];

/// Case-insensitive registry of formula functions, mapping any spelling to
/// the canonical upper-case name.
#[derive(Debug, Default)]
pub struct FunctionRegistry {
    by_name: HashMap<String, &'static str>,
}

impl FunctionRegistry {
    pub fn new() -> Self { Self { by_name: HashMap::new() } }

    pub fn register(&mut self, name: &'static str) {
        self.by_name.insert(name.to_ascii_lowercase(), name);
    }

    /// Canonical spelling of `name`, if it is a known function.
    pub fn get(&self, name: &str) -> Option<&'static str> {
        self.by_name.get(&name.to_ascii_lowercase()).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn list(&self) -> Vec<&'static str> {
        let mut v: Vec<_> = self.by_name.values().copied().collect();
        v.sort();
        v
    }

    pub fn default_function_registry() -> Self {
        let mut registry = Self::new();
        for group in [LOGICAL, TEXT, NUMERIC, DATE, ARRAY, RECORD] {
            for name in group.iter().copied() {
                registry.register(name);
            }
        }
        registry
    }
}
