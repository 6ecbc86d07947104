use serde::{de, ser::SerializeSeq, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::{config::DEFAULT_MAX_DEPTH, formula::{FieldReference, Formula, Literal}, FormulaError};

/// JSON form of a formula tree:
///
/// - `["TAG", child, ...]` is a call,
/// - `{"field": "..."}` is a field reference (other keys are ignored),
/// - strings, numbers and booleans are literals.
impl Formula {
    pub fn from_json(value: &Value) -> Result<Formula, FormulaError> {
        Self::from_json_with_limit(value, DEFAULT_MAX_DEPTH)
    }

    pub fn from_json_with_limit(value: &Value, max_depth: usize) -> Result<Formula, FormulaError> {
        Self::decode(value, 0, max_depth)
    }

    fn decode(value: &Value, depth: usize, max_depth: usize) -> Result<Formula, FormulaError> {
        if depth > max_depth {
            return Err(FormulaError::DepthLimitExceeded { limit: max_depth });
        }

        match value {
            Value::Array(items) => {
                let (head, rest) = items.split_first().ok_or_else(|| {
                    FormulaError::InvalidFormula("an empty array is not a formula".into())
                })?;
                let tag = head.as_str().ok_or_else(|| {
                    FormulaError::InvalidFormula(format!("call tag must be a string, got {}", head))
                })?;

                let mut args = Vec::with_capacity(rest.len());
                for item in rest {
                    args.push(Self::decode(item, depth + 1, max_depth)?);
                }
                Ok(Formula::Call { tag: tag.to_string(), args })
            }
            Value::Object(obj) => Self::decode_field(obj),
            Value::Null => Err(FormulaError::InvalidFormula("null is not a valid formula".into())),
            scalar => Literal::from_json(scalar)
                .map(Formula::Literal)
                .ok_or_else(|| FormulaError::InvalidFormula(format!("unsupported literal {}", scalar))),
        }
    }

    fn decode_field(obj: &Map<String, Value>) -> Result<Formula, FormulaError> {
        match obj.get("field") {
            Some(Value::String(field)) => Ok(Formula::Field(FieldReference::new(field.clone()))),
            Some(other) => Err(FormulaError::InvalidFormula(format!(
                "field reference must be a string, got {}",
                other
            ))),
            None => Err(FormulaError::InvalidFormula(
                "objects are only valid as field references ({\"field\": ...})".into(),
            )),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Formula::Call { tag, args } => {
                let mut items = Vec::with_capacity(args.len() + 1);
                items.push(Value::String(tag.clone()));
                items.extend(args.iter().map(Formula::to_json));
                Value::Array(items)
            }
            Formula::Field(f) => {
                let mut obj = Map::new();
                obj.insert("field".into(), Value::String(f.field.clone()));
                Value::Object(obj)
            }
            Formula::Literal(l) => l.to_json(),
        }
    }
}

impl TryFrom<Value> for Formula {
    type Error = FormulaError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Formula::from_json(&value)
    }
}

impl Serialize for Literal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Literal::String(s) => serializer.serialize_str(s),
            Literal::Int(i) => serializer.serialize_i64(*i),
            Literal::Float(f) => serializer.serialize_f64(f.into_inner()),
            Literal::Bool(b) => serializer.serialize_bool(*b),
        }
    }
}

impl Serialize for Formula {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Formula::Call { tag, args } => {
                let mut seq = serializer.serialize_seq(Some(args.len() + 1))?;
                seq.serialize_element(tag)?;
                for arg in args {
                    seq.serialize_element(arg)?;
                }
                seq.end()
            }
            Formula::Field(f) => f.serialize(serializer),
            Formula::Literal(l) => l.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Formula {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Formula::from_json(&value).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_nested_call() {
        let f = Formula::from_json(&json!([
            "AND",
            ["=", {"field": "firstName"}, "Robert"],
            [">", {"field": "age"}, 35]
        ])).unwrap();

        assert_eq!(f, Formula::and([
            Formula::eq(Formula::field("firstName"), "Robert"),
            Formula::gt(Formula::field("age"), 35),
        ]));
    }

    #[test]
    fn test_decode_zero_argument_call() {
        let f = Formula::from_json(&json!(["TODAY"])).unwrap();
        assert_eq!(f, Formula::call("TODAY", Vec::new()));
    }

    #[test]
    fn test_field_object_ignores_extra_keys() {
        let f = Formula::from_json(&json!({"field": "age", "note": 1})).unwrap();
        assert_eq!(f, Formula::field("age"));
    }

    #[test]
    fn test_literal_strings_are_not_field_references() {
        // A string that happens to name a column is still a literal
        let f = Formula::from_json(&json!("age")).unwrap();
        assert_eq!(f, Formula::literal("age"));
    }

    #[test]
    fn test_decode_rejections() {
        let cases = [
            (json!([]), "empty array"),
            (json!([1, 2]), "call tag must be a string"),
            (json!(null), "null"),
            (json!({"name": "age"}), "only valid as field references"),
            (json!({"field": 12}), "field reference must be a string"),
            (json!(["=", null, 1]), "null"),
        ];

        for (value, expected) in cases {
            match Formula::from_json(&value) {
                Err(FormulaError::InvalidFormula(msg)) => {
                    assert!(msg.contains(expected), "{value}: unexpected message {msg}")
                }
                other => panic!("{value}: expected InvalidFormula, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_decode_depth_limit() {
        let mut value = json!(1);
        for _ in 0..5 {
            value = json!(["NOT", value]);
        }

        assert!(Formula::from_json_with_limit(&value, 5).is_ok());
        assert!(matches!(
            Formula::from_json_with_limit(&value, 4),
            Err(FormulaError::DepthLimitExceeded { limit: 4 })
        ));
    }

    #[test]
    fn test_serde_round_trip_through_strings() {
        let text = r#"["AND",["=",{"field":"firstName"},"Robert"],[">",{"field":"age"},35.5],true]"#;
        let f: Formula = serde_json::from_str(text).unwrap();
        assert_eq!(serde_json::to_string(&f).unwrap(), text);
    }

    #[test]
    fn test_deserialize_error_is_reported() {
        let err = serde_json::from_str::<Formula>(r#"["=", {"nofield": 1}, 2]"#).unwrap_err();
        assert!(err.to_string().contains("field references"));
    }
}
