use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use ordered_float::NotNan;
use serde_json::{Number, Value};
use std::fmt::{self, Display};

use crate::FormulaError;

/// A constant inside a formula. Literals are passed to the backend untouched
/// and only escaped when written out.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Literal {
    String(String),
    Int(i64),
    Float(NotNan<f64>),
    Bool(bool),
}

impl Literal {
    /// Convert a JSON scalar into a literal. Arrays, objects and null are not
    /// literals and yield `None`.
    pub fn from_json(value: &Value) -> Option<Literal> {
        match value {
            Value::String(s) => Some(Literal::String(s.clone())),
            Value::Bool(b) => Some(Literal::Bool(*b)),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Some(Literal::Int(i)),
                // serde_json never produces NaN
                None => n.as_f64().and_then(|f| NotNan::new(f).ok()).map(Literal::Float),
            },
            _ => None,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Literal::String(s) => Value::String(s.clone()),
            Literal::Int(i) => Value::Number(Number::from(*i)),
            Literal::Float(f) => Number::from_f64(f.into_inner())
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Literal::Bool(b) => Value::Bool(*b),
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => write!(f, "{:?}", s),
            Literal::Int(i) => write!(f, "{}", i),
            Literal::Float(n) => write!(f, "{}", n.into_inner()),
            Literal::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::String(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::String(value)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Bool(value)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Int(value)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Literal::Int(value as i64)
    }
}

impl From<u32> for Literal {
    fn from(value: u32) -> Self {
        Literal::Int(value as i64)
    }
}

impl From<NotNan<f64>> for Literal {
    fn from(value: NotNan<f64>) -> Self {
        Literal::Float(value)
    }
}

impl TryFrom<f64> for Literal {
    type Error = FormulaError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        NotNan::new(value)
            .map(Literal::Float)
            .map_err(|_| FormulaError::InvalidFormula("NaN is not a valid number literal".into()))
    }
}

/// Dates become ISO-8601 strings, the form `DATETIME_PARSE` and `IS_SAME`
/// accept.
impl From<NaiveDate> for Literal {
    fn from(value: NaiveDate) -> Self {
        Literal::String(value.format("%Y-%m-%d").to_string())
    }
}

impl From<DateTime<Utc>> for Literal {
    fn from(value: DateTime<Utc>) -> Self {
        Literal::String(value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn from_json_classifies_scalars() {
        assert_eq!(Literal::from_json(&json!("Robert")), Some(Literal::String("Robert".into())));
        assert_eq!(Literal::from_json(&json!(35)), Some(Literal::Int(35)));
        assert_eq!(Literal::from_json(&json!(true)), Some(Literal::Bool(true)));
        assert_eq!(
            Literal::from_json(&json!(2.5)),
            Some(Literal::Float(NotNan::new(2.5).unwrap()))
        );
        assert_eq!(Literal::from_json(&Value::Null), None);
        assert_eq!(Literal::from_json(&json!([1])), None);
        assert_eq!(Literal::from_json(&json!({"field": "x"})), None);
    }

    #[test]
    fn large_unsigned_numbers_become_floats() {
        let lit = Literal::from_json(&json!(u64::MAX)).unwrap();
        assert!(matches!(lit, Literal::Float(_)));
    }

    #[test]
    fn nan_is_rejected() {
        assert!(Literal::try_from(f64::NAN).is_err());
        assert_eq!(Literal::try_from(1.5).unwrap(), Literal::Float(NotNan::new(1.5).unwrap()));
    }

    #[test]
    fn dates_become_iso_strings() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(Literal::from(date), Literal::String("2024-03-09".into()));

        let ts = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap();
        assert_eq!(Literal::from(ts), Literal::String("2024-03-09T14:05:00.000Z".into()));
    }

    #[test]
    fn to_json_round_trips_scalars() {
        for value in [json!("a"), json!(7), json!(false), json!(0.25)] {
            assert_eq!(Literal::from_json(&value).unwrap().to_json(), value);
        }
    }
}
