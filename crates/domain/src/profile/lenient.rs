//! Tolerant field decoders for hand-edited JSON.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

fn value_to_text<E: de::Error>(value: Value) -> Result<String, E> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(E::custom(format!("expected text, found {other}"))),
    }
}

/// Accept a string or a scalar (years are often written as numbers).
pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    value_to_text(Value::deserialize(deserializer)?)
}

/// Optional variant of [`text`]; `null` maps to `None`.
pub fn opt_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        other => value_to_text(other).map(Some),
    }
}

/// Accept either a single string or a list of strings.
pub fn one_or_many<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items.into_iter().map(value_to_text).collect(),
        other => value_to_text(other).map(|s| vec![s]),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Record {
        #[serde(deserialize_with = "super::text")]
        year: String,
        #[serde(default, deserialize_with = "super::opt_text")]
        amount: Option<String>,
        #[serde(default, deserialize_with = "super::one_or_many")]
        notes: Vec<String>,
    }

    #[test]
    fn should_accept_numeric_year() {
        let record: Record = serde_json::from_str(r#"{"year": 2024}"#).unwrap();
        assert_eq!(record.year, "2024");
        assert!(record.amount.is_none());
        assert!(record.notes.is_empty());
    }

    #[test]
    fn should_wrap_single_note() {
        let record: Record =
            serde_json::from_str(r#"{"year": "2020-2024", "notes": "TA award"}"#).unwrap();
        assert_eq!(record.notes, vec!["TA award".to_string()]);
    }

    #[test]
    fn should_reject_object_as_text() {
        let result: Result<Record, _> = serde_json::from_str(r#"{"year": {"a": 1}}"#);
        assert!(result.is_err());
    }
}
