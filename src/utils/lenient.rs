// Tolerant field decoders for records produced by other services
// Malformed values decode as absent instead of failing the whole record

use log::debug;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Read a number from a JSON number or a numeric string
pub fn number_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Null => None,
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            match trimmed.parse::<f64>() {
                Ok(n) => Some(n),
                Err(_) => {
                    debug!("Dropping non-numeric string field: {:?}", s);
                    None
                }
            }
        }
        other => {
            debug!("Dropping non-numeric field: {}", other);
            None
        }
    }
}

/// Read a JSON number only; strings and everything else are absent
pub fn strict_number_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Null => None,
        Value::Number(n) => n.as_f64(),
        other => {
            debug!("Dropping non-number field: {}", other);
            None
        }
    }
}

pub fn string_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => None,
        other => {
            debug!("Dropping non-string field: {}", other);
            None
        }
    }
}

pub fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number_from_value))
}

pub fn number_only_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(strict_number_from_value))
}

pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(string_from_value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_number_from_value() {
        assert_eq!(number_from_value(&json!(12.5)), Some(12.5));
        assert_eq!(number_from_value(&json!(" 40 ")), Some(40.0));
        assert_eq!(number_from_value(&json!("soon")), None);
        assert_eq!(number_from_value(&json!("")), None);
        assert_eq!(number_from_value(&json!(null)), None);
        assert_eq!(number_from_value(&json!([1, 2])), None);
    }

    #[test]
    fn test_strict_number_from_value() {
        assert_eq!(strict_number_from_value(&json!(-1)), Some(-1.0));
        assert_eq!(strict_number_from_value(&json!("-1")), None);
        assert_eq!(strict_number_from_value(&json!("150")), None);
        assert_eq!(strict_number_from_value(&json!(true)), None);
        assert_eq!(strict_number_from_value(&json!(null)), None);
    }

    #[test]
    fn test_string_from_value() {
        assert_eq!(string_from_value(&json!("Running")), Some("Running".to_string()));
        assert_eq!(string_from_value(&json!(3)), Some("3".to_string()));
        assert_eq!(string_from_value(&json!({"a": 1})), None);
    }
}
