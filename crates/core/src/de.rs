//! Lenient deserializers for stored section payloads.
//!
//! Payloads are edited as whole JSON documents by the admin panel and have
//! drifted over time, so scalar fields may arrive with the wrong JSON type.
//! These helpers never fail: a value of an unexpected shape degrades to
//! `None` (or an empty list) and the documented default takes over at the
//! normalization layer.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accept a JSON string; anything else (numbers, null, objects) is `None`.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Accept a JSON number or a numeric string; anything else is `None`.
///
/// Fractional inputs are truncated. Non-finite floats are rejected.
pub fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_int(&value))
}

pub(crate) fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64)),
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f as i64))
        }
        _ => None,
    }
}

/// Accept a JSON number only. Numeric strings are NOT coerced.
pub fn strict_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        _ => None,
    })
}

/// Accept a JSON boolean; anything else is `None`.
pub fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => Some(b),
        _ => None,
    })
}

/// Accept a JSON array, silently dropping elements that fail to parse.
/// A non-array value yields an empty list.
pub fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

/// Deserialize a nested value, degrading to `T::default()` on any mismatch.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coerce_int_accepts_numbers_and_numeric_strings() {
        assert_eq!(coerce_int(&json!(7)), Some(7));
        assert_eq!(coerce_int(&json!("7")), Some(7));
        assert_eq!(coerce_int(&json!(" 12 ")), Some(12));
        assert_eq!(coerce_int(&json!(7.9)), Some(7));
        assert_eq!(coerce_int(&json!("7.9")), Some(7));
    }

    #[test]
    fn coerce_int_rejects_non_numeric_values() {
        assert_eq!(coerce_int(&json!("many")), None);
        assert_eq!(coerce_int(&json!(null)), None);
        assert_eq!(coerce_int(&json!(true)), None);
        assert_eq!(coerce_int(&json!({})), None);
    }
}
