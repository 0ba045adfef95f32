//! Query-string flattening for typed query records.
//!
//! Arrays are exploded into repeated keys (`chainIds=1&chainIds=8453`),
//! nested objects are sent as compact JSON, and `null` fields are dropped.

use serde::Serialize;
use serde_json::Value;

use crate::error::HttpError;

/// Flatten a serializable query record into ordered `(key, value)` pairs.
pub fn to_query_pairs<Q: Serialize>(query: &Q) -> Result<Vec<(String, String)>, HttpError> {
    let value =
        serde_json::to_value(query).map_err(|e| HttpError::InvalidQuery(e.to_string()))?;

    let mut pairs = Vec::new();
    match value {
        Value::Object(map) => {
            for (key, field) in map {
                push_value(&mut pairs, &key, field);
            }
        }
        Value::Null => {}
        other => {
            return Err(HttpError::InvalidQuery(format!(
                "query must serialize to an object, got {}",
                other
            )))
        }
    }
    Ok(pairs)
}

fn push_value(pairs: &mut Vec<(String, String)>, key: &str, value: Value) {
    match value {
        Value::Null => {}
        Value::String(s) => pairs.push((key.to_string(), s)),
        Value::Array(items) => {
            for item in items {
                push_value(pairs, key, item);
            }
        }
        other => pairs.push((key.to_string(), other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pairs(value: Value) -> Vec<(String, String)> {
        to_query_pairs(&value).unwrap()
    }

    fn pair(k: &str, v: &str) -> (String, String) {
        (k.to_string(), v.to_string())
    }

    #[test]
    fn test_scalars() {
        let out = pairs(json!({ "address": "0xabc", "chain": 8453, "flag": true }));
        assert_eq!(
            out,
            vec![
                pair("address", "0xabc"),
                pair("chain", "8453"),
                pair("flag", "true"),
            ]
        );
    }

    #[test]
    fn test_null_fields_are_dropped() {
        let out = pairs(json!({ "identifier": "jacob", "after": null }));
        assert_eq!(out, vec![pair("identifier", "jacob")]);
    }

    #[test]
    fn test_arrays_repeat_the_key() {
        let mut out = pairs(json!({ "coins": ["a", "b"], "chainIds": [1, 8453] }));
        out.sort();
        assert_eq!(
            out,
            vec![
                pair("chainIds", "1"),
                pair("chainIds", "8453"),
                pair("coins", "a"),
                pair("coins", "b"),
            ]
        );
    }

    #[test]
    fn test_nested_objects_become_json() {
        let out = pairs(json!({ "coin": { "chainId": 1 } }));
        assert_eq!(out, vec![pair("coin", r#"{"chainId":1}"#)]);
    }

    #[test]
    fn test_unit_query_is_empty() {
        assert!(to_query_pairs(&()).unwrap().is_empty());
    }

    #[test]
    fn test_non_object_query_is_rejected() {
        let err = to_query_pairs(&"plain").unwrap_err();
        assert!(matches!(err, HttpError::InvalidQuery(_)));
    }
}
