//! Lenient field decoders for contest JSON.
//!
//! Contest exports disagree on scalar types: team ids show up as strings or
//! integers, and cohort flags as booleans, numbers or quoted strings. These
//! helpers are meant for `#[serde(deserialize_with = "...")]`.

use serde::de::{Deserializer, Error};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum StringLike {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BoolLike {
    Bool(bool),
    Int(i64),
    String(String),
}

/// Decode a string that may have been written as a number. `null` becomes "".
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<StringLike>::deserialize(deserializer)? {
        None => String::new(),
        Some(StringLike::String(s)) => s,
        Some(StringLike::Int(i)) => i.to_string(),
        Some(StringLike::Float(f)) => f.to_string(),
        Some(StringLike::Bool(b)) => b.to_string(),
    })
}

/// Decode a boolean written as `true`, `1`, `"true"`, `"1"` and so on.
/// `null` and the empty string are false.
pub fn boolean<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<BoolLike>::deserialize(deserializer)? {
        None => Ok(false),
        Some(BoolLike::Bool(b)) => Ok(b),
        Some(BoolLike::Int(i)) => Ok(i != 0),
        Some(BoolLike::String(s)) => parse_bool(&s)
            .ok_or_else(|| D::Error::custom(format!("invalid boolean value: {s:?}"))),
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "1" | "yes" | "y" => Some(true),
        "false" | "f" | "0" | "no" | "n" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Flags {
        #[serde(default, deserialize_with = "string")]
        id: String,
        #[serde(default, deserialize_with = "boolean")]
        flag: bool,
    }

    fn decode(json: &str) -> Flags {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_string_accepts_numbers() {
        assert_eq!(decode(r#"{"id": "abc"}"#).id, "abc");
        assert_eq!(decode(r#"{"id": 17}"#).id, "17");
        assert_eq!(decode(r#"{"id": null}"#).id, "");
        assert_eq!(decode(r#"{}"#).id, "");
    }

    #[test]
    fn test_boolean_variants() {
        assert!(decode(r#"{"flag": true}"#).flag);
        assert!(decode(r#"{"flag": 1}"#).flag);
        assert!(decode(r#"{"flag": "TRUE"}"#).flag);
        assert!(decode(r#"{"flag": "1"}"#).flag);
        assert!(!decode(r#"{"flag": "false"}"#).flag);
        assert!(!decode(r#"{"flag": 0}"#).flag);
        assert!(!decode(r#"{"flag": null}"#).flag);
        assert!(!decode(r#"{}"#).flag);
    }

    #[test]
    fn test_boolean_rejects_garbage() {
        let result: Result<Flags, _> = serde_json::from_str(r#"{"flag": "maybe"}"#);
        assert!(result.is_err());
    }
}
