//! Lenient integer decoding for request payloads.
//!
//! Browser form state keeps numbers and user ids as strings, so integer fields
//! accept either a JSON number or a string holding one.

use serde::{
    de::{Error, IgnoredAny},
    Deserialize, Deserializer,
};
use serde_json::Value;

pub fn value_as_i32(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub fn int<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    value_as_i32(&value)
        .ok_or_else(|| D::Error::custom(format!("expected an integer, found {}", value)))
}

/// Like [`int`], but `null`, a missing field or a blank string decode to `None`.
/// Pair with `#[serde(default)]`.
pub fn opt_int<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(value) => value_as_i32(&value)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("expected an integer, found {}", value))),
    }
}

/// Accepts any value and keeps nothing. Update payloads use it for keys a
/// client may echo back from a fetched row but can never change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ignored;

impl<'de> Deserialize<'de> for Ignored {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        IgnoredAny::deserialize(deserializer)?;
        Ok(Ignored)
    }
}
