//! Serde helper functions for lenient deserialization.
//!
//! Schedule documents may be written by other clients, so optional enum
//! fields treat empty, unrecognised or non-string values as absent instead
//! of failing the whole document.

use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize an optional value through `FromStr`. Anything other than a
/// string that parses becomes None.
pub fn deserialize_lenient_option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}
