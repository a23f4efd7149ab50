//! Serde helper functions for provider payloads.
//!
//! ClickUp is inconsistent about identifier types: the same field can arrive
//! as a JSON number on one endpoint and as a string on another.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Integer(i64),
    Unsigned(u64),
}

/// Deserialize an identifier that may be a JSON number or a string.
///
/// Numbers are rendered in their decimal form, strings are kept verbatim.
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) if !s.is_empty() => Ok(s),
        StringOrNumber::String(_) => Err(serde::de::Error::custom("empty identifier")),
        StringOrNumber::Integer(n) => Ok(n.to_string()),
        StringOrNumber::Unsigned(n) => Ok(n.to_string()),
    }
}

/// Deserialize an optional string, treating `null` and empty strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}
