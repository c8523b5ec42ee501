//! Serde helpers for the vendor's inconsistent JSON typing.
//!
//! The auth endpoint has returned `defaultSectionId` both as a JSON number
//! and as a string depending on account type. These helpers normalize such
//! fields to strings so the rest of the crate only ever sees one shape.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    U64(u64),
    I64(i64),
}

/// Deserialize an optional field that may be a string or an integer into its
/// decimal string form.
pub fn opt_string_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<StringOrNumber>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        StringOrNumber::String(s) => s,
        StringOrNumber::U64(n) => n.to_string(),
        StringOrNumber::I64(n) => n.to_string(),
    }))
}
