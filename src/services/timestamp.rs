//! Serde adapter for `created_time` fields.
//!
//! The API sends Unix seconds as a decimal string (`"1279340983"`). A bare
//! number is also accepted; `null`, `""` and a missing field decode to `None`.
//! Values are written back as strings.

use chrono::{DateTime, TimeZone, Utc};
use serde::de;
use serde::{Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Text(String),
    Number(i64),
}

/// Serializes an optional timestamp as a Unix-seconds string.
///
/// # Errors
///
/// Propagates the serializer's error.
pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(time) => serializer.serialize_str(&time.timestamp().to_string()),
        None => serializer.serialize_none(),
    }
}

/// Deserializes a Unix-seconds string or number.
///
/// # Errors
///
/// Fails when the string is not an integer or the value is out of range.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let seconds = match Option::<RawTimestamp>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(RawTimestamp::Text(text)) if text.is_empty() => return Ok(None),
        Some(RawTimestamp::Text(text)) => text
            .parse::<i64>()
            .map_err(|_| de::Error::custom(format!("invalid unix timestamp: {text:?}")))?,
        Some(RawTimestamp::Number(seconds)) => seconds,
    };

    Utc.timestamp_opt(seconds, 0)
        .single()
        .map(Some)
        .ok_or_else(|| de::Error::custom(format!("unix timestamp out of range: {seconds}")))
}
