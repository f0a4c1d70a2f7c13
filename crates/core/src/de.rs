//! Lenient serde helpers for content-store JSON.

use crate::block::{Block, parse_blocks};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value as JsonValue;

/// Treats an explicit `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decodes a field, replacing `null` or a value of the wrong JSON type with
/// the default. Only a syntactically broken document fails.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let raw = JsonValue::deserialize(deserializer)?;
    Ok(serde_json::from_value(raw).unwrap_or_default())
}

/// Decodes a nested block array; anything that is not an array yields no blocks.
pub(crate) fn lenient_blocks<'de, D>(deserializer: D) -> Result<Vec<Block>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = JsonValue::deserialize(deserializer)?;
    Ok(parse_blocks(&raw).unwrap_or_default())
}

/// Like [`lenient_blocks`] but keeps the absent/present distinction.
pub(crate) fn lenient_optional_blocks<'de, D>(
    deserializer: D,
) -> Result<Option<Vec<Block>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = JsonValue::deserialize(deserializer)?;
    Ok(parse_blocks(&raw))
}
