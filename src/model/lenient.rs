//! Field decoders for loosely shaped API payloads. Each one accepts any JSON
//! value and maps anything it does not understand to "absent".

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::record::{MatchId, StreamSource};

pub(crate) fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(non_empty_string(Value::deserialize(deserializer)?))
}

/// Like [`string`] but numbers are accepted and rendered as text.
pub(crate) fn id_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => Some(n.to_string()),
        other => non_empty_string(other),
    })
}

pub(crate) fn match_id<'de, D>(deserializer: D) -> Result<Option<MatchId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => Some(
            n.as_i64()
                .map_or_else(|| MatchId::Text(n.to_string()), MatchId::Number),
        ),
        other => non_empty_string(other).map(MatchId::Text),
    })
}

#[allow(clippy::cast_possible_truncation)]
pub(crate) fn integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        _ => None,
    })
}

/// Truthiness the way the listing site treats flags: `true`, non-zero
/// numbers, non-empty strings and any array or object.
pub(crate) fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

pub(crate) fn object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_object() {
        Ok(serde_json::from_value(value).ok())
    } else {
        Ok(None)
    }
}

#[derive(Deserialize)]
struct RawSource {
    #[serde(default, deserialize_with = "string")]
    source: Option<String>,
    #[serde(default, deserialize_with = "id_string")]
    id: Option<String>,
}

/// Keeps the order of the `sources` array; entries missing either half of
/// the `(source, id)` pair are dropped.
pub(crate) fn sources<'de, D>(deserializer: D) -> Result<Vec<StreamSource>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|item| serde_json::from_value::<RawSource>(item).ok())
        .filter_map(|raw| {
            Some(StreamSource {
                source: raw.source?,
                id: raw.id?,
            })
        })
        .collect())
}

pub(crate) fn non_empty_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    }
}
