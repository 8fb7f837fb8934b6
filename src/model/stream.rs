use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::lenient;
use super::payload::normalize_values;

/// A playable stream for one source, as returned by
/// `GET {stream_host}/stream/{source}/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamDescriptor {
    #[serde(default, deserialize_with = "lenient::id_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub stream_no: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "lenient::truthy")]
    pub hd: bool,
    #[serde(default, deserialize_with = "lenient::string")]
    pub embed_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub source: Option<String>,
}

/// Stream descriptors in response order; entries without an embed URL are
/// dropped since they cannot be played.
#[must_use]
pub fn decode_streams(value: Value) -> Vec<StreamDescriptor> {
    normalize_values(value)
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|item| serde_json::from_value::<StreamDescriptor>(item).ok())
        .filter(|s| s.embed_url.is_some())
        .collect()
}
