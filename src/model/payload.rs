use serde_json::{Map, Value};
use tracing::debug;

use super::record::MatchRecord;

/// Shape of a listing response. The API has answered with a bare array, a
/// `{ "data": [...] }` or `{ "matches": [...] }` envelope, and other objects
/// holding the list under some other key; variants are tried in that order.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    List(Vec<Value>),
    Data(Vec<Value>),
    Matches(Vec<Value>),
    /// First array-valued field, in document key order.
    Field { key: String, items: Vec<Value> },
    Empty,
}

impl Payload {
    #[must_use]
    pub fn decode(value: Value) -> Self {
        match value {
            Value::Array(items) => Payload::List(items),
            Value::Object(map) => Self::decode_object(map),
            _ => Payload::Empty,
        }
    }

    fn decode_object(mut map: Map<String, Value>) -> Self {
        // Look before removing: removal may reorder the remaining keys.
        if map.get("data").is_some_and(Value::is_array) {
            if let Some(Value::Array(items)) = map.remove("data") {
                return Payload::Data(items);
            }
        }
        if map.get("matches").is_some_and(Value::is_array) {
            if let Some(Value::Array(items)) = map.remove("matches") {
                return Payload::Matches(items);
            }
        }
        let Some(key) = map
            .iter()
            .find(|(_, v)| v.is_array())
            .map(|(k, _)| k.clone())
        else {
            return Payload::Empty;
        };
        match map.remove(&key) {
            Some(Value::Array(items)) => Payload::Field { key, items },
            _ => Payload::Empty,
        }
    }

    #[must_use]
    pub fn into_items(self) -> Vec<Value> {
        match self {
            Payload::List(items)
            | Payload::Data(items)
            | Payload::Matches(items)
            | Payload::Field { items, .. } => items,
            Payload::Empty => Vec::new(),
        }
    }
}

/// The array a payload carries, or an empty one. Never fails.
#[must_use]
pub fn normalize_values(value: Value) -> Vec<Value> {
    Payload::decode(value).into_items()
}

/// Normalizes a listing payload into match records, keeping order. Entries
/// that are not objects are skipped.
#[must_use]
pub fn normalize_response(value: Value) -> Vec<MatchRecord> {
    normalize_values(value)
        .into_iter()
        .filter_map(|item| {
            if !item.is_object() {
                debug!("skipping non-object listing entry: {item}");
                return None;
            }
            match serde_json::from_value::<MatchRecord>(item) {
                Ok(record) => Some(record),
                Err(e) => {
                    debug!("skipping undecodable listing entry: {e}");
                    None
                }
            }
        })
        .collect()
}
