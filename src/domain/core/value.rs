use indexmap::IndexMap;
use serde::de::Error as DeError;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Wire tags of the A2UI value encoding, in resolution priority order.
const VALUE_TAGS: [&str; 5] = [
    "valueString",
    "valueNumber",
    "valueBoolean",
    "valueArray",
    "valueMap",
];

/// A dynamic value in the A2UI data model.
///
/// On the wire a value is an object populating exactly one of
/// `valueString | valueNumber | valueBoolean | valueArray | valueMap`.
/// Maps appear in two encodings: a plain JSON object, or a list of
/// `{key, <tag>}` entries; both deserialize into [`DataValue::Map`].
///
/// # Example
/// ```rust
/// use a2ui_client::DataValue;
///
/// let value: DataValue = serde_json::from_str(r#"{"valueNumber": 42.0}"#).unwrap();
/// assert_eq!(value, DataValue::Number(42.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum DataValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Array(Vec<DataValue>),
    Map(IndexMap<String, DataValue>),
}

impl DataValue {
    /// Convert to a plain (untagged) JSON value, recursively.
    pub fn into_plain(self) -> Value {
        match self {
            DataValue::Text(s) => Value::String(s),
            DataValue::Number(n) => serde_json::Number::from_f64(n)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            DataValue::Bool(b) => Value::Bool(b),
            DataValue::Array(items) => {
                Value::Array(items.into_iter().map(DataValue::into_plain).collect())
            }
            DataValue::Map(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, v.into_plain()))
                    .collect(),
            ),
        }
    }

    /// Build a tagged value from a plain JSON value.
    ///
    /// Returns `None` for `null` (the encoding has no null variant) and for
    /// numbers outside the f64 range.
    pub fn from_plain(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(DataValue::Text(s.clone())),
            Value::Number(n) => n.as_f64().map(DataValue::Number),
            Value::Bool(b) => Some(DataValue::Bool(*b)),
            Value::Array(items) => Some(DataValue::Array(
                items.iter().filter_map(DataValue::from_plain).collect(),
            )),
            Value::Object(map) => Some(DataValue::Map(
                map.iter()
                    .filter_map(|(k, v)| DataValue::from_plain(v).map(|dv| (k.clone(), dv)))
                    .collect(),
            )),
            Value::Null => None,
        }
    }
}

impl Serialize for DataValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            DataValue::Text(s) => map.serialize_entry("valueString", s)?,
            DataValue::Number(n) => map.serialize_entry("valueNumber", n)?,
            DataValue::Bool(b) => map.serialize_entry("valueBoolean", b)?,
            DataValue::Array(items) => map.serialize_entry("valueArray", items)?,
            DataValue::Map(entries) => {
                // Maps serialize in the keyed-entry list form the protocol
                // uses for data model payloads.
                let entries: Vec<Value> = entries
                    .iter()
                    .map(|(k, v)| {
                        let mut entry = match serde_json::to_value(v) {
                            Ok(Value::Object(obj)) => obj,
                            _ => Map::new(),
                        };
                        entry.insert("key".to_string(), Value::String(k.clone()));
                        Value::Object(entry)
                    })
                    .collect();
                map.serialize_entry("valueMap", &entries)?;
            }
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for DataValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        let obj = raw
            .as_object()
            .ok_or_else(|| D::Error::custom("tagged value must be an object"))?;

        let tags: Vec<&str> = VALUE_TAGS
            .iter()
            .copied()
            .filter(|tag| obj.contains_key(*tag))
            .collect();
        if tags.len() != 1 {
            return Err(D::Error::custom(format!(
                "tagged value must populate exactly one variant, found {}",
                tags.len()
            )));
        }

        let tag = tags[0];
        let payload = &obj[tag];
        match tag {
            "valueString" => payload
                .as_str()
                .map(|s| DataValue::Text(s.to_string()))
                .ok_or_else(|| D::Error::custom("valueString must be a string")),
            "valueNumber" => payload
                .as_f64()
                .map(DataValue::Number)
                .ok_or_else(|| D::Error::custom("valueNumber must be a number")),
            "valueBoolean" => payload
                .as_bool()
                .map(DataValue::Bool)
                .ok_or_else(|| D::Error::custom("valueBoolean must be a boolean")),
            "valueArray" => {
                let items = payload
                    .as_array()
                    .ok_or_else(|| D::Error::custom("valueArray must be an array"))?;
                items
                    .iter()
                    .map(|item| DataValue::deserialize(item.clone()).map_err(D::Error::custom))
                    .collect::<Result<Vec<_>, _>>()
                    .map(DataValue::Array)
            }
            "valueMap" => match payload {
                // Entry-list form: [{key, <tag>}, ...]
                Value::Array(entries) => {
                    let mut map = IndexMap::new();
                    for entry in entries {
                        let entry_obj = entry
                            .as_object()
                            .ok_or_else(|| D::Error::custom("valueMap entry must be an object"))?;
                        let key = entry_obj
                            .get("key")
                            .and_then(Value::as_str)
                            .ok_or_else(|| D::Error::custom("valueMap entry missing key"))?;
                        let mut tagged = entry_obj.clone();
                        tagged.remove("key");
                        let value = DataValue::deserialize(Value::Object(tagged))
                            .map_err(D::Error::custom)?;
                        map.insert(key.to_string(), value);
                    }
                    Ok(DataValue::Map(map))
                }
                // Plain-object form: {k: <tagged>}
                Value::Object(fields) => {
                    let mut map = IndexMap::new();
                    for (k, v) in fields {
                        let value =
                            DataValue::deserialize(v.clone()).map_err(D::Error::custom)?;
                        map.insert(k.clone(), value);
                    }
                    Ok(DataValue::Map(map))
                }
                _ => Err(D::Error::custom("valueMap must be an array or object")),
            },
            _ => unreachable!("tag filtered from VALUE_TAGS"),
        }
    }
}

/// Pack a plain JSON value into the tagged wire encoding.
///
/// Strings, numbers and booleans become single-tag objects; arrays pack
/// element-wise under `valueArray`; objects become `valueMap` entry lists.
/// `null` passes through unchanged. Numbers are preserved exactly, so
/// [`unpack`]`(pack(v)) == v` for any plain value.
pub fn pack(value: &Value) -> Value {
    match value {
        Value::String(s) => serde_json::json!({ "valueString": s }),
        Value::Number(n) => serde_json::json!({ "valueNumber": n }),
        Value::Bool(b) => serde_json::json!({ "valueBoolean": b }),
        Value::Array(items) => {
            serde_json::json!({ "valueArray": items.iter().map(pack).collect::<Vec<_>>() })
        }
        Value::Object(map) => {
            let entries: Vec<Value> = map
                .iter()
                .map(|(k, v)| {
                    let mut entry = match pack(v) {
                        Value::Object(obj) => obj,
                        other => {
                            // null payloads have no tag; keep them addressable
                            let mut obj = Map::new();
                            obj.insert("valueString".to_string(), other);
                            obj
                        }
                    };
                    entry.insert("key".to_string(), Value::String(k.clone()));
                    Value::Object(entry)
                })
                .collect();
            serde_json::json!({ "valueMap": entries })
        }
        Value::Null => Value::Null,
    }
}

/// Recursively unpack a dynamic value into plain host collections.
///
/// The single visitor of the resolver contract: maps unpack value-wise,
/// sequences unpack element-wise, objects carrying one of the wire tags
/// unwrap to their payload (collections recursively), and anything else
/// passes through unchanged.
pub fn unpack(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(unpack).collect()),
        Value::Object(map) => {
            for tag in VALUE_TAGS {
                if let Some(payload) = map.get(tag) {
                    return match tag {
                        "valueArray" => unpack(payload),
                        "valueMap" => unpack_map_payload(payload),
                        _ => payload.clone(),
                    };
                }
            }
            Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), unpack(v)))
                    .collect(),
            )
        }
        other => other.clone(),
    }
}

/// Unpack the payload of a `valueMap` tag, accepting both wire forms.
fn unpack_map_payload(payload: &Value) -> Value {
    match payload {
        Value::Array(entries) => keyed_entries(entries)
            .map(Value::Object)
            .unwrap_or_else(|| unpack(payload)),
        other => unpack(other),
    }
}

/// Fold `[{key, <tag>}, ...]` entries into a plain map; `None` when any
/// entry lacks a string key.
fn keyed_entries(entries: &[Value]) -> Option<Map<String, Value>> {
    let mut map = Map::new();
    for entry in entries {
        let obj = entry.as_object()?;
        let key = obj.get("key")?.as_str()?;
        let mut rest = obj.clone();
        rest.remove("key");
        map.insert(key.to_string(), unpack(&Value::Object(rest)));
    }
    Some(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_wire_shapes() {
        let value = DataValue::Text("hello".to_string());
        assert_eq!(
            serde_json::to_value(&value).unwrap(),
            json!({"valueString": "hello"})
        );

        let value = DataValue::Bool(true);
        assert_eq!(
            serde_json::to_value(&value).unwrap(),
            json!({"valueBoolean": true})
        );
    }

    #[test]
    fn test_rejects_multi_tag_objects() {
        let raw = json!({"valueString": "a", "valueNumber": 1});
        assert!(serde_json::from_value::<DataValue>(raw).is_err());
    }

    #[test]
    fn test_map_entry_list_roundtrip() {
        let raw = json!({"valueMap": [
            {"key": "x", "valueNumber": 1.0},
            {"key": "label", "valueString": "Jan"}
        ]});
        let value: DataValue = serde_json::from_value(raw).unwrap();
        assert_eq!(
            value.into_plain(),
            json!({"x": 1.0, "label": "Jan"})
        );
    }

    #[test]
    fn test_unpack_passes_untagged_through() {
        let raw = json!({"plain": [1, 2, 3]});
        assert_eq!(unpack(&raw), raw);
    }
}
