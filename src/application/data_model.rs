use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::domain::core::directive::DataModelUpdate;
use crate::domain::core::surface::binding_path;
use crate::domain::core::value::unpack;

/// Path-addressed storage behind component bindings.
///
/// Updates naming a surface write into that surface's model; unnamed
/// updates write into a process-wide model that resolution falls back to.
/// Values are stored as received (tagged or plain) and unpacked on
/// resolution.
#[derive(Debug, Default)]
pub struct DataModelStore {
    surfaces: HashMap<String, Value>,
    shared: Value,
}

impl DataModelStore {
    pub fn new() -> Self {
        Self {
            surfaces: HashMap::new(),
            shared: Value::Object(Map::new()),
        }
    }

    /// Apply a data model update directive
    pub fn apply_update(&mut self, update: &DataModelUpdate) {
        let Some(contents) = update.contents.as_ref() else {
            return;
        };
        let root = match update.surface_id.as_deref() {
            Some(surface_id) => self
                .surfaces
                .entry(surface_id.to_string())
                .or_insert_with(|| Value::Object(Map::new())),
            None => &mut self.shared,
        };
        write_at_path(root, update.path.as_deref().unwrap_or(""), contents);
    }

    /// Drop a surface's model
    pub fn delete_surface(&mut self, surface_id: &str) {
        self.surfaces.remove(surface_id);
    }

    /// Look up the raw (still tagged) value at `path`, checking the
    /// surface's model first and the shared model second.
    pub fn lookup(&self, surface_id: &str, path: &str) -> Option<&Value> {
        self.surfaces
            .get(surface_id)
            .and_then(|root| value_at_path(root, path))
            .or_else(|| value_at_path(&self.shared, path))
    }

    /// Resolve a component property value into plain renderable data.
    ///
    /// Bindings look up their path and unpack; literals unpack in place.
    /// Missing paths, resolution failures and nulls all collapse to `None`
    /// so callers degrade to "no data" instead of failing the render.
    pub fn resolve_property(&self, surface_id: &str, value: &Value) -> Option<Value> {
        let raw = match binding_path(value) {
            Some(path) => self.lookup(surface_id, path)?.clone(),
            None => value.clone(),
        };
        match unpack(&raw) {
            Value::Null => None,
            plain => Some(plain),
        }
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(['/', '.']).filter(|s| !s.is_empty())
}

fn value_at_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in segments(path) {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Write `contents` at `path`, creating intermediate objects as needed.
/// An empty path replaces the root; keyed-entry lists merge entry-wise so
/// later updates can extend the model instead of clobbering it.
fn write_at_path(root: &mut Value, path: &str, contents: &Value) {
    let target = ensure_path(root, path);

    if let Value::Array(entries) = contents {
        let keyed: Vec<(&str, &Map<String, Value>)> = entries
            .iter()
            .filter_map(|entry| {
                let obj = entry.as_object()?;
                obj.get("key").and_then(Value::as_str).map(|k| (k, obj))
            })
            .collect();
        if keyed.len() == entries.len() && !entries.is_empty() {
            if !target.is_object() {
                *target = Value::Object(Map::new());
            }
            let map = target.as_object_mut().expect("object ensured above");
            for (key, obj) in keyed {
                let mut tagged = obj.clone();
                tagged.remove("key");
                map.insert(key.to_string(), Value::Object(tagged));
            }
            return;
        }
    }

    *target = contents.clone();
}

fn ensure_path<'a>(root: &'a mut Value, path: &str) -> &'a mut Value {
    let mut current = root;
    for segment in segments(path) {
        if !current.is_object() {
            *current = Value::Object(Map::new());
        }
        current = current
            .as_object_mut()
            .expect("object ensured above")
            .entry(segment.to_string())
            .or_insert(Value::Null);
    }
    current
}
