//! Key/value record access without in-place mutation.

use serde_json::{Map, Value};

pub fn prop<'a>(name: &str, record: &'a Value) -> Option<&'a Value> {
    record.as_object().and_then(|fields| fields.get(name))
}

/// Shallow copy of `record` with `name` set to `value`.
///
/// Anything that is not an object is treated as an empty record.
pub fn set_prop(name: &str, record: &Value, value: impl Into<Value>) -> Value {
    let mut fields = record.as_object().cloned().unwrap_or_else(Map::new);
    fields.insert(name.to_string(), value.into());
    Value::Object(fields)
}
