//! Deep merge over JSON-shaped values

use serde_json::{Map, Value};

/// Merge `source` into `target`.
///
/// Two mappings merge key by key with `source` winning on conflicts. Anything
/// else (arrays, scalars, mismatched kinds) is replaced wholesale.
pub fn deep_merge(target: &mut Value, source: Value) {
    match (target, source) {
        (Value::Object(target), Value::Object(source)) => deep_merge_maps(target, source),
        (target, source) => *target = source,
    }
}

pub fn deep_merge_maps(target: &mut Map<String, Value>, source: Map<String, Value>) {
    for (key, value) in source {
        match target.get_mut(&key) {
            Some(existing) => deep_merge(existing, value),
            None => {
                target.insert(key, value);
            }
        }
    }
}
