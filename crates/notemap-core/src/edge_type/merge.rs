use serde_json::{Map, Value};
use std::collections::HashMap;

/// Overlay a record's own fields on top of its shadow defaults.
/// Own fields win on key collision.
pub fn merge_defaults(
    shadow: HashMap<String, Value>,
    own: HashMap<String, Value>,
) -> HashMap<String, Value> {
    let mut merged = shadow;
    merged.extend(own);
    merged
}

/// Recursively merge `incoming` into `base`. Colliding non-object values
/// take the incoming side; nested objects merge key by key.
pub fn deep_merge(base: &mut Map<String, Value>, incoming: Map<String, Value>) {
    for (key, value) in incoming {
        match (base.get_mut(&key), value) {
            (Some(Value::Object(existing)), Value::Object(nested)) => {
                deep_merge(existing, nested);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}
