use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Field name holding a record's storage path.
pub const TITLE_FIELD: &str = "title";

/// Optional field carrying a self-describing identifier on exported records.
pub const ID_FIELD: &str = "id";

/// A stored record: a flat field mapping keyed by field name.
///
/// The `title` field doubles as the storage path. Everything else is
/// host-defined; this crate only interprets the whitelisted edge-type
/// attributes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Record {
    pub fields: HashMap<String, Value>,
}

impl Record {
    /// Create a record at the given storage path.
    pub fn new(title: impl Into<String>) -> Self {
        let mut fields = HashMap::new();
        fields.insert(TITLE_FIELD.to_string(), Value::String(title.into()));
        Self { fields }
    }

    /// Build from an existing field mapping.
    pub fn from_fields(fields: HashMap<String, Value>) -> Self {
        Self { fields }
    }

    /// Builder-style field setter.
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The storage path, or "" for a malformed record.
    pub fn title(&self) -> &str {
        self.fields
            .get(TITLE_FIELD)
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    /// The identifier field carried by exported records, if any.
    pub fn id_field(&self) -> Option<&str> {
        self.fields.get(ID_FIELD).and_then(Value::as_str)
    }
}
