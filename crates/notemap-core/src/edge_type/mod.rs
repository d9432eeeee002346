mod merge;

pub use merge::{deep_merge, merge_defaults};


use crate::config::GraphConfig;
use crate::error::{NotemapError, Result};
use crate::store::{Record, RecordStore, ID_FIELD, TITLE_FIELD};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// Attribute names an edge type accepts. Writes outside this list are
/// dropped, never stored.
pub const ATTRIBUTE_WHITELIST: &[&str] = &[
    "description",
    "style",
    "label",
    "modified",
    "created",
    "show-label",
];

const STYLE_ATTR: &str = "style";
const LABEL_ATTR: &str = "label";

/// Source an edge type can be built from.
///
/// This replaces the host system's dynamic argument dispatch with explicit
/// variants: an already-built descriptor passes through untouched, a bare or
/// namespaced id triggers a store load, a raw record is resolved to its id
/// and loaded, and `Unknown` falls back to the reserved sentinel.
pub enum EdgeTypeInit {
    Existing(EdgeType),
    Id(String),
    Record(Record),
    Unknown,
}

/// A typed relationship descriptor for the graph view.
///
/// Wraps one record in the backing store: the id names the relationship
/// kind, the attribute map carries display/style metadata. The style
/// attribute is kept as a structured JSON object in memory and only
/// serialized to text inside the record written by [`EdgeType::persist`].
#[derive(Clone)]
pub struct EdgeType {
    id: String,
    attributes: HashMap<String, Value>,
    store: Arc<dyn RecordStore>,
    config: GraphConfig,
}

impl std::fmt::Debug for EdgeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EdgeType")
            .field("id", &self.id)
            .field("attributes", &self.attributes)
            .finish()
    }
}

impl EdgeType {
    /// Build an edge type from any of the accepted sources.
    ///
    /// An `Existing` descriptor is returned unchanged; the supplied store and
    /// config are ignored in that case. All other variants construct a fresh
    /// descriptor and load it from the store.
    pub fn create(init: EdgeTypeInit, store: Arc<dyn RecordStore>, config: GraphConfig) -> Self {
        match init {
            EdgeTypeInit::Existing(existing) => existing,
            init => {
                let mut edge_type = Self {
                    id: config.unknown_id.clone(),
                    attributes: HashMap::new(),
                    store,
                    config,
                };
                edge_type.load(init);
                edge_type
            }
        }
    }

    /// Dynamic entry point for hosts that hand over untyped values.
    ///
    /// Falsy values resolve to the unknown sentinel, strings to an id load,
    /// objects to a record load. Any other truthy value is rejected — the
    /// only failure this component raises.
    pub fn from_value(
        value: Value,
        store: Arc<dyn RecordStore>,
        config: GraphConfig,
    ) -> Result<Self> {
        let init = match value {
            value if !is_truthy(&value) => EdgeTypeInit::Unknown,
            Value::String(id) => EdgeTypeInit::Id(id),
            Value::Object(fields) => {
                EdgeTypeInit::Record(Record::from_fields(fields.into_iter().collect()))
            }
            other => {
                return Err(NotemapError::InvalidType {
                    reason: format!("expected id, record, or nothing, got {other}"),
                })
            }
        };
        Ok(Self::create(init, store, config))
    }

    /// Reload this descriptor from the given source. The id is replaced for
    /// id and record sources, but never copied from another descriptor.
    pub fn load(&mut self, init: EdgeTypeInit) {
        match init {
            EdgeTypeInit::Existing(other) => self.merge_from(&other),
            EdgeTypeInit::Record(record) => {
                let id = match record.id_field() {
                    Some(id) => id.to_string(),
                    None => self
                        .config
                        .strip_edge_type_prefix(record.title())
                        .to_string(),
                };
                self.id = id;
                let path = self.path();
                self.load_from_path(&path);
            }
            EdgeTypeInit::Id(id) => {
                self.id = self.config.strip_edge_type_prefix(&id).to_string();
                let path = self.path();
                self.load_from_path(&path);
            }
            EdgeTypeInit::Unknown => {
                self.id = self.config.unknown_id.clone();
                let path = self.path();
                self.load_from_path(&path);
            }
        }
    }

    /// Merge another descriptor's attribute map into this one. The other
    /// descriptor's id is not taken over.
    pub fn merge_from(&mut self, other: &EdgeType) {
        self.set_attributes(other.attributes.clone());
    }

    /// Read the record at `path` and apply its fields, shadow defaults
    /// underneath. A missing record is not an error: the descriptor keeps
    /// whatever defaults it already has.
    pub fn load_from_path(&mut self, path: &str) {
        let shadow = self.store.get_shadow_record(path).ok().flatten();
        let record = match self.store.get_record(path).ok().flatten() {
            Some(record) => Some(record),
            None => shadow.clone(),
        };
        match record {
            Some(record) => {
                let defaults = shadow.map(|s| s.fields).unwrap_or_default();
                self.set_attributes(merge_defaults(defaults, record.fields));
            }
            None => log::trace!("no record at {path}, keeping defaults"),
        }
    }

    /// The edge-type id, without the namespace prefix.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The namespaced storage path for this id.
    pub fn path(&self) -> String {
        self.config.edge_type_path(&self.id)
    }

    /// Whether a record exists at this type's storage path.
    pub fn exists(&self) -> bool {
        self.store.record_exists(&self.path()).unwrap_or(false)
    }

    /// Whether this is the automatically generated default relation.
    /// System-owned; nothing beyond this flag enforces that.
    pub fn is_builtin(&self) -> bool {
        self.id == self.config.link_type_id
    }

    /// Display label: the explicit `label` attribute if set, otherwise the
    /// id substring after the first namespace separator.
    pub fn label(&self) -> String {
        if let Some(label) = self.attributes.get(LABEL_ATTR).and_then(Value::as_str) {
            if !label.is_empty() {
                return label.to_string();
            }
        }
        match self.id.split_once(':') {
            Some((_, rest)) if !rest.is_empty() => rest.to_string(),
            _ => self.id.clone(),
        }
    }

    /// Raw attribute lookup. `label` is a derived field and routes through
    /// [`EdgeType::label`] rather than trusting the stored value.
    pub fn data(&self, key: &str) -> Option<Value> {
        if key == LABEL_ATTR {
            return Some(Value::String(self.label()));
        }
        self.attributes.get(key).cloned()
    }

    /// The full attribute map. Shared state: later setter calls on this
    /// descriptor are visible through subsequent reads.
    pub fn attributes(&self) -> &HashMap<String, Value> {
        &self.attributes
    }

    /// Set a single attribute. Style values route through
    /// [`EdgeType::set_style`]; any other key is stored only when it is
    /// whitelisted and the value is truthy, and deleted otherwise. That
    /// also deletes whitelisted keys set to a falsy value, so
    /// `show-label: false` cannot be stored this way.
    pub fn set_attribute(&mut self, key: &str, value: Value) {
        if key == STYLE_ATTR {
            self.set_style(value, false);
            return;
        }
        if is_truthy(&value) && ATTRIBUTE_WHITELIST.contains(&key) {
            self.attributes.insert(key.to_string(), value);
        } else {
            self.attributes.remove(key);
        }
    }

    /// Apply a whole mapping through [`EdgeType::set_attribute`], one key at
    /// a time. Keys are independent; there is no atomicity across them.
    pub fn set_attributes(&mut self, attributes: HashMap<String, Value>) {
        for (key, value) in attributes {
            self.set_attribute(&key, value);
        }
    }

    /// Set or merge the style object.
    ///
    /// Text input is parsed first; unparseable text and non-object values
    /// leave the current style untouched. With `merge` the incoming object
    /// is deep-merged into the existing style, otherwise it replaces it.
    pub fn set_style(&mut self, style: Value, merge: bool) {
        let parsed = match style {
            Value::String(text) => match serde_json::from_str::<Value>(&text) {
                Ok(value) => value,
                Err(err) => {
                    log::debug!("ignoring unparseable style payload for {}: {err}", self.id);
                    return;
                }
            },
            other => other,
        };
        let Value::Object(incoming) = parsed else {
            log::trace!("ignoring non-object style for {}", self.id);
            return;
        };
        if merge {
            let mut base = match self.attributes.remove(STYLE_ATTR) {
                Some(Value::Object(existing)) => existing,
                _ => Map::new(),
            };
            deep_merge(&mut base, incoming);
            self.attributes.insert(STYLE_ATTR.to_string(), Value::Object(base));
        } else {
            self.attributes
                .insert(STYLE_ATTR.to_string(), Value::Object(incoming));
        }
    }

    /// Write a snapshot of the current attributes to the store.
    ///
    /// With no destination the record goes to this type's namespaced path
    /// and gets modification fields, plus creation fields when nothing is
    /// stored there yet. A destination outside the namespace is treated as
    /// an export and carries an explicit id field instead. The style object
    /// is serialized to text in the written record; the in-memory object is
    /// left as is. The existence check and the write are not atomic.
    pub fn persist(&self, destination: Option<&str>, pretty: bool) -> Result<()> {
        let destination = match destination {
            Some(destination) => destination.to_string(),
            None => self.path(),
        };

        let mut fields = self.attributes.clone();
        fields.insert(TITLE_FIELD.to_string(), Value::String(destination.clone()));

        if self.config.is_edge_type_path(&destination) {
            fields.extend(self.store.modification_fields());
            if !self.store.record_exists(&destination)? {
                fields.extend(self.store.creation_fields());
            }
        } else {
            fields.insert(ID_FIELD.to_string(), Value::String(self.id.clone()));
        }

        if let Some(Value::Object(style)) = self.attributes.get(STYLE_ATTR) {
            let text = if pretty {
                pretty_style_text(style, self.config.json_indent)?
            } else {
                serde_json::to_string(style).map_err(|e| NotemapError::Store(e.to_string()))?
            };
            fields.insert(STYLE_ATTR.to_string(), Value::String(text));
        }

        self.store.put_record(Record::from_fields(fields))
    }
}

/// List all edge types stored under the configured namespace.
pub fn list_edge_types(
    store: &Arc<dyn RecordStore>,
    config: &GraphConfig,
) -> Result<Vec<EdgeType>> {
    let prefix = format!("{}/", config.edge_type_root);
    let mut types = Vec::new();
    for path in store.list_paths(&prefix)? {
        types.push(EdgeType::create(
            EdgeTypeInit::Id(path),
            store.clone(),
            config.clone(),
        ));
    }
    Ok(types)
}

/// Host-dynamic truthiness: null, `false`, zero, and the empty string are
/// falsy; arrays and objects are truthy even when empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn pretty_style_text(style: &Map<String, Value>, indent: usize) -> Result<String> {
    let indent_bytes = vec![b' '; indent];
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent_bytes);
    let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
    style
        .serialize(&mut ser)
        .map_err(|e| NotemapError::Store(e.to_string()))?;
    String::from_utf8(out).map_err(|e| NotemapError::Store(e.to_string()))
}
