use crate::error::{NotemapError, Result};
use crate::store::record::Record;
use crate::store::traits::RecordStore;
use chrono::Utc;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-process record store: a live layer over an immutable shadow layer.
///
/// Shadow records are the built-in defaults registered at construction; a
/// live record at the same path overrides them for normal reads but the
/// shadow stays reachable through `get_shadow_record`.
pub struct MemoryStore {
    live: RwLock<HashMap<String, Record>>,
    shadows: HashMap<String, Record>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            live: RwLock::new(HashMap::new()),
            shadows: HashMap::new(),
        }
    }

    /// Construct with built-in shadow defaults, keyed by their title path.
    pub fn with_shadows(shadows: impl IntoIterator<Item = Record>) -> Self {
        let shadows = shadows
            .into_iter()
            .map(|r| (r.title().to_string(), r))
            .collect();
        Self {
            live: RwLock::new(HashMap::new()),
            shadows,
        }
    }

    fn read_live(&self) -> Result<std::sync::RwLockReadGuard<'_, HashMap<String, Record>>> {
        self.live
            .read()
            .map_err(|_| NotemapError::Store("record store lock poisoned".into()))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for MemoryStore {
    fn record_exists(&self, path: &str) -> Result<bool> {
        Ok(self.read_live()?.contains_key(path))
    }

    fn get_record(&self, path: &str) -> Result<Option<Record>> {
        Ok(self.read_live()?.get(path).cloned())
    }

    fn get_shadow_record(&self, path: &str) -> Result<Option<Record>> {
        Ok(self.shadows.get(path).cloned())
    }

    fn put_record(&self, record: Record) -> Result<()> {
        let title = record.title().to_string();
        if title.is_empty() {
            return Err(NotemapError::Store("record has no title path".into()));
        }
        self.live
            .write()
            .map_err(|_| NotemapError::Store("record store lock poisoned".into()))?
            .insert(title, record);
        Ok(())
    }

    fn list_paths(&self, prefix: &str) -> Result<Vec<String>> {
        let mut paths: Vec<String> = self
            .read_live()?
            .keys()
            .filter(|p| p.starts_with(prefix))
            .cloned()
            .collect();
        paths.sort();
        Ok(paths)
    }

    fn creation_fields(&self) -> HashMap<String, Value> {
        let mut fields = HashMap::new();
        fields.insert(
            "created".to_string(),
            Value::String(Utc::now().to_rfc3339()),
        );
        fields
    }

    fn modification_fields(&self) -> HashMap<String, Value> {
        let mut fields = HashMap::new();
        fields.insert(
            "modified".to_string(),
            Value::String(Utc::now().to_rfc3339()),
        );
        fields
    }
}
