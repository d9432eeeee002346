use crate::error::Result;
use crate::store::record::Record;
use serde_json::Value;
use std::collections::HashMap;

/// Narrow interface onto the host's record store.
///
/// The real store belongs to the host (a wiki, a note database); this trait
/// is the only surface the edge-type layer touches. `MemoryStore` is the
/// in-process reference implementation.
pub trait RecordStore: Send + Sync {
    /// Whether a record exists at the given path.
    fn record_exists(&self, path: &str) -> Result<bool>;

    /// Retrieve the record at a path.
    fn get_record(&self, path: &str) -> Result<Option<Record>>;

    /// Retrieve the built-in shadow default for a path, if the host ships one.
    fn get_shadow_record(&self, path: &str) -> Result<Option<Record>>;

    /// Create or replace the record at its title path.
    fn put_record(&self, record: Record) -> Result<()>;

    /// Paths of all records under a prefix.
    fn list_paths(&self, prefix: &str) -> Result<Vec<String>>;

    /// Host-supplied fields stamped onto newly created records.
    fn creation_fields(&self) -> HashMap<String, Value>;

    /// Host-supplied fields stamped onto modified records.
    fn modification_fields(&self) -> HashMap<String, Value>;
}
