//! Typed edge descriptors for graph views embedded in note/wiki systems.
//!
//! An [`EdgeType`] names a relationship kind and carries its display and
//! style metadata, backed by one record in the host's record store. The
//! store itself stays external behind [`RecordStore`]; [`MemoryStore`] is
//! the in-process reference implementation.

pub mod config;
pub mod edge_type;
pub mod error;
pub mod store;

pub use config::GraphConfig;
pub use edge_type::{
    deep_merge, is_truthy, list_edge_types, merge_defaults, EdgeType, EdgeTypeInit,
    ATTRIBUTE_WHITELIST,
};
pub use error::{NotemapError, Result};
pub use store::{MemoryStore, Record, RecordStore, ID_FIELD, TITLE_FIELD};
