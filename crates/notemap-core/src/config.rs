/// Namespace and serialization settings for the graph view.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    /// Path prefix under which edge-type records live.
    /// Default: "graph/edge-types"
    pub edge_type_root: String,

    /// Reserved id used when an edge type is constructed from nothing.
    /// Default: "unknown"
    pub unknown_id: String,

    /// Id of the automatically generated default relation. A type with
    /// this id is system-owned.
    /// Default: "link"
    pub link_type_id: String,

    /// Indent width for pretty-printed style payloads.
    /// Default: 2
    pub json_indent: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            edge_type_root: "graph/edge-types".into(),
            unknown_id: "unknown".into(),
            link_type_id: "link".into(),
            json_indent: 2,
        }
    }
}

impl GraphConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the edge-type namespace root
    pub fn with_edge_type_root(mut self, root: impl Into<String>) -> Self {
        self.edge_type_root = root.into();
        self
    }

    /// Set the indent width used for pretty style serialization
    pub fn with_json_indent(mut self, indent: usize) -> Self {
        self.json_indent = indent;
        self
    }

    /// Full storage path for an edge-type id.
    pub fn edge_type_path(&self, id: &str) -> String {
        format!("{}/{}", self.edge_type_root, id)
    }

    /// Strip the namespace prefix from a path or id. Bare ids pass through.
    pub fn strip_edge_type_prefix<'a>(&self, s: &'a str) -> &'a str {
        match s.strip_prefix(self.edge_type_root.as_str()) {
            Some(rest) if rest.starts_with('/') => rest.trim_start_matches('/'),
            _ => s,
        }
    }

    /// Whether a path lives under the edge-type namespace.
    pub fn is_edge_type_path(&self, path: &str) -> bool {
        path.strip_prefix(self.edge_type_root.as_str())
            .is_some_and(|rest| rest.starts_with('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_round_trips_through_prefix_strip() {
        let config = GraphConfig::default();
        let path = config.edge_type_path("social:follows");
        assert_eq!(path, "graph/edge-types/social:follows");
        assert_eq!(config.strip_edge_type_prefix(&path), "social:follows");
    }

    #[test]
    fn bare_id_passes_through_strip() {
        let config = GraphConfig::default();
        assert_eq!(config.strip_edge_type_prefix("custom"), "custom");
        assert_eq!(
            config.strip_edge_type_prefix("graph/edge-typesX/custom"),
            "graph/edge-typesX/custom"
        );
    }

    #[test]
    fn namespace_detection() {
        let config = GraphConfig::default();
        assert!(config.is_edge_type_path("graph/edge-types/custom"));
        assert!(!config.is_edge_type_path("graph/edge-typesX/custom"));
        assert!(!config.is_edge_type_path("exports/custom"));
        assert!(!config.is_edge_type_path("graph/edge-types"));
    }
}
