// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node instances, node kind descriptors and the kind registry.

use crate::builder::NodeBuilder;
use crate::slot::{SlotId, Value};
use indexmap::IndexMap;
use uuid::Uuid;

/// Unique identifier for a node
///
/// Minted once per construction and preserved by cloning, so two nodes are
/// "the same node" exactly when they come from the same constructor call.
/// Merge deduplication compares these IDs, never structural equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub Uuid);

impl NodeId {
    /// Create a new random node ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

/// A node instance in the graph
#[derive(Debug, Clone)]
pub struct Node {
    /// Unique instance ID
    pub id: NodeId,
    /// Kind name (the shader/operator kind, e.g. `MixShader`)
    pub name: String,
    /// Host-editor-only settings, never driven by another node's output
    pub properties: IndexMap<String, Value>,
    /// Per-slot constant defaults for inputs that are not linked
    pub input_defaults: IndexMap<SlotId, Value>,
}

impl Node {
    /// Create a new empty node of the given kind
    pub fn new(kind_name: impl Into<String>) -> Self {
        Self {
            id: NodeId::new(),
            name: kind_name.into(),
            properties: IndexMap::new(),
            input_defaults: IndexMap::new(),
        }
    }
}

/// Node kind descriptor
///
/// Declares a kind name together with the set of keyword argument keys that
/// are node properties rather than input slots. Every kind accepts `location`
/// (spatial placement in the host editor); kinds like `VertexColor` add their
/// own keys on top.
#[derive(Debug, Clone)]
pub struct NodeKind {
    /// Kind name, matching the host's type name minus the host prefix
    pub name: String,
    /// Keyword argument keys routed to the property map
    pub properties: Vec<String>,
}

impl NodeKind {
    /// Create a new kind with the default property set (`location`)
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: vec!["location".to_string()],
        }
    }

    /// Replace the property-name set
    pub fn with_properties<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.properties = properties.into_iter().map(Into::into).collect();
        self
    }

    /// Check whether a keyword key is a declared property of this kind
    pub fn is_property(&self, key: &str) -> bool {
        self.properties.iter().any(|p| p == key)
    }

    /// Start constructing a node of this kind
    pub fn builder(&self) -> NodeBuilder {
        NodeBuilder::new(self)
    }
}

/// Registry of available node kinds
pub struct NodeRegistry {
    /// Registered kinds by name
    kinds: IndexMap<String, NodeKind>,
}

impl NodeRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            kinds: IndexMap::new(),
        }
    }

    /// Register a node kind
    pub fn register(&mut self, kind: NodeKind) {
        self.kinds.insert(kind.name.clone(), kind);
    }

    /// Get a kind by name
    pub fn get(&self, name: &str) -> Option<&NodeKind> {
        self.kinds.get(name)
    }

    /// Get all registered kinds
    pub fn kinds(&self) -> impl Iterator<Item = &NodeKind> {
        self.kinds.values()
    }

    /// Start constructing a node of the named kind
    pub fn builder(&self, name: &str) -> Option<NodeBuilder> {
        self.get(name).map(NodeKind::builder)
    }
}

impl Default for NodeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_ids_are_unique() {
        let a = Node::new("BsdfDiffuse");
        let b = Node::new("BsdfDiffuse");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn kind_defaults_to_location_property() {
        let kind = NodeKind::new("MixShader");
        assert!(kind.is_property("location"));
        assert!(!kind.is_property("fac"));
    }

    #[test]
    fn with_properties_replaces_the_set() {
        let kind = NodeKind::new("VertexColor").with_properties(["location", "layer_name"]);
        assert!(kind.is_property("layer_name"));
        assert!(kind.is_property("location"));
    }

    #[test]
    fn registry_lookup() {
        let mut registry = NodeRegistry::new();
        registry.register(NodeKind::new("OutputMaterial"));
        assert!(registry.get("OutputMaterial").is_some());
        assert!(registry.get("MixShader").is_none());
        assert!(registry.builder("OutputMaterial").is_some());
    }

    #[test]
    fn registry_iterates_kinds_in_registration_order() {
        let mut registry = NodeRegistry::new();
        registry.register(NodeKind::new("OutputMaterial"));
        registry.register(NodeKind::new("MixShader"));
        registry.register(NodeKind::new("BsdfDiffuse"));

        let names: Vec<&str> = registry.kinds().map(|k| k.name.as_str()).collect();
        assert_eq!(names, ["OutputMaterial", "MixShader", "BsdfDiffuse"]);
    }
}
