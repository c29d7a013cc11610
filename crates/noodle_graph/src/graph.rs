// SPDX-License-Identifier: MIT OR Apache-2.0
//! Graph data structure containing nodes and links, plus promises.

use crate::link::{Link, OutputRef};
use crate::node::{Node, NodeId};
use indexmap::IndexMap;

/// A single-root shader node graph.
///
/// Nodes are kept in discovery order; the first node is always the root, the
/// node most recently constructed at the top of the expression. Every link
/// feeds an output of an argument's graph into an input of a then-new root,
/// so the graph is acyclic by construction and no cycle check is performed.
///
/// A graph always contains at least one node.
#[derive(Debug, Clone)]
pub struct Graph {
    /// Nodes in discovery order, keyed by identity
    nodes: IndexMap<NodeId, Node>,
    /// Links between nodes.
    // A set would express the dedup intent better, but emission order is part
    // of the contract and the lists stay tiny, so this is a Vec with a linear
    // membership scan.
    links: Vec<Link>,
}

impl Graph {
    /// Create a graph containing only the given root node
    pub(crate) fn with_root(root: Node) -> Self {
        let mut nodes = IndexMap::new();
        nodes.insert(root.id, root);
        Self {
            nodes,
            links: Vec::new(),
        }
    }

    /// Get the root node (always the first node)
    pub fn root(&self) -> &Node {
        &self.nodes[0]
    }

    /// Get a node by ID
    pub fn node(&self, node_id: NodeId) -> Option<&Node> {
        self.nodes.get(&node_id)
    }

    /// Get a mutable node by ID
    pub(crate) fn node_mut(&mut self, node_id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&node_id)
    }

    /// Get all nodes in discovery order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Get the number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get all links in discovery order
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Get the number of links
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Structurally merge another graph into this one.
    ///
    /// Nodes already present (by identity) keep their first-encountered
    /// position and are not duplicated; the same goes for links, compared by
    /// endpoint equality.
    pub fn merge(&mut self, other: Graph) {
        for (id, node) in other.nodes {
            self.nodes.entry(id).or_insert(node);
        }
        for link in other.links {
            self.add_link(link);
        }
    }

    /// Append a link unless an identical one is already present
    pub(crate) fn add_link(&mut self, link: Link) {
        if !self.links.contains(&link) {
            self.links.push(link);
        }
    }

    /// Turn this graph into a promise of the named output of its root.
    ///
    /// Consumes the graph; to take two outputs of one construction, clone the
    /// graph first. Clones keep their node IDs, so merging both promises into
    /// a downstream node collapses the shared nodes again.
    pub fn output(self, name: impl Into<String>) -> Promise {
        let output = OutputRef::new(self.root().id, name);
        Promise {
            graph: self,
            output,
        }
    }
}

/// A deferred value: one output of a graph's root, together with the whole
/// graph needed to produce it.
///
/// This is what node constructors accept as a linkable argument. Not a
/// concurrency primitive.
#[derive(Debug, Clone)]
pub struct Promise {
    /// The graph producing the value
    pub graph: Graph,
    /// The output slot the value is available at
    pub output: OutputRef,
}
