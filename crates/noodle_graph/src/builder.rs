// SPDX-License-Identifier: MIT OR Apache-2.0
//! The node constructor: turns positional/keyword arguments into a
//! single-root graph.

use crate::graph::{Graph, Promise};
use crate::link::{InputRef, Link};
use crate::node::{Node, NodeId, NodeKind};
use crate::slot::{SlotId, Value};

/// An argument to a node constructor.
///
/// Either a literal constant or a promise of another graph's output; nothing
/// else is accepted, which is the whole argument-type contract.
#[derive(Debug, Clone)]
pub enum Arg {
    /// A literal constant, stored as a default or property
    Value(Value),
    /// A promise, merged into the new graph and linked to the slot
    Promise(Promise),
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<Promise> for Arg {
    fn from(promise: Promise) -> Self {
        Self::Promise(promise)
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Self::Value(value.into())
    }
}

impl From<i32> for Arg {
    fn from(value: i32) -> Self {
        Self::Value(value.into())
    }
}

impl From<f32> for Arg {
    fn from(value: f32) -> Self {
        Self::Value(value.into())
    }
}

impl From<[f32; 2]> for Arg {
    fn from(value: [f32; 2]) -> Self {
        Self::Value(value.into())
    }
}

impl From<[f32; 3]> for Arg {
    fn from(value: [f32; 3]) -> Self {
        Self::Value(value.into())
    }
}

impl From<[f32; 4]> for Arg {
    fn from(value: [f32; 4]) -> Self {
        Self::Value(value.into())
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Self::Value(value.into())
    }
}

/// Error during node construction
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// A declared property was given a promise instead of a literal.
    /// Properties are host-editor settings and cannot be driven by links.
    #[error("property `{key}` of `{kind}` cannot be driven by another node's output")]
    PropertyFromLink {
        /// Kind being constructed
        kind: String,
        /// Offending property key
        key: String,
    },
}

/// Builder collecting the arguments of one node constructor call.
///
/// `arg` plays the role of a positional argument, `set` of a keyword
/// argument. `build` performs the whole construction in one pass:
///
/// - positional literal at index `i` → `input_defaults[i]`
/// - positional promise → merge its graph, link its output to slot `i`
/// - keyword literal with a declared property key → property map, verbatim
/// - any other keyword → same as positional, with a named slot
///
/// Construction is pure; the only failure is a promise at a property key.
#[derive(Debug, Clone)]
pub struct NodeBuilder {
    kind: NodeKind,
    args: Vec<Arg>,
    kwargs: Vec<(String, Arg)>,
}

impl NodeBuilder {
    /// Start a construction for the given kind
    pub fn new(kind: &NodeKind) -> Self {
        Self {
            kind: kind.clone(),
            args: Vec::new(),
            kwargs: Vec::new(),
        }
    }

    /// Append a positional argument
    pub fn arg(mut self, value: impl Into<Arg>) -> Self {
        self.args.push(value.into());
        self
    }

    /// Append a keyword argument
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Arg>) -> Self {
        self.kwargs.push((key.into(), value.into()));
        self
    }

    /// Finish the construction, producing the merged single-root graph
    pub fn build(self) -> Result<Graph, GraphError> {
        let Self { kind, args, kwargs } = self;

        let root = Node::new(kind.name.as_str());
        let root_id = root.id;
        let mut graph = Graph::with_root(root);

        for (index, arg) in args.into_iter().enumerate() {
            wire(&mut graph, root_id, SlotId::Index(index), arg);
        }

        for (key, arg) in kwargs {
            if kind.is_property(&key) {
                match arg {
                    Arg::Value(value) => {
                        if let Some(node) = graph.node_mut(root_id) {
                            node.properties.insert(key, value);
                        }
                    }
                    Arg::Promise(_) => {
                        return Err(GraphError::PropertyFromLink {
                            kind: kind.name,
                            key,
                        })
                    }
                }
            } else {
                wire(&mut graph, root_id, SlotId::Name(key), arg);
            }
        }

        Ok(graph)
    }
}

/// Route one non-property argument into the graph under construction.
fn wire(graph: &mut Graph, root: NodeId, slot: SlotId, arg: Arg) {
    match arg {
        Arg::Value(value) => {
            if let Some(node) = graph.node_mut(root) {
                node.input_defaults.insert(slot, value);
            }
        }
        Arg::Promise(promise) => {
            let Promise {
                graph: sub,
                output,
            } = promise;
            graph.merge(sub);
            graph.add_link(Link::new(output, InputRef::new(root, slot)));
        }
    }
}
