// SPDX-License-Identifier: MIT OR Apache-2.0
//! Link (edge) definitions for the graph.

use crate::node::NodeId;
use crate::slot::SlotId;

/// Reference to one named output of one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRef {
    /// Owning node ID
    pub node: NodeId,
    /// Output slot name, in the EDSL's snake_case convention
    pub name: String,
}

impl OutputRef {
    /// Create a new output reference
    pub fn new(node: NodeId, name: impl Into<String>) -> Self {
        Self {
            node,
            name: name.into(),
        }
    }
}

/// Reference to one input slot of one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRef {
    /// Owning node ID
    pub node: NodeId,
    /// Input slot identifier
    pub slot: SlotId,
}

impl InputRef {
    /// Create a new input reference
    pub fn new(node: NodeId, slot: impl Into<SlotId>) -> Self {
        Self {
            node,
            slot: slot.into(),
        }
    }
}

/// A link feeding one node's output into another node's input slot.
///
/// Links carry no identity of their own; two links are the same link exactly
/// when both endpoints match, which is what merge deduplication compares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Source output
    pub from: OutputRef,
    /// Sink input
    pub to: InputRef,
}

impl Link {
    /// Create a new link
    pub fn new(from: OutputRef, to: InputRef) -> Self {
        Self { from, to }
    }
}
