// SPDX-License-Identifier: MIT OR Apache-2.0
//! The host node-tree boundary.

use noodle_graph::Value;
use std::fmt;

/// A slot endpoint as the host addresses it.
///
/// Produced by the display-name transform: positional slots keep their index,
/// named slots carry the host's display name ("Subsurface Color" style).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotAddr {
    /// Positional slot index, passed through unchanged
    Index(usize),
    /// Display name in the host's convention
    Name(String),
}

impl fmt::Display for SlotAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Name(name) => write!(f, "{name}"),
        }
    }
}

/// The host's scripting surface, treated as an opaque collaborator.
///
/// The materializer only requires that implementations apply these calls in
/// the order they arrive; it never reads anything back. Handles identify
/// host-side node objects within one materialization.
pub trait ShaderTree {
    /// Host-side handle for a created node
    type NodeHandle: Copy;

    /// Remove all nodes the host created by default
    fn clear(&mut self);

    /// Create a node of the given host type name
    fn add_node(&mut self, type_name: &str) -> Self::NodeHandle;

    /// Set a property attribute on a node object
    fn set_property(&mut self, node: Self::NodeHandle, key: &str, value: &Value);

    /// Assign a constant default to an input slot
    fn set_input_default(&mut self, node: Self::NodeHandle, slot: &SlotAddr, value: &Value);

    /// Connect an output slot to an input slot
    fn connect(
        &mut self,
        from: Self::NodeHandle,
        output: &str,
        to: Self::NodeHandle,
        input: &SlotAddr,
    );

    /// Set an attribute on the material itself
    fn set_material_attribute(&mut self, key: &str, value: &Value);
}
