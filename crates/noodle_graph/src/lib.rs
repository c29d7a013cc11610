// SPDX-License-Identifier: MIT OR Apache-2.0
//! Shader node graph EDSL core for noodle.
//!
//! This crate captures nested builder expressions into a deduplicated DAG of
//! shader nodes and links:
//! - Node kind descriptors and an insertion-ordered registry
//! - A node constructor that routes arguments into defaults, properties and links
//! - Structural graph merging with identity-based deduplication
//! - Promises: a graph paired with one of its root's outputs
//!
//! ## Architecture
//!
//! Construction is a single pass: every node constructor produces a fresh
//! single-root [`Graph`], absorbs the graphs of its promise arguments, and
//! links their outputs to the new root's input slots. The link source always
//! belongs to an argument's graph and the sink always belongs to the new root,
//! so the result is acyclic by construction. Materializing the finished graph
//! against a host node-tree lives in the `noodle_blender` crate.

pub mod builder;
pub mod graph;
pub mod link;
pub mod node;
pub mod shaders;
pub mod slot;

pub use builder::{Arg, GraphError, NodeBuilder};
pub use graph::{Graph, Promise};
pub use link::{InputRef, Link, OutputRef};
pub use node::{Node, NodeId, NodeKind, NodeRegistry};
pub use slot::{SlotId, Value};
