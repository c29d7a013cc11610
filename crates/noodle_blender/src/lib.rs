// SPDX-License-Identifier: MIT OR Apache-2.0
//! Blender materializer for noodle graphs.
//!
//! This crate realizes a finished [`noodle_graph::Graph`] as host node-tree
//! calls:
//! - [`ShaderTree`]: the opaque boundary to the host's scripting surface
//! - The display-name transform matching Blender's slot naming convention
//! - [`materialize`]/[`make_material`]: the deterministic single-pass walk
//! - [`BpyScript`]: a `ShaderTree` that renders the calls as a `bpy` script
//!
//! The walk visits nodes in discovery order (order only affects editor
//! layout; the host resolves links through an explicit identity map), then
//! links in discovery order.

pub mod display;
pub mod materialize;
pub mod script;
pub mod tree;

pub use display::{display_name, slot_addr};
pub use materialize::{make_material, materialize, MaterializeError};
pub use script::{BpyScript, ScriptNode};
pub use tree::{ShaderTree, SlotAddr};
