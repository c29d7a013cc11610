// SPDX-License-Identifier: MIT OR Apache-2.0
//! A `ShaderTree` that renders the host calls as a Blender Python script.
//!
//! The generated script is the deliverable: dropped into Blender's script
//! directory (or pasted into its text editor) it rebuilds the material
//! through `bpy`. Node objects become numbered local variables so links can
//! refer back to them.

use crate::tree::{ShaderTree, SlotAddr};
use noodle_graph::Value;
use std::fmt::Write;

/// Handle for a node variable in the generated script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptNode(usize);

/// Accumulates a `bpy` script for one material.
pub struct BpyScript {
    out: String,
    next_node: usize,
}

impl BpyScript {
    /// Start a script creating a material with the given name
    pub fn new(material_name: &str) -> Self {
        let mut out = String::new();
        out.push_str("import bpy\n\n");
        let _ = writeln!(
            out,
            "mat = bpy.data.materials.new({})",
            py_str(material_name)
        );
        out.push_str("mat.use_nodes = True\n");
        out.push_str("nodes = mat.node_tree.nodes\n");
        out.push_str("links = mat.node_tree.links\n");
        Self { out, next_node: 0 }
    }

    /// Finish and return the script text
    pub fn finish(self) -> String {
        self.out
    }
}

impl ShaderTree for BpyScript {
    type NodeHandle = ScriptNode;

    fn clear(&mut self) {
        self.out.push_str("nodes.clear()\n");
    }

    fn add_node(&mut self, type_name: &str) -> ScriptNode {
        let handle = ScriptNode(self.next_node);
        self.next_node += 1;
        let _ = writeln!(
            self.out,
            "n{} = nodes.new(type={})",
            handle.0,
            py_str(type_name)
        );
        handle
    }

    fn set_property(&mut self, node: ScriptNode, key: &str, value: &Value) {
        let _ = writeln!(self.out, "n{}.{key} = {}", node.0, py_literal(value));
    }

    fn set_input_default(&mut self, node: ScriptNode, slot: &SlotAddr, value: &Value) {
        let _ = writeln!(
            self.out,
            "n{}.inputs[{}].default_value = {}",
            node.0,
            py_key(slot),
            py_literal(value)
        );
    }

    fn connect(&mut self, from: ScriptNode, output: &str, to: ScriptNode, input: &SlotAddr) {
        let _ = writeln!(
            self.out,
            "links.new(n{}.outputs[{}], n{}.inputs[{}])",
            from.0,
            py_str(output),
            to.0,
            py_key(input)
        );
    }

    fn set_material_attribute(&mut self, key: &str, value: &Value) {
        let _ = writeln!(self.out, "mat.{key} = {}", py_literal(value));
    }
}

/// Render a slot address as a Python subscript key
fn py_key(slot: &SlotAddr) -> String {
    match slot {
        SlotAddr::Index(index) => index.to_string(),
        SlotAddr::Name(name) => py_str(name),
    }
}

/// Render a value as a Python literal
fn py_literal(value: &Value) -> String {
    match value {
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Int(i) => i.to_string(),
        Value::Float(f) => py_float(*f),
        Value::Vector2(v) => format!("({}, {})", py_float(v[0]), py_float(v[1])),
        Value::Vector3(v) => format!(
            "({}, {}, {})",
            py_float(v[0]),
            py_float(v[1]),
            py_float(v[2])
        ),
        Value::Vector4(v) => format!(
            "({}, {}, {}, {})",
            py_float(v[0]),
            py_float(v[1]),
            py_float(v[2]),
            py_float(v[3])
        ),
        Value::String(s) => py_str(s),
    }
}

/// Render a float so Python parses it back as a float (`1` becomes `1.0`).
/// Non-finite values have no Python literal form and go through `float(...)`.
fn py_float(f: f32) -> String {
    if f.is_nan() {
        return "float(\"nan\")".to_string();
    }
    if f.is_infinite() {
        return if f.is_sign_positive() {
            "float(\"inf\")".to_string()
        } else {
            "float(\"-inf\")".to_string()
        };
    }
    let mut s = format!("{f}");
    if !s.contains('.') && !s.contains('e') {
        s.push_str(".0");
    }
    s
}

/// Render a quoted, escaped Python string literal
fn py_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
