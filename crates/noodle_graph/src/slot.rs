// SPDX-License-Identifier: MIT OR Apache-2.0
//! Slot identifiers and literal values.

use std::fmt;

/// Identifier for an input slot on a node.
///
/// Some host node kinds expose several inputs with the same display name
/// (Blender's `MixShader` has two `Shader` inputs), so a slot is addressed
/// either by position or by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SlotId {
    /// Positional slot index
    Index(usize),
    /// Named slot, in the EDSL's snake_case convention
    Name(String),
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Name(name) => write!(f, "{name}"),
        }
    }
}

impl From<usize> for SlotId {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for SlotId {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for SlotId {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

/// A literal constant.
///
/// Marks "this is a plain value, not a reference to another node's output" at
/// the call site. Stored verbatim as a node property or an input-slot default.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Boolean
    Bool(bool),
    /// Integer
    Int(i32),
    /// Floating point value
    Float(f32),
    /// 2D vector
    Vector2([f32; 2]),
    /// 3D vector
    Vector3([f32; 3]),
    /// 4D vector / RGBA color
    Vector4([f32; 4]),
    /// String
    String(String),
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<[f32; 2]> for Value {
    fn from(value: [f32; 2]) -> Self {
        Self::Vector2(value)
    }
}

impl From<[f32; 3]> for Value {
    fn from(value: [f32; 3]) -> Self {
        Self::Vector3(value)
    }
}

impl From<[f32; 4]> for Value {
    fn from(value: [f32; 4]) -> Self {
        Self::Vector4(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
