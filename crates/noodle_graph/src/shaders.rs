// SPDX-License-Identifier: MIT OR Apache-2.0
//! Shader node kind catalog.
//!
//! Kind names match Blender's shader node type names minus the `ShaderNode`
//! prefix the materializer adds; keyword keys and slot names use the EDSL's
//! snake_case convention and are display-transformed on emission.

use crate::node::{NodeKind, NodeRegistry};

/// Create the shader node registry with all available node kinds
pub fn create_shader_registry() -> NodeRegistry {
    let mut registry = NodeRegistry::new();

    // Output
    registry.register(NodeKind::new("OutputMaterial"));

    // BSDFs and shader combinators
    registry.register(NodeKind::new("BsdfPrincipled"));
    registry.register(NodeKind::new("BsdfDiffuse"));
    registry.register(NodeKind::new("BsdfTransparent"));
    registry.register(NodeKind::new("BsdfGlossy"));
    registry.register(NodeKind::new("Emission"));
    registry.register(NodeKind::new("MixShader"));
    registry.register(NodeKind::new("AddShader"));

    // Attribute inputs: these carry host-editor settings beyond placement
    registry.register(NodeKind::new("VertexColor").with_properties(["location", "layer_name"]));
    registry.register(NodeKind::new("Attribute").with_properties(["location", "attribute_name"]));

    // Coordinates and color utilities
    registry.register(NodeKind::new("TexCoord"));
    registry.register(NodeKind::new("MixRGB"));

    registry
}
