// SPDX-License-Identifier: MIT OR Apache-2.0
//! End-to-end: builder expressions through the materializer to a bpy script.

use noodle_blender::{make_material, BpyScript};
use noodle_graph::shaders::create_shader_registry;
use noodle_graph::{Graph, Value};

/// The vertex-color mask material: a vertex color layer's alpha blends
/// between a transparent and a diffuse BSDF, feeding the material output.
fn mask_material() -> Graph {
    let kinds = create_shader_registry();

    let vertex_color = kinds
        .builder("VertexColor")
        .unwrap()
        .set("layer_name", "x")
        .build()
        .unwrap();
    let transparent = kinds
        .builder("BsdfTransparent")
        .unwrap()
        .set("color", 1.0f32)
        .build()
        .unwrap();
    let diffuse = kinds
        .builder("BsdfDiffuse")
        .unwrap()
        .set("color", 2.0f32)
        .build()
        .unwrap();

    let mix = kinds
        .builder("MixShader")
        .unwrap()
        .arg(vertex_color.output("alpha"))
        .arg(transparent.output("BSDF"))
        .arg(diffuse.output("BSDF"))
        .build()
        .unwrap();

    kinds
        .builder("OutputMaterial")
        .unwrap()
        .set("surface", mix.output("shader"))
        .build()
        .unwrap()
}

#[test]
fn scenario_yields_five_nodes_and_four_links() {
    let graph = mask_material();

    assert_eq!(graph.node_count(), 5);
    assert_eq!(graph.link_count(), 4);
    assert_eq!(graph.root().name, "OutputMaterial");

    let order: Vec<&str> = graph.nodes().map(|n| n.name.as_str()).collect();
    assert_eq!(
        order,
        [
            "OutputMaterial",
            "MixShader",
            "VertexColor",
            "BsdfTransparent",
            "BsdfDiffuse",
        ]
    );
}

#[test]
fn scenario_renders_as_a_bpy_script() {
    let graph = mask_material();

    let mut script = BpyScript::new("VertexAlphaMask");
    make_material(
        &graph,
        &[("blend_method", Value::String("BLEND".to_string()))],
        &mut script,
    )
    .unwrap();
    let text = script.finish();

    // Nodes in discovery order, links afterwards, material attributes last.
    let expected_in_order = [
        "mat = bpy.data.materials.new(\"VertexAlphaMask\")",
        "nodes.clear()",
        "n0 = nodes.new(type=\"ShaderNodeOutputMaterial\")",
        "n1 = nodes.new(type=\"ShaderNodeMixShader\")",
        "n2 = nodes.new(type=\"ShaderNodeVertexColor\")",
        "n2.layer_name = \"x\"",
        "n3 = nodes.new(type=\"ShaderNodeBsdfTransparent\")",
        "n3.inputs[\"Color\"].default_value = 1.0",
        "n4 = nodes.new(type=\"ShaderNodeBsdfDiffuse\")",
        "n4.inputs[\"Color\"].default_value = 2.0",
        "links.new(n2.outputs[\"Alpha\"], n1.inputs[0])",
        "links.new(n3.outputs[\"BSDF\"], n1.inputs[1])",
        "links.new(n4.outputs[\"BSDF\"], n1.inputs[2])",
        "links.new(n1.outputs[\"Shader\"], n0.inputs[\"Surface\"])",
        "mat.blend_method = \"BLEND\"",
    ];

    let mut cursor = 0;
    for line in &expected_in_order {
        match text[cursor..].find(line) {
            Some(offset) => cursor += offset + line.len(),
            None => panic!("expected `{line}` after position {cursor} in:\n{text}"),
        }
    }
}

#[test]
fn shared_upstream_nodes_collapse_across_promises() {
    let kinds = create_shader_registry();

    let vertex_color = kinds
        .builder("VertexColor")
        .unwrap()
        .set("layer_name", "paint")
        .build()
        .unwrap();

    // Use two outputs of the same construction: clone, then promise each.
    let color = vertex_color.clone().output("color");
    let alpha = vertex_color.output("alpha");

    let diffuse = kinds
        .builder("BsdfDiffuse")
        .unwrap()
        .set("color", color)
        .build()
        .unwrap();
    let mix = kinds
        .builder("MixShader")
        .unwrap()
        .arg(alpha)
        .arg(diffuse.output("BSDF"))
        .build()
        .unwrap();

    // MixShader, VertexColor, BsdfDiffuse; the vertex color node appears once.
    assert_eq!(mix.node_count(), 3);
    assert_eq!(mix.link_count(), 3);
}
