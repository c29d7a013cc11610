// SPDX-License-Identifier: MIT OR Apache-2.0
//! noodle showcase binary.
//!
//! Builds the vertex-color mask material through the EDSL and writes the
//! generated `bpy` script to stdout, or to the file given as the first
//! argument (pointing it at Blender's script discovery directory installs
//! the material).

use noodle_blender::{make_material, BpyScript, MaterializeError};
use noodle_graph::{Graph, GraphError, Value};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("noodle=info".parse().expect("static directive"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let script = match generate() {
        Ok(script) => script,
        Err(e) => {
            tracing::error!("failed to generate material script: {e}");
            std::process::exit(1);
        }
    };

    match std::env::args().nth(1) {
        Some(path) => {
            if let Err(e) = std::fs::write(&path, script) {
                tracing::error!("failed to write `{path}`: {e}");
                std::process::exit(1);
            }
            tracing::info!("wrote {path}");
        }
        None => print!("{script}"),
    }
}

/// Build the showcase graph and render it as a script
fn generate() -> Result<String, Error> {
    let graph = mask_material()?;
    let mut script = BpyScript::new("VertexAlphaMask");
    make_material(
        &graph,
        &[("blend_method", Value::String("BLEND".to_string()))],
        &mut script,
    )?;
    Ok(script.finish())
}

/// A vertex color layer's alpha blends a transparent BSDF over a diffuse one.
fn mask_material() -> Result<Graph, GraphError> {
    let kinds = noodle_graph::shaders::create_shader_registry();
    let kind = |name: &str| {
        kinds
            .builder(name)
            .unwrap_or_else(|| panic!("kind `{name}` is in the catalog"))
    };

    let vertex_color = kind("VertexColor")
        .set("layer_name", "mask")
        .set("location", [-300.0f32, 0.0])
        .build()?;
    let transparent = kind("BsdfTransparent")
        .set("color", [1.0f32, 1.0, 1.0, 1.0])
        .build()?;
    let diffuse = kind("BsdfDiffuse")
        .set("color", [0.8f32, 0.2, 0.2, 1.0])
        .set("roughness", 0.4f32)
        .build()?;

    let mix = kind("MixShader")
        .arg(vertex_color.output("alpha"))
        .arg(transparent.output("BSDF"))
        .arg(diffuse.output("BSDF"))
        .build()?;

    kind("OutputMaterial")
        .set("surface", mix.output("shader"))
        .set("location", [300.0f32, 0.0])
        .build()
}

/// Top-level error for the showcase run
#[derive(Debug, thiserror::Error)]
enum Error {
    /// Graph construction failed
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// Materialization failed
    #[error(transparent)]
    Materialize(#[from] MaterializeError),
}
