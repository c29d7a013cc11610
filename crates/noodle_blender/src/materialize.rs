// SPDX-License-Identifier: MIT OR Apache-2.0
//! The materialization walk: graph to host calls.

use crate::display::{display_name, slot_addr};
use crate::tree::ShaderTree;
use noodle_graph::{Graph, NodeId, Value};
use std::collections::HashMap;

/// Host type prefix for shader node kinds (`MixShader` → `ShaderNodeMixShader`)
const HOST_TYPE_PREFIX: &str = "ShaderNode";

/// Error during materialization
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MaterializeError {
    /// A link endpoint references a node missing from the graph's node list.
    /// Graphs built through the node constructor cannot produce this; the
    /// walk reports it rather than panicking on a hand-assembled graph.
    #[error("link `{output}` -> `{input}` references a node missing from the graph")]
    DanglingLink {
        /// Display name of the source output
        output: String,
        /// Display address of the sink input
        input: String,
    },
}

/// Realize a graph as host calls against the given tree.
///
/// One pass over the nodes in discovery order: create the host node under its
/// prefixed type name, apply its properties, assign its input defaults under
/// display-transformed slot addresses. Then one pass over the links,
/// resolving both endpoints through the handle map built during node
/// creation.
pub fn materialize<T: ShaderTree>(graph: &Graph, tree: &mut T) -> Result<(), MaterializeError> {
    tree.clear();

    let mut handles: HashMap<NodeId, T::NodeHandle> = HashMap::new();
    for node in graph.nodes() {
        let handle = tree.add_node(&format!("{HOST_TYPE_PREFIX}{}", node.name));
        tracing::debug!(kind = %node.name, "created host node");
        for (key, value) in &node.properties {
            tree.set_property(handle, key, value);
        }
        for (slot, value) in &node.input_defaults {
            tree.set_input_default(handle, &slot_addr(slot), value);
        }
        handles.insert(node.id, handle);
    }

    for link in graph.links() {
        let output = display_name(&link.from.name);
        let input = slot_addr(&link.to.slot);
        let from = handles.get(&link.from.node).copied();
        let to = handles.get(&link.to.node).copied();
        let (Some(from), Some(to)) = (from, to) else {
            return Err(MaterializeError::DanglingLink {
                output,
                input: input.to_string(),
            });
        };
        tracing::debug!(%output, %input, "connected slots");
        tree.connect(from, &output, to, &input);
    }

    Ok(())
}

/// Materialize a graph and then apply material-level attributes.
///
/// Mirrors the host flow of building the node tree first and configuring the
/// material object (blend mode and the like) last.
pub fn make_material<T: ShaderTree>(
    graph: &Graph,
    attributes: &[(&str, Value)],
    tree: &mut T,
) -> Result<(), MaterializeError> {
    materialize(graph, tree)?;
    for (key, value) in attributes {
        tree.set_material_attribute(key, value);
    }
    tracing::info!(
        nodes = graph.node_count(),
        links = graph.link_count(),
        "material realized"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::SlotAddr;
    use noodle_graph::NodeKind;

    /// Records every call in arrival order.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
        next: usize,
    }

    impl ShaderTree for Recorder {
        type NodeHandle = usize;

        fn clear(&mut self) {
            self.calls.push("clear".to_string());
        }

        fn add_node(&mut self, type_name: &str) -> usize {
            let handle = self.next;
            self.next += 1;
            self.calls.push(format!("add {type_name} -> #{handle}"));
            handle
        }

        fn set_property(&mut self, node: usize, key: &str, value: &Value) {
            self.calls.push(format!("prop #{node} {key} = {value:?}"));
        }

        fn set_input_default(&mut self, node: usize, slot: &SlotAddr, value: &Value) {
            self.calls
                .push(format!("default #{node} [{slot}] = {value:?}"));
        }

        fn connect(&mut self, from: usize, output: &str, to: usize, input: &SlotAddr) {
            self.calls
                .push(format!("link #{from}.{output} -> #{to}.[{input}]"));
        }

        fn set_material_attribute(&mut self, key: &str, value: &Value) {
            self.calls.push(format!("mat {key} = {value:?}"));
        }
    }

    #[test]
    fn nodes_are_emitted_before_links_in_discovery_order() {
        let diffuse = NodeKind::new("BsdfDiffuse").builder().build().unwrap();
        let graph = NodeKind::new("OutputMaterial")
            .builder()
            .set("surface", diffuse.output("BSDF"))
            .build()
            .unwrap();

        let mut recorder = Recorder::default();
        materialize(&graph, &mut recorder).unwrap();

        assert_eq!(
            recorder.calls,
            [
                "clear",
                "add ShaderNodeOutputMaterial -> #0",
                "add ShaderNodeBsdfDiffuse -> #1",
                "link #1.BSDF -> #0.[Surface]",
            ]
        );
    }

    #[test]
    fn defaults_use_display_addresses() {
        let graph = NodeKind::new("MixShader")
            .builder()
            .arg(Value::Float(0.5))
            .set("subsurface_color", Value::Vector4([1.0, 1.0, 1.0, 1.0]))
            .build()
            .unwrap();

        let mut recorder = Recorder::default();
        materialize(&graph, &mut recorder).unwrap();

        assert!(recorder
            .calls
            .iter()
            .any(|c| c.starts_with("default #0 [0] =")));
        assert!(recorder
            .calls
            .iter()
            .any(|c| c.starts_with("default #0 [Subsurface Color] =")));
    }

    #[test]
    fn material_attributes_come_last() {
        let graph = NodeKind::new("OutputMaterial").builder().build().unwrap();
        let mut recorder = Recorder::default();
        make_material(
            &graph,
            &[("blend_method", Value::String("BLEND".to_string()))],
            &mut recorder,
        )
        .unwrap();

        assert_eq!(
            recorder.calls.last().map(String::as_str),
            Some("mat blend_method = String(\"BLEND\")")
        );
    }
}
