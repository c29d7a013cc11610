// SPDX-License-Identifier: MIT OR Apache-2.0
//! The display-name transform.
//!
//! Blender resolves named slots by their display name, so a mismatch does not
//! error, it silently fails to find the slot. The transform must therefore
//! reproduce the host convention exactly: split on underscores, capitalize the
//! first character of each word, rejoin with single spaces. Positional slots
//! pass through unchanged.

use crate::tree::SlotAddr;
use noodle_graph::SlotId;

/// Transform a snake_case slot or output name into the host's display name.
///
/// Only the first character of each word is touched; the rest is preserved,
/// so an already-uppercase name like `BSDF` survives as-is.
pub fn display_name(name: &str) -> String {
    name.split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Transform a slot identifier into a host slot address
pub fn slot_addr(slot: &SlotId) -> SlotAddr {
    match slot {
        SlotId::Index(index) => SlotAddr::Index(*index),
        SlotId::Name(name) => SlotAddr::Name(display_name(name)),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
