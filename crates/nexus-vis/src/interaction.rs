//! Pointer hit-testing and the user action vocabulary.

use std::collections::HashMap;

use serde::Deserialize;

use nexus_graph::{Catalog, NodeId};
use nexus_layout::Vec2;
use nexus_scenario::ScenarioKind;

/// Pointer pick radius in pixels around a node center.
pub const HIT_RADIUS: f32 = 20.0;

/// First node in catalog order whose display position lies within
/// [`HIT_RADIUS`] of the pointer. Catalog order is the deterministic
/// tie-break when two nodes overlap.
pub fn hit_test(
    catalog: &Catalog,
    positions: &HashMap<NodeId, Vec2>,
    pointer: Vec2,
) -> Option<NodeId> {
    catalog.nodes().iter().find_map(|node| {
        let pos = positions.get(&node.id)?;
        (pos.distance(pointer) <= HIT_RADIUS).then(|| node.id.clone())
    })
}

/// The fixed button vocabulary routed into the director.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Action {
    /// Toggle a scenario on (or off, if already active).
    Start { kind: ScenarioKind },
    /// Stop whatever scenario is running.
    Stop,
    /// Full reset to the pristine state.
    Reset,
    /// Begin the fix-gaps sequence of an active spread.
    FixGaps,
}
