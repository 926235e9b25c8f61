//! Nexus Layout Engine
//!
//! Assigns every node a deterministic base position clustered by division,
//! then derives a per-frame display position by adding a small sinusoidal
//! drift. There is no random source anywhere: the only "noise" is a named
//! hash of the node id, so the layout is byte-identical across runs,
//! reloads and independent implementations.
//!
//! Division cluster centers sit in a fixed cross pattern scaled to the
//! smaller viewport dimension: HQ on top, NA left, EMEA right, APAC below.

mod hash;

pub use hash::{drift_phase, id_hash, radius_jitter};

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use nexus_graph::{Catalog, Division, NodeId};

/// Drift amplitude in pixels on the x axis.
const DRIFT_AMPLITUDE_X: f32 = 5.0;
/// Drift amplitude in pixels on the y axis.
const DRIFT_AMPLITUDE_Y: f32 = 4.0;

/// A 2D point in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: Vec2) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Linear interpolation toward `other` at parameter `t`.
    pub fn lerp(&self, other: Vec2, t: f32) -> Vec2 {
        Vec2::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

/// Fixed cluster center for a division, given viewport center and spread.
fn cluster_center(division: Division, cx: f32, cy: f32, spread: f32) -> Vec2 {
    match division {
        Division::Hq => Vec2::new(cx, cy - spread * 0.6),
        Division::Na => Vec2::new(cx - spread * 1.1, cy + spread * 0.2),
        Division::Emea => Vec2::new(cx + spread * 1.1, cy + spread * 0.2),
        Division::Apac => Vec2::new(cx, cy + spread * 0.9),
    }
}

/// Per-node base placement plus drift phase.
#[derive(Debug, Clone, Copy, PartialEq)]
struct BasePosition {
    base: Vec2,
    phase: f32,
}

/// Deterministic layout for a fixed catalog and viewport.
///
/// Owns all position state; every other component reads positions through
/// a per-frame snapshot and never writes them.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    positions: HashMap<NodeId, BasePosition>,
    width: f32,
    height: f32,
}

impl Layout {
    /// Compute base positions for every node in the catalog.
    ///
    /// Within a division cluster, node `i` of `n` sits at angle
    /// `i/n * 2π - π/2` on a circle whose radius is scaled by
    /// `0.6 + 0.4 * radius_jitter(id)`. A single-node cluster collapses to
    /// radius 0 so the division never divides by zero or overlaps itself.
    pub fn compute(catalog: &Catalog, width: f32, height: f32) -> Self {
        let cx = width / 2.0;
        let cy = height / 2.0;
        let spread = width.min(height) * 0.32;
        let cluster_radius = spread * 0.35;

        let mut positions = HashMap::with_capacity(catalog.node_count());
        for division in Division::ALL {
            let center = cluster_center(division, cx, cy, spread);
            let members: Vec<_> = catalog.nodes_in(division).collect();
            let n = members.len();
            for (i, node) in members.iter().enumerate() {
                let angle = (i as f32 / n as f32) * std::f32::consts::TAU
                    - std::f32::consts::FRAC_PI_2;
                let r = if n == 1 {
                    0.0
                } else {
                    cluster_radius * (0.6 + 0.4 * radius_jitter(node.id.as_str()))
                };
                let base = Vec2::new(
                    center.x + angle.cos() * r,
                    center.y + angle.sin() * r,
                );
                positions.insert(
                    node.id.clone(),
                    BasePosition {
                        base,
                        phase: drift_phase(node.id.as_str()),
                    },
                );
            }
        }

        Self {
            positions,
            width,
            height,
        }
    }

    /// Recompute the full layout for a new viewport. Base positions are
    /// recomputed, not rescaled, so cluster geometry stays correct.
    pub fn resize(&mut self, catalog: &Catalog, width: f32, height: f32) {
        *self = Layout::compute(catalog, width, height);
    }

    /// Base position of a node, without drift.
    pub fn base(&self, id: &NodeId) -> Option<Vec2> {
        self.positions.get(id).map(|p| p.base)
    }

    /// Display positions at time `t` (seconds): base plus a small
    /// sinusoidal offset keyed by the per-node phase, so each node drifts
    /// independently but deterministically.
    pub fn display_positions(&self, t: f32) -> HashMap<NodeId, Vec2> {
        self.positions
            .iter()
            .map(|(id, p)| {
                let x = p.base.x + (t * 0.5 + p.phase).sin() * DRIFT_AMPLITUDE_X;
                let y = p.base.y + (t * 0.4 + p.phase * 1.3).cos() * DRIFT_AMPLITUDE_Y;
                (id.clone(), Vec2::new(x, y))
            })
            .collect()
    }

    /// Viewport this layout was computed for.
    pub fn viewport(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Fixed label anchor for a division header.
    pub fn division_label_anchor(&self, division: Division) -> Vec2 {
        let cx = self.width / 2.0;
        let cy = self.height / 2.0;
        let spread = self.width.min(self.height) * 0.32;
        let center = cluster_center(division, cx, cy, spread);
        // Headers sit above the cluster.
        Vec2::new(center.x, center.y - spread * 0.45)
    }
}
