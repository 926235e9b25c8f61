//! Ambient edge particles.
//!
//! Every edge carries a handful of small dots suggesting traffic. Counts,
//! phases and speeds are all fixed functions of the edge index and the
//! particle index, so the field is identical across runs and a particle's
//! position is a pure function of elapsed time.

use nexus_graph::Catalog;

/// One ambient particle, bound to an edge for its whole life.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub edge_index: usize,
    /// Starting progress along the edge in `[0, 1)`.
    phase: f32,
    /// Progress per millisecond.
    speed: f32,
}

impl Particle {
    /// Progress along the edge at `t_ms`, looping from 1 back to 0.
    pub fn progress(&self, t_ms: u64) -> f32 {
        (self.phase + self.speed * t_ms as f32).fract()
    }
}

/// The full ambient particle population for a catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Seed particles for every edge: stronger edges carry more dots
    /// (`floor(weight * 3) + 1`), each with a staggered phase and a
    /// slightly different speed.
    pub fn new(catalog: &Catalog) -> Self {
        let mut particles = Vec::new();
        for (edge_index, edge) in catalog.edges().iter().enumerate() {
            let count = (edge.weight * 3.0).floor() as usize + 1;
            for i in 0..count {
                particles.push(Particle {
                    edge_index,
                    phase: ((edge_index as f32 * 0.17) + (i as f32 * 0.31)).fract(),
                    speed: 0.001 + ((edge_index * 7 + i * 13) % 30) as f32 * 0.000_1,
                });
            }
        }
        Self { particles }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
