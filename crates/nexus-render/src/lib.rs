//! Per-frame draw-list construction.
//!
//! `Renderer::render` is a pure function from a frame snapshot (layout,
//! visual state, selection, time) to a [`DrawList`]. It owns no mutable
//! state beyond the precomputed ambient particle field, holds no clock,
//! and performs no I/O; the surrounding loop decides when frames happen.

mod color;
mod draw;
mod particles;

pub use color::Rgba;
pub use draw::{DrawCmd, DrawList, Phase, PhaseSpan};
pub use particles::{Particle, ParticleField};

use std::collections::HashMap;
use std::sync::Arc;

use nexus_graph::{Catalog, Division, Edge, InteractionKind, Node, NodeId, NodeKind};
use nexus_layout::{drift_phase, Layout, Vec2};
use nexus_scenario::{FeedbackPolarity, ScenarioView, VisualState, RISK_BASELINE};

/// Everything one frame reads, captured before drawing starts.
pub struct FrameInput<'a> {
    pub layout: &'a Layout,
    pub visual: &'a VisualState,
    pub selected: Option<&'a NodeId>,
    pub now_ms: u64,
}

/// Builds the draw list for each frame.
pub struct Renderer {
    catalog: Arc<Catalog>,
    particles: ParticleField,
}

impl Renderer {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let particles = ParticleField::new(&catalog);
        Self { catalog, particles }
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Produce the frame. Phases always appear in [`Phase::ORDER`], every
    /// frame, regardless of which overlays are active; an inactive phase
    /// contributes an empty span rather than disappearing.
    pub fn render(&self, input: &FrameInput<'_>) -> DrawList {
        let t = input.now_ms as f32 / 1_000.0;
        let positions = input.layout.display_positions(t);
        let (width, height) = input.layout.viewport();
        let mut list = DrawList::default();

        list.push(DrawCmd::Clear {
            color: color::BACKGROUND,
        });
        list.end_phase(Phase::Clear);

        self.draw_edges(&mut list, input, &positions, t);
        list.end_phase(Phase::Edges);

        self.draw_particles(&mut list, input, &positions);
        list.end_phase(Phase::Particles);

        self.draw_tokens(&mut list, input, &positions);
        list.end_phase(Phase::MessageTokens);

        self.draw_ripples(&mut list, input, &positions);
        list.end_phase(Phase::Ripples);

        self.draw_nodes(&mut list, input, &positions, t);
        list.end_phase(Phase::Nodes);

        self.draw_decorations(&mut list, input, width, height);
        list.end_phase(Phase::Decorations);

        self.draw_flashes(&mut list, input, &positions);
        list.end_phase(Phase::FeedbackFlashes);

        list
    }

    fn edge_color(edge: &Edge) -> Rgba {
        match edge.interaction {
            InteractionKind::HumanHuman => color::EDGE_HUMAN_HUMAN,
            InteractionKind::HumanAi => color::EDGE_HUMAN_AI,
            InteractionKind::AiAi => color::EDGE_AI_AI,
        }
    }

    fn touches_removed(edge: &Edge, visual: &VisualState) -> bool {
        visual.removed.as_ref().is_some_and(|id| edge.touches(id))
    }

    fn draw_edges(
        &self,
        list: &mut DrawList,
        input: &FrameInput<'_>,
        positions: &HashMap<NodeId, Vec2>,
        t: f32,
    ) {
        for edge in self.catalog.edges() {
            let (Some(&from), Some(&to)) =
                (positions.get(&edge.source), positions.get(&edge.target))
            else {
                continue;
            };

            let highlighted = input.visual.highlighted.contains(&edge.source)
                && input.visual.highlighted.contains(&edge.target);

            let (color, width, dash) = if Self::touches_removed(edge, input.visual) {
                (color::REMOVED.with_alpha(0.5), 1.0, Some((6.0, 6.0)))
            } else if highlighted {
                let pulse = 0.55 + 0.35 * (t * 4.0).sin();
                (color::HIGHLIGHT.with_alpha(pulse), 2.0, None)
            } else {
                (
                    Self::edge_color(edge).with_alpha(0.35),
                    0.5 + edge.weight * 1.5,
                    None,
                )
            };

            list.push(DrawCmd::Line {
                from,
                to,
                color,
                width,
                dash,
            });
        }
    }

    fn draw_particles(
        &self,
        list: &mut DrawList,
        input: &FrameInput<'_>,
        positions: &HashMap<NodeId, Vec2>,
    ) {
        let edges = self.catalog.edges();
        for particle in self.particles.particles() {
            let edge = &edges[particle.edge_index];
            // Traffic stops on pathways into a departed node.
            if Self::touches_removed(edge, input.visual) {
                continue;
            }
            let (Some(from), Some(to)) =
                (positions.get(&edge.source), positions.get(&edge.target))
            else {
                continue;
            };
            let pos = from.lerp(*to, particle.progress(input.now_ms));
            list.push(DrawCmd::Circle {
                center: pos,
                radius: 1.6,
                color: Self::edge_color(edge).with_alpha(0.8),
            });
        }
    }

    fn draw_tokens(
        &self,
        list: &mut DrawList,
        input: &FrameInput<'_>,
        positions: &HashMap<NodeId, Vec2>,
    ) {
        for token in &input.visual.tokens {
            let (Some(from), Some(to)) = (positions.get(&token.from), positions.get(&token.to))
            else {
                continue;
            };
            let pos = from.lerp(*to, token.progress(input.now_ms));
            let color = Rgba::from_hex(token.color);
            list.push(DrawCmd::Glow {
                center: pos,
                radius: 12.0,
                color: color.with_alpha(0.6),
            });
            list.push(DrawCmd::Circle {
                center: pos,
                radius: 4.0,
                color,
            });
        }
    }

    fn draw_ripples(
        &self,
        list: &mut DrawList,
        input: &FrameInput<'_>,
        positions: &HashMap<NodeId, Vec2>,
    ) {
        let Some(origin) = &input.visual.ripple_origin else {
            return;
        };
        let Some(&center) = positions.get(origin) else {
            return;
        };
        let base = input.now_ms as f32 * 0.04;
        for k in 0..3 {
            let radius = (base + k as f32 * 40.0) % 120.0;
            let alpha = 1.0 - radius / 120.0;
            list.push(DrawCmd::CircleOutline {
                center,
                radius: radius.max(1.0),
                color: color::DIV_NA.with_alpha(alpha * 0.8),
                width: 2.0,
            });
        }
    }

    fn draw_nodes(
        &self,
        list: &mut DrawList,
        input: &FrameInput<'_>,
        positions: &HashMap<NodeId, Vec2>,
        t: f32,
    ) {
        let visual = input.visual;
        let spread_view = matches!(&visual.scenario, Some(ScenarioView::Spread { .. }));
        let unreached: &[NodeId] = match &visual.scenario {
            Some(ScenarioView::Spread { unreached, .. }) => unreached,
            _ => &[],
        };

        for node in self.catalog.nodes() {
            let Some(&pos) = positions.get(&node.id) else {
                continue;
            };
            let radius = Self::node_radius(node);
            let pulse = ((t * 2.0 + drift_phase(node.id.as_str())).sin()) * 0.2 + 0.8;

            let removed = visual.removed.as_ref() == Some(&node.id);
            let corrected = visual.corrected.contains(&node.id);
            let informed = visual.informed.contains(&node.id);
            let dimmed = spread_view && !informed && !removed;
            let highlighted = visual.highlighted.contains(&node.id);

            let (fill, glow) = if removed {
                (color::REMOVED.with_alpha(0.6), None)
            } else if corrected {
                (Self::node_fill(node), Some(color::CORRECTED))
            } else if dimmed {
                (Self::node_fill(node).with_alpha(0.25), None)
            } else if informed {
                (Self::node_fill(node), Some(color::division(node.division)))
            } else if highlighted {
                let fill = match node.kind {
                    NodeKind::Agent => color::AGENT_ACTIVE,
                    NodeKind::Person => Self::node_fill(node),
                };
                (fill, Some(color::HIGHLIGHT))
            } else {
                (
                    Self::node_fill(node),
                    Some(color::division(node.division).with_alpha(0.35)),
                )
            };

            if let Some(glow) = glow {
                list.push(DrawCmd::Glow {
                    center: pos,
                    radius: radius * 1.8 * pulse,
                    color: glow,
                });
            }

            match node.kind {
                NodeKind::Person => list.push(DrawCmd::Circle {
                    center: pos,
                    radius,
                    color: fill,
                }),
                NodeKind::Agent => list.push(DrawCmd::Hexagon {
                    center: pos,
                    radius,
                    color: fill,
                }),
            }

            if input.selected == Some(&node.id) {
                list.push(DrawCmd::CircleOutline {
                    center: pos,
                    radius: radius + 4.0,
                    color: color::WHITE,
                    width: 2.0,
                });
            }

            let label_alpha = if dimmed { 0.3 } else { 0.8 };
            list.push(DrawCmd::Text {
                pos: Vec2::new(pos.x, pos.y + radius + 12.0),
                text: node.short_label().to_owned(),
                size: 11.0,
                color: color::WHITE.with_alpha(label_alpha),
            });

            if removed {
                list.push(DrawCmd::Text {
                    pos: Vec2::new(pos.x, pos.y + radius + 24.0),
                    text: "DEPARTED".to_owned(),
                    size: 9.0,
                    color: color::WHATIF_ORANGE,
                });
            } else if unreached.contains(&node.id) {
                list.push(DrawCmd::Text {
                    pos: Vec2::new(pos.x, pos.y + radius + 24.0),
                    text: "NOT REACHED".to_owned(),
                    size: 9.0,
                    color: color::DIV_HQ,
                });
            }
        }
    }

    fn node_radius(node: &Node) -> f32 {
        match node.kind {
            NodeKind::Agent => 12.0,
            NodeKind::Person => 10.0 + f32::from(node.workload.unwrap_or(0)) * 0.04,
        }
    }

    fn node_fill(node: &Node) -> Rgba {
        match node.kind {
            NodeKind::Agent => color::AGENT,
            NodeKind::Person => color::division(node.division),
        }
    }

    fn draw_decorations(
        &self,
        list: &mut DrawList,
        input: &FrameInput<'_>,
        width: f32,
        height: f32,
    ) {
        for division in Division::ALL {
            list.push(DrawCmd::Text {
                pos: input.layout.division_label_anchor(division),
                text: division.label().to_owned(),
                size: 12.0,
                color: color::division(division).with_alpha(0.7),
            });
        }

        let legend = [
            ("Person", color::DIV_NA),
            ("AI agent", color::AGENT),
            ("Human-AI pathway", color::EDGE_HUMAN_AI),
            ("AI-AI pathway", color::EDGE_AI_AI),
        ];
        for (i, (label, color)) in legend.iter().enumerate() {
            let y = height - 90.0 + i as f32 * 18.0;
            list.push(DrawCmd::Circle {
                center: Vec2::new(20.0, y),
                radius: 4.0,
                color: *color,
            });
            list.push(DrawCmd::Text {
                pos: Vec2::new(32.0, y + 4.0),
                text: (*label).to_owned(),
                size: 10.0,
                color: color::WHITE.with_alpha(0.7),
            });
        }

        let risk_color = if input.visual.risk_target > RISK_BASELINE {
            color::WHATIF_ORANGE
        } else {
            color::WHITE.with_alpha(0.8)
        };
        list.push(DrawCmd::Text {
            pos: Vec2::new(width - 170.0, 30.0),
            text: format!("RISK INDEX {:.0}", input.visual.risk_displayed),
            size: 13.0,
            color: risk_color,
        });

        if let Some(toast) = &input.visual.toast {
            list.push(DrawCmd::Text {
                pos: Vec2::new(width / 2.0, 40.0),
                text: toast.clone(),
                size: 12.0,
                color: color::WHITE,
            });
        }
    }

    fn draw_flashes(
        &self,
        list: &mut DrawList,
        input: &FrameInput<'_>,
        positions: &HashMap<NodeId, Vec2>,
    ) {
        for flash in &input.visual.flashes {
            let (Some(&from), Some(&to)) =
                (positions.get(&flash.source), positions.get(&flash.target))
            else {
                continue;
            };
            let alpha = flash.alpha(input.now_ms);
            let (color, width, dash) = match flash.polarity {
                FeedbackPolarity::Useful => (color::FLASH_USEFUL, 3.0, None),
                FeedbackPolarity::NotUseful => {
                    (color::FLASH_NOT_USEFUL, 2.0, Some((8.0, 6.0)))
                }
                FeedbackPolarity::RequestInfo => {
                    (color::FLASH_REQUEST_INFO, 2.0, Some((4.0, 8.0)))
                }
            };
            list.push(DrawCmd::Line {
                from,
                to,
                color: color.with_alpha(alpha),
                width,
                dash,
            });
        }
    }
}
