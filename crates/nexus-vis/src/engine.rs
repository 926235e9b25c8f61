//! The engine ties the layout, director and renderer together behind a
//! single mutable owner. All time arrives as explicit milliseconds, so
//! the whole stack stays deterministic under test; only the server maps
//! wall-clock instants onto the timeline.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use nexus_graph::{Catalog, NodeId};
use nexus_layout::{Layout, Vec2};
use nexus_render::{DrawList, FrameInput, Renderer};
use nexus_scenario::{Director, FeedbackPolarity, ScenarioKind, VisualState};

use crate::interaction::{self, Action};

/// One complete frame shipped to the client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub now_ms: u64,
    pub selected: Option<NodeId>,
    pub active: Option<ScenarioKind>,
    pub visual: VisualState,
    pub draw: DrawList,
}

/// Owns all mutable visualization state.
pub struct Engine {
    catalog: Arc<Catalog>,
    layout: Layout,
    director: Director,
    renderer: Renderer,
    selected: Option<NodeId>,
}

impl Engine {
    pub fn new(catalog: Arc<Catalog>, width: f32, height: f32) -> Self {
        let layout = Layout::compute(&catalog, width, height);
        let director = Director::new(Arc::clone(&catalog));
        let renderer = Renderer::new(Arc::clone(&catalog));
        Self {
            catalog,
            layout,
            director,
            renderer,
            selected: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn particle_count(&self) -> usize {
        self.renderer.particle_count()
    }

    pub fn active(&self) -> Option<ScenarioKind> {
        self.director.active()
    }

    /// Advance timers to `now_ms` and build the frame.
    pub fn frame(&mut self, now_ms: u64) -> Frame {
        self.director.tick(now_ms);
        let visual = self.director.snapshot(now_ms);
        let draw = self.renderer.render(&FrameInput {
            layout: &self.layout,
            visual: &visual,
            selected: self.selected.as_ref(),
            now_ms,
        });
        Frame {
            now_ms,
            selected: self.selected.clone(),
            active: self.director.active(),
            visual,
            draw,
        }
    }

    /// Route a button action into the director.
    pub fn dispatch(&mut self, action: Action, now_ms: u64) -> nexus_scenario::Result<()> {
        match action {
            Action::Start { kind } => self.director.start(kind, now_ms)?,
            Action::Stop => self.director.stop(now_ms),
            Action::Reset => {
                self.director.reset(now_ms);
                self.selected = None;
            }
            Action::FixGaps => self.director.fix_gaps(now_ms),
        }
        Ok(())
    }

    /// Hit-test a click. A hit selects the node; a miss clears the
    /// current selection.
    pub fn click(&mut self, pointer: Vec2, now_ms: u64) -> Option<NodeId> {
        let t = now_ms as f32 / 1_000.0;
        let positions = self.layout.display_positions(t);
        self.selected = interaction::hit_test(&self.catalog, &positions, pointer);
        debug!(selected = ?self.selected, "click");
        self.selected.clone()
    }

    /// Record node feedback; unknown ids still get the acknowledgement.
    pub fn feedback(&mut self, node: &NodeId, polarity: FeedbackPolarity, now_ms: u64) {
        self.director.record_feedback(node, polarity, now_ms);
    }

    /// Viewport change: recompute the base layout, not just a rescale.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.layout.resize(&self.catalog, width, height);
    }

    pub fn viewport(&self) -> (f32, f32) {
        self.layout.viewport()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> Engine {
        Engine::new(Arc::new(Catalog::meridian()), 1280.0, 800.0)
    }

    #[test]
    fn frame_reflects_dispatched_scenario() {
        let mut e = engine();
        e.dispatch(
            Action::Start {
                kind: ScenarioKind::WhatIf,
            },
            0,
        )
        .unwrap();
        let frame = e.frame(500);
        assert_eq!(frame.active, Some(ScenarioKind::WhatIf));
        assert!(frame.visual.removed.is_some());
        assert!(!frame.draw.cmds.is_empty());
    }

    #[test]
    fn click_selects_then_clears() {
        let mut e = engine();
        let positions = {
            let t = 0.0;
            Layout::compute(&Catalog::meridian(), 1280.0, 800.0).display_positions(t)
        };
        let target = positions[&NodeId::from("p-alex")];

        assert_eq!(e.click(target, 0), Some(NodeId::from("p-alex")));
        assert_eq!(e.frame(0).selected, Some(NodeId::from("p-alex")));

        assert_eq!(e.click(Vec2::new(-999.0, -999.0), 0), None);
        assert_eq!(e.frame(0).selected, None);
    }

    #[test]
    fn reset_clears_selection_and_scenario() {
        let mut e = engine();
        e.dispatch(
            Action::Start {
                kind: ScenarioKind::Trace,
            },
            0,
        )
        .unwrap();
        let positions = Layout::compute(&Catalog::meridian(), 1280.0, 800.0).display_positions(0.0);
        e.click(positions[&NodeId::from("p-sarah")], 0);

        e.dispatch(Action::Reset, 100).unwrap();
        let frame = e.frame(100);
        assert_eq!(frame.active, None);
        assert_eq!(frame.selected, None);
        assert_eq!(frame.visual, VisualState::pristine());
    }

    #[test]
    fn resize_recomputes_layout() {
        let mut e = engine();
        e.resize(640.0, 480.0);
        assert_eq!(e.viewport(), (640.0, 480.0));
    }
}
