//! Draw-list types: the frame output is data, not side effects.
//!
//! A frame is a flat list of drawing commands plus a span table recording
//! which contiguous slice belongs to which phase. Clients replay the
//! commands in order; tests assert on the structure instead of pixels.

use serde::Serialize;

use nexus_layout::Vec2;

use crate::color::Rgba;

/// Fixed drawing phases, in back-to-front order. Message tokens render
/// before nodes so node glows layer over passing tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    Clear,
    Edges,
    Particles,
    MessageTokens,
    Ripples,
    Nodes,
    Decorations,
    FeedbackFlashes,
}

impl Phase {
    /// All phases in draw order.
    pub const ORDER: [Phase; 8] = [
        Phase::Clear,
        Phase::Edges,
        Phase::Particles,
        Phase::MessageTokens,
        Phase::Ripples,
        Phase::Nodes,
        Phase::Decorations,
        Phase::FeedbackFlashes,
    ];
}

/// One drawing command, replayed verbatim by the client canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum DrawCmd {
    Clear {
        color: Rgba,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Rgba,
        width: f32,
        /// `(on, off)` dash lengths; `None` draws solid.
        dash: Option<(f32, f32)>,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    CircleOutline {
        center: Vec2,
        radius: f32,
        color: Rgba,
        width: f32,
    },
    Hexagon {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    /// Soft radial halo fading to transparent at `radius`.
    Glow {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    Text {
        pos: Vec2,
        text: String,
        size: f32,
        color: Rgba,
    },
}

/// Contiguous command range belonging to one phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhaseSpan {
    pub phase: Phase,
    pub start: usize,
    pub end: usize,
}

/// A complete frame.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct DrawList {
    pub cmds: Vec<DrawCmd>,
    pub phases: Vec<PhaseSpan>,
}

impl DrawList {
    pub fn push(&mut self, cmd: DrawCmd) {
        self.cmds.push(cmd);
    }

    /// Close out the current phase: record the span from the previous
    /// phase boundary to the current command count.
    pub(crate) fn end_phase(&mut self, phase: Phase) {
        let start = self.phases.last().map(|s| s.end).unwrap_or(0);
        self.phases.push(PhaseSpan {
            phase,
            start,
            end: self.cmds.len(),
        });
    }

    /// Commands belonging to a phase.
    pub fn phase(&self, phase: Phase) -> &[DrawCmd] {
        self.phases
            .iter()
            .find(|s| s.phase == phase)
            .map(|s| &self.cmds[s.start..s.end])
            .unwrap_or(&[])
    }
}
