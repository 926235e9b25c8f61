//! Scenario state, transient overlays and the per-frame snapshot.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use nexus_graph::NodeId;
use nexus_spread::SpreadPlan;

use crate::script::{self, AgentRole, RISK_BASELINE, RISK_EASE_MS};

/// Which scenario overlay is active. Exactly one may be live at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScenarioKind {
    Trace,
    WhatIf,
    Spread,
    Briefing,
    Timeline,
    Onboarding,
    Silo,
    Ripple,
}

/// The active scenario and its variant-owned sub-state. Fields live only
/// on the variant that needs them, so no state can leak across kinds.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Scenario {
    Trace {
        revealed: usize,
        settled: bool,
    },
    WhatIf {
        removed: NodeId,
        revealed: usize,
        recovery_shown: bool,
    },
    Spread {
        plan: SpreadPlan,
        informed: BTreeSet<NodeId>,
        corrected: BTreeSet<NodeId>,
        dispatches: Vec<&'static str>,
        fixing: bool,
        settled: bool,
    },
    Briefing {
        started_at: u64,
    },
    Timeline {
        revealed: usize,
    },
    Onboarding {
        stage: usize,
    },
    Silo,
    Ripple,
}

impl Scenario {
    pub fn kind(&self) -> ScenarioKind {
        match self {
            Scenario::Trace { .. } => ScenarioKind::Trace,
            Scenario::WhatIf { .. } => ScenarioKind::WhatIf,
            Scenario::Spread { .. } => ScenarioKind::Spread,
            Scenario::Briefing { .. } => ScenarioKind::Briefing,
            Scenario::Timeline { .. } => ScenarioKind::Timeline,
            Scenario::Onboarding { .. } => ScenarioKind::Onboarding,
            Scenario::Silo => ScenarioKind::Silo,
            Scenario::Ripple => ScenarioKind::Ripple,
        }
    }
}

/// User judgement attached to a node's pathways.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedbackPolarity {
    #[serde(rename = "useful")]
    Useful,
    #[serde(rename = "not-useful")]
    NotUseful,
    #[serde(rename = "request-info")]
    RequestInfo,
}

/// A transient edge highlight recorded when feedback lands. Pruned once
/// expired; any number may coexist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackFlash {
    pub source: NodeId,
    pub target: NodeId,
    pub polarity: FeedbackPolarity,
    pub expires_at: u64,
}

impl FeedbackFlash {
    /// Remaining opacity in `[0, 1]`, fading linearly to the expiry.
    pub fn alpha(&self, now: u64) -> f32 {
        if now >= self.expires_at {
            return 0.0;
        }
        (self.expires_at - now) as f32 / script::FLASH_LIFETIME_MS as f32
    }
}

/// A transient acknowledgement line, self-clearing at its expiry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Toast {
    pub text: String,
    pub expires_at: u64,
}

/// A glowing message dot traveling between two agent-proxy nodes during
/// the contradiction trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageToken {
    pub from: NodeId,
    pub to: NodeId,
    pub color: &'static str,
    pub started_at: u64,
    pub duration_ms: u64,
}

impl MessageToken {
    /// Linear travel progress in `[0, 1]`.
    pub fn progress(&self, now: u64) -> f32 {
        if now <= self.started_at {
            return 0.0;
        }
        let elapsed = (now - self.started_at) as f32;
        (elapsed / self.duration_ms as f32).min(1.0)
    }

    pub fn expired(&self, now: u64) -> bool {
        now >= self.started_at + self.duration_ms
    }
}

/// The simulated risk metric. Targets jump instantly; the displayed value
/// is eased toward the target at read time, so the counter needs no
/// per-frame mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskCounter {
    pub target: u64,
    from: f64,
    ramp_started: u64,
}

impl RiskCounter {
    pub fn baseline() -> Self {
        Self {
            target: RISK_BASELINE,
            from: RISK_BASELINE as f64,
            ramp_started: 0,
        }
    }

    /// Begin easing from the currently displayed value to a new target.
    pub fn ramp_to(&mut self, target: u64, now: u64) {
        self.from = self.displayed(now);
        self.target = target;
        self.ramp_started = now;
    }

    /// Snap straight back to the baseline with no animation.
    pub fn snap_to_baseline(&mut self) {
        *self = Self::baseline();
    }

    /// Displayed value at `now`: ease-out cubic over the ramp window.
    pub fn displayed(&self, now: u64) -> f64 {
        let elapsed = now.saturating_sub(self.ramp_started);
        if elapsed >= RISK_EASE_MS {
            return self.target as f64;
        }
        let t = elapsed as f64 / RISK_EASE_MS as f64;
        let eased = 1.0 - (1.0 - t).powi(3);
        self.from + (self.target as f64 - self.from) * eased
    }
}

/// Per-stage view exposed to panels: the stage's text plus its role tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageView {
    pub agent: AgentRole,
    pub color: &'static str,
    pub text: &'static str,
}

/// Read-only projection of the active scenario for panels and renderers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ScenarioView {
    Trace {
        stages: Vec<StageView>,
        settled: bool,
    },
    WhatIf {
        removed: NodeId,
        impacts: Vec<&'static str>,
        recovery: Option<&'static str>,
    },
    Spread {
        informed_count: usize,
        unreached: Vec<NodeId>,
        dispatches: Vec<&'static str>,
        fixing: bool,
        settled: bool,
    },
    Briefing {
        text: String,
        done: bool,
    },
    Timeline {
        entries: Vec<&'static str>,
    },
    Onboarding {
        stage: usize,
        text: &'static str,
    },
    Silo {
        pair: (NodeId, NodeId),
        note: &'static str,
    },
    Ripple,
}

impl ScenarioView {
    pub fn kind(&self) -> ScenarioKind {
        match self {
            ScenarioView::Trace { .. } => ScenarioKind::Trace,
            ScenarioView::WhatIf { .. } => ScenarioKind::WhatIf,
            ScenarioView::Spread { .. } => ScenarioKind::Spread,
            ScenarioView::Briefing { .. } => ScenarioKind::Briefing,
            ScenarioView::Timeline { .. } => ScenarioKind::Timeline,
            ScenarioView::Onboarding { .. } => ScenarioKind::Onboarding,
            ScenarioView::Silo { .. } => ScenarioKind::Silo,
            ScenarioView::Ripple => ScenarioKind::Ripple,
        }
    }
}

/// Everything the render loop and surrounding panels read, captured once
/// per frame. Only the director mutates the state behind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualState {
    pub scenario: Option<ScenarioView>,
    /// Nodes currently highlighted by the active scenario.
    pub highlighted: BTreeSet<NodeId>,
    /// Node notionally removed by a what-if, if any.
    pub removed: Option<NodeId>,
    /// Nodes informed by a running spread.
    pub informed: BTreeSet<NodeId>,
    /// Nodes informed late via fix-gaps; rendered as corrected.
    pub corrected: BTreeSet<NodeId>,
    /// In-flight inter-agent message tokens.
    pub tokens: Vec<MessageToken>,
    /// Unexpired feedback flashes.
    pub flashes: Vec<FeedbackFlash>,
    pub toast: Option<String>,
    /// Origin of decorative ripple rings, when the ripple overlay is on.
    pub ripple_origin: Option<NodeId>,
    pub risk_displayed: f64,
    pub risk_target: u64,
}

impl VisualState {
    /// The neutral state: no scenario, no overlays, baseline risk.
    pub fn pristine() -> Self {
        Self {
            scenario: None,
            highlighted: BTreeSet::new(),
            removed: None,
            informed: BTreeSet::new(),
            corrected: BTreeSet::new(),
            tokens: Vec::new(),
            flashes: Vec::new(),
            toast: None,
            ripple_origin: None,
            risk_displayed: RISK_BASELINE as f64,
            risk_target: RISK_BASELINE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_counter_eases_toward_target() {
        let mut risk = RiskCounter::baseline();
        risk.ramp_to(420_000, 1_000);

        let start = risk.displayed(1_000);
        let mid = risk.displayed(1_400);
        let done = risk.displayed(1_800);

        assert!((start - RISK_BASELINE as f64).abs() < 1e-6);
        assert!(mid > start && mid < 420_000.0);
        assert!((done - 420_000.0).abs() < 1e-6);
    }

    #[test]
    fn risk_ramp_restarts_from_displayed_value() {
        let mut risk = RiskCounter::baseline();
        risk.ramp_to(420_000, 0);
        // Re-target mid-ease: the new ramp starts where the display was,
        // not at the old target.
        let mid = risk.displayed(400);
        risk.ramp_to(1_200_000, 400);
        assert!((risk.displayed(400) - mid).abs() < 1e-6);
    }

    #[test]
    fn token_progress_is_linear_and_clamped() {
        let token = MessageToken {
            from: NodeId::from("a-iris"),
            to: NodeId::from("a-atlas"),
            color: "#4ecdc4",
            started_at: 100,
            duration_ms: 400,
        };
        assert_eq!(token.progress(100), 0.0);
        assert!((token.progress(300) - 0.5).abs() < 1e-6);
        assert_eq!(token.progress(900), 1.0);
        assert!(token.expired(500));
        assert!(!token.expired(499));
    }

    #[test]
    fn flash_alpha_fades_linearly() {
        let flash = FeedbackFlash {
            source: NodeId::from("a"),
            target: NodeId::from("b"),
            polarity: FeedbackPolarity::Useful,
            expires_at: 3_000,
        };
        assert!((flash.alpha(0) - 1.0).abs() < 1e-6);
        assert!((flash.alpha(1_500) - 0.5).abs() < 1e-6);
        assert_eq!(flash.alpha(3_000), 0.0);
    }

    #[test]
    fn scenario_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&ScenarioKind::WhatIf).unwrap();
        assert_eq!(json, "\"what-if\"");
    }
}
