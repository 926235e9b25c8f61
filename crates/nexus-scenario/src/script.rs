//! Static scripted content for every scenario.
//!
//! All stage text, agent rosters, cascade items and timing constants live
//! here. Nothing in this module is derived at runtime; the director only
//! decides *when* each piece becomes visible.

use serde::Serialize;

/// Conceptual reasoning sub-processes shown during the contradiction
/// trace. These are not graph nodes; each one borrows a real agent node
/// as its on-canvas proxy for message-token travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentRole {
    Coordinator,
    Memory,
    Critic,
    Router,
}

impl AgentRole {
    /// Accent color used for this role's stage card and message tokens.
    pub fn color(&self) -> &'static str {
        match self {
            AgentRole::Coordinator => "#4ecdc4",
            AgentRole::Memory => "#a78bfa",
            AgentRole::Critic => "#ff6b6b",
            AgentRole::Router => "#ffe66d",
        }
    }

    /// Graph node standing in for this role on the canvas.
    pub fn proxy(&self) -> &'static str {
        match self {
            AgentRole::Coordinator => "a-iris",
            AgentRole::Memory => "a-atlas",
            AgentRole::Critic => "a-sentinel",
            AgentRole::Router => "a-nova",
        }
    }
}

/// One revealed step of the contradiction trace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TraceStage {
    pub agent: AgentRole,
    pub text: &'static str,
    /// Graph nodes this stage highlights while revealed.
    pub highlights: &'static [&'static str],
}

/// Milliseconds between consecutive trace stage reveals.
pub const TRACE_STAGE_INTERVAL_MS: u64 = 1_500;
/// Trailing delay after the last stage before the trace settles.
pub const TRACE_SETTLE_TRAIL_MS: u64 = 2_000;
/// Travel time of one inter-agent message token.
pub const TOKEN_TRAVEL_MS: u64 = 400;

pub const TRACE_STAGES: &[TraceStage] = &[
    TraceStage {
        agent: AgentRole::Coordinator,
        text: "Scanning recent directives for conflicting commitments",
        highlights: &["p-alex"],
    },
    TraceStage {
        agent: AgentRole::Memory,
        text: "Retrieved Q3 expansion memo and the hiring freeze notice",
        highlights: &["p-catherine", "p-robert"],
    },
    TraceStage {
        agent: AgentRole::Critic,
        text: "Conflict: the expansion plan requires headcount the freeze forbids",
        highlights: &["p-catherine", "p-robert", "p-marcus"],
    },
    TraceStage {
        agent: AgentRole::Router,
        text: "Routing the contradiction to its owning executives",
        highlights: &["p-alex", "p-catherine"],
    },
    TraceStage {
        agent: AgentRole::Memory,
        text: "Cross-checking delegation trails for affected teams",
        highlights: &["p-marcus", "p-sarah"],
    },
    TraceStage {
        agent: AgentRole::Critic,
        text: "Downstream teams received only the expansion memo",
        highlights: &["p-priya", "p-anika"],
    },
    TraceStage {
        agent: AgentRole::Coordinator,
        text: "Contradiction confirmed; escalated for executive resolution",
        highlights: &["p-alex"],
    },
];

/// Node notionally removed by the what-if cascade.
pub const WHATIF_REMOVED: &str = "p-catherine";
/// Milliseconds between cascade item reveals; item `i` lands at `(i+1) * interval`.
pub const WHATIF_ITEM_INTERVAL_MS: u64 = 400;
/// Trailing delay after the last item before the recovery plan shows.
pub const WHATIF_RECOVERY_TRAIL_MS: u64 = 600;

pub const WHATIF_IMPACTS: &[&str] = &[
    "Iris-Research loses its delegation owner",
    "Wei Zhang's cross-division channel goes dark",
    "Strategy reviews stall without CSO sign-off",
    "Board reporting falls back to the CEO",
    "Compliance exceptions queue without triage",
    "Partnership pipeline loses its executive sponsor",
];

pub const WHATIF_RECOVERY: &str = "Recovery plan: appoint an interim strategy owner, \
reassign Iris-Research to the CEO, schedule an APAC channel handover.";

/// Risk counter baseline shown when no what-if is running.
pub const RISK_BASELINE: u64 = 75_200;
/// Duration of the eased counter animation toward each risk target.
pub const RISK_EASE_MS: u64 = 800;
/// `(offset_ms, target)` ramps scheduled at what-if start.
pub const RISK_RAMPS: &[(u64, u64)] = &[(200, 420_000), (800, 1_200_000), (1_600, 2_400_000)];

/// Fixed spread source and blackout set for the knowledge-spread scenario.
pub const SPREAD_SOURCE: &str = "p-alex";
pub const SPREAD_EXCLUDED: &[&str] = &["p-sophie", "p-omar", "p-wei"];
/// Trailing delay after the last scheduled reveal before spread settles.
pub const SPREAD_SETTLE_TRAIL_MS: u64 = 800;

/// Fix-gaps pacing: per-node cycle, preview-to-informed lag, final trail.
pub const GAP_NODE_INTERVAL_MS: u64 = 2_000;
pub const GAP_INFORM_LAG_MS: u64 = 1_200;
pub const GAP_SETTLE_TRAIL_MS: u64 = 1_500;

/// Static dispatch note for a node left out of the spread.
pub fn dispatch_note(id: &str) -> &'static str {
    match id {
        "p-sophie" => "Dispatched the ops summary to Sophie Dubois",
        "p-omar" => "Dispatched the backend brief to Omar Hassan",
        "p-wei" => "Dispatched the growth update to Wei Zhang",
        _ => "Dispatched a catch-up brief",
    }
}

/// Briefing typewriter: characters revealed per tick, and tick period.
pub const BRIEFING_CHARS_PER_TICK: usize = 2;
pub const BRIEFING_TICK_MS: u64 = 18;

pub const BRIEFING_TEXT: &str = "Good morning. Overnight, Atlas-Code landed the payment \
retry fix and Iris-Research finished the competitor scan. One contradiction is pending \
executive review: the Q3 expansion memo conflicts with the hiring freeze. EMEA is \
waiting on the infra migration window; APAC growth is tracking 4% ahead of plan. \
Recommended focus: resolve the expansion contradiction before the Thursday board sync.";

/// Decision-timeline entries, newest first. Revealed one per tick.
pub const TIMELINE_INTERVAL_MS: u64 = 300;
pub const TIMELINE_ENTRIES: &[&str] = &[
    "09:42 Sentinel-Compliance flagged a vendor-contract exception",
    "09:15 Atlas-Code merged the payment retry fix",
    "08:58 Marcus approved the infra migration window",
    "08:30 Nova-Sales drafted the Acme renewal proposal",
    "08:12 Iris-Research delivered the competitor scan",
    "07:55 Sarah escalated the EMEA pricing request",
    "07:40 Catherine circulated the Q3 expansion memo",
    "07:21 Robert posted the hiring freeze notice",
    "07:05 Henrik requested a migration dry run",
    "06:48 Yuki reported APAC growth at +4%",
    "06:30 Maria closed the quarterly renewals review",
    "06:02 Nina signed off the updated data policy",
];

/// The silo callout: the weakest cross-division pathway.
pub const SILO_PAIR: (&str, &str) = ("p-priya", "p-elena");
pub const SILO_NOTE: &str = "Knowledge silo: engineering context crosses to EMEA only \
through one weak pathway (Priya \u{2194} Elena, strength 0.3).";

/// Onboarding tour: one stage per division, revealed in layout order.
pub const ONBOARDING_STAGE_INTERVAL_MS: u64 = 1_800;
pub const ONBOARDING_STAGES: &[&str] = &[
    "Headquarters sets direction; two agents operate at executive trust tiers.",
    "North America hosts engineering, product and sales, plus two working agents.",
    "EMEA runs engineering and operations through Henrik's team.",
    "APAC is the growth frontier, linked to HQ through a single channel.",
];

/// Node the decorative ripple emanates from.
pub const RIPPLE_ORIGIN: &str = "p-alex";

/// Lifetime of feedback flashes and toast acknowledgements.
pub const FLASH_LIFETIME_MS: u64 = 3_000;
