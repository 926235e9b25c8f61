//! The scenario director: owns the single active overlay, its timers and
//! every piece of transient visual state derived from it.

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use tracing::{debug, info};

use nexus_graph::{Catalog, Division, NodeId};
use nexus_spread::compute_spread;

use crate::script::{
    self, BRIEFING_CHARS_PER_TICK, BRIEFING_TEXT, BRIEFING_TICK_MS, GAP_INFORM_LAG_MS,
    GAP_NODE_INTERVAL_MS, GAP_SETTLE_TRAIL_MS, ONBOARDING_STAGES, ONBOARDING_STAGE_INTERVAL_MS,
    RISK_RAMPS, SPREAD_EXCLUDED, SPREAD_SETTLE_TRAIL_MS, SPREAD_SOURCE, TIMELINE_ENTRIES,
    TIMELINE_INTERVAL_MS, TOKEN_TRAVEL_MS, TRACE_SETTLE_TRAIL_MS, TRACE_STAGES,
    TRACE_STAGE_INTERVAL_MS, WHATIF_IMPACTS, WHATIF_ITEM_INTERVAL_MS, WHATIF_RECOVERY,
    WHATIF_RECOVERY_TRAIL_MS, WHATIF_REMOVED,
};
use crate::state::{
    FeedbackFlash, FeedbackPolarity, MessageToken, RiskCounter, Scenario, ScenarioKind,
    ScenarioView, StageView, Toast, VisualState,
};
use crate::timer::{TimerAction, TimerQueue};
use crate::Result;

/// Owns the active scenario, its timer queue and the transient overlays.
///
/// All time flows in through explicit `now_ms` arguments; the director
/// never reads a clock, which makes every timed behavior replayable in
/// tests by just advancing a number.
pub struct Director {
    catalog: Arc<Catalog>,
    /// Bumped on every teardown; timers from older epochs are stale.
    epoch: u64,
    timers: TimerQueue,
    scenario: Option<Scenario>,
    tokens: Vec<MessageToken>,
    flashes: Vec<FeedbackFlash>,
    toast: Option<Toast>,
    risk: RiskCounter,
}

impl Director {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            epoch: 0,
            timers: TimerQueue::new(),
            scenario: None,
            tokens: Vec::new(),
            flashes: Vec::new(),
            toast: None,
            risk: RiskCounter::baseline(),
        }
    }

    /// Kind of the active scenario, if any.
    pub fn active(&self) -> Option<ScenarioKind> {
        self.scenario.as_ref().map(Scenario::kind)
    }

    /// Start a scenario. Starting the kind that is already active toggles
    /// it off instead; starting a different kind tears the old one down
    /// first, so at most one scenario's timers are ever live.
    pub fn start(&mut self, kind: ScenarioKind, now_ms: u64) -> Result<()> {
        if self.active() == Some(kind) {
            self.stop(now_ms);
            return Ok(());
        }
        self.teardown();
        info!(?kind, now_ms, "scenario start");

        let scenario = match kind {
            ScenarioKind::Trace => {
                for i in 0..TRACE_STAGES.len() {
                    self.timers.schedule(
                        now_ms + i as u64 * TRACE_STAGE_INTERVAL_MS,
                        self.epoch,
                        TimerAction::RevealTraceStage(i),
                    );
                }
                let last = (TRACE_STAGES.len() as u64 - 1) * TRACE_STAGE_INTERVAL_MS;
                self.timers.schedule(
                    now_ms + last + TRACE_SETTLE_TRAIL_MS,
                    self.epoch,
                    TimerAction::TraceSettled,
                );
                Scenario::Trace {
                    revealed: 0,
                    settled: false,
                }
            }
            ScenarioKind::WhatIf => {
                for i in 0..WHATIF_IMPACTS.len() {
                    self.timers.schedule(
                        now_ms + (i as u64 + 1) * WHATIF_ITEM_INTERVAL_MS,
                        self.epoch,
                        TimerAction::RevealCascadeItem(i),
                    );
                }
                self.timers.schedule(
                    now_ms
                        + WHATIF_IMPACTS.len() as u64 * WHATIF_ITEM_INTERVAL_MS
                        + WHATIF_RECOVERY_TRAIL_MS,
                    self.epoch,
                    TimerAction::ShowRecoveryPlan,
                );
                for (offset, target) in RISK_RAMPS {
                    self.timers
                        .schedule(now_ms + offset, self.epoch, TimerAction::RiskRamp(*target));
                }
                Scenario::WhatIf {
                    removed: NodeId::from(WHATIF_REMOVED),
                    revealed: 0,
                    recovery_shown: false,
                }
            }
            ScenarioKind::Spread => {
                let excluded: HashSet<NodeId> =
                    SPREAD_EXCLUDED.iter().map(|id| NodeId::from(*id)).collect();
                let plan =
                    compute_spread(&self.catalog, &NodeId::from(SPREAD_SOURCE), &excluded)?;
                for reached in &plan.reached {
                    self.timers.schedule(
                        now_ms + reached.delay_ms,
                        self.epoch,
                        TimerAction::SpreadInform(reached.node.clone()),
                    );
                }
                self.timers.schedule(
                    now_ms + plan.horizon_ms() + SPREAD_SETTLE_TRAIL_MS,
                    self.epoch,
                    TimerAction::SpreadSettled,
                );
                Scenario::Spread {
                    plan,
                    informed: BTreeSet::new(),
                    corrected: BTreeSet::new(),
                    dispatches: Vec::new(),
                    fixing: false,
                    settled: false,
                }
            }
            // The typewriter is a pure function of elapsed time, not a
            // timer chain: frame-rate jitter or a stalled loop must never
            // slow the reveal below 2 chars per 18ms of wall time.
            ScenarioKind::Briefing => Scenario::Briefing { started_at: now_ms },
            ScenarioKind::Timeline => {
                for i in 0..TIMELINE_ENTRIES.len() {
                    self.timers.schedule(
                        now_ms + i as u64 * TIMELINE_INTERVAL_MS,
                        self.epoch,
                        TimerAction::TimelineReveal(i),
                    );
                }
                Scenario::Timeline { revealed: 0 }
            }
            ScenarioKind::Onboarding => {
                for i in 1..ONBOARDING_STAGES.len() {
                    self.timers.schedule(
                        now_ms + i as u64 * ONBOARDING_STAGE_INTERVAL_MS,
                        self.epoch,
                        TimerAction::OnboardingStage(i),
                    );
                }
                Scenario::Onboarding { stage: 0 }
            }
            ScenarioKind::Silo => Scenario::Silo,
            ScenarioKind::Ripple => Scenario::Ripple,
        };

        self.scenario = Some(scenario);
        Ok(())
    }

    /// Stop the active scenario, cancelling its timers and clearing every
    /// visual contribution it made. Feedback flashes and toasts are not
    /// scenario contributions and survive.
    pub fn stop(&mut self, now_ms: u64) {
        if let Some(kind) = self.active() {
            info!(?kind, now_ms, "scenario stop");
        }
        self.teardown();
    }

    /// Full reset: cancel everything and return to the pristine state.
    pub fn reset(&mut self, now_ms: u64) {
        info!(now_ms, "reset");
        self.teardown();
        self.timers.clear();
        self.flashes.clear();
        self.toast = None;
    }

    fn teardown(&mut self) {
        self.epoch += 1;
        self.scenario = None;
        self.tokens.clear();
        self.risk.snap_to_baseline();
    }

    /// Advance to `now_ms`: fire due timers (dropping stale epochs) and
    /// prune expired tokens, flashes and toasts.
    pub fn tick(&mut self, now_ms: u64) {
        for action in self.timers.due(now_ms, self.epoch) {
            self.apply(action, now_ms);
        }
        self.tokens.retain(|t| !t.expired(now_ms));
        self.flashes.retain(|f| f.expires_at > now_ms);
        if self
            .toast
            .as_ref()
            .is_some_and(|t| t.expires_at <= now_ms)
        {
            self.toast = None;
        }
    }

    fn apply(&mut self, action: TimerAction, now_ms: u64) {
        match (&mut self.scenario, action) {
            (Some(Scenario::Trace { revealed, .. }), TimerAction::RevealTraceStage(i)) => {
                *revealed = i + 1;
                debug!(stage = i, "trace stage revealed");
                if let Some(next) = TRACE_STAGES.get(i + 1) {
                    self.tokens.push(MessageToken {
                        from: NodeId::from(TRACE_STAGES[i].agent.proxy()),
                        to: NodeId::from(next.agent.proxy()),
                        color: TRACE_STAGES[i].agent.color(),
                        started_at: now_ms,
                        duration_ms: TOKEN_TRAVEL_MS,
                    });
                }
            }
            (Some(Scenario::Trace { settled, .. }), TimerAction::TraceSettled) => {
                *settled = true;
            }
            (Some(Scenario::WhatIf { revealed, .. }), TimerAction::RevealCascadeItem(i)) => {
                *revealed = i + 1;
                debug!(item = i, "cascade item revealed");
            }
            (Some(Scenario::WhatIf { recovery_shown, .. }), TimerAction::ShowRecoveryPlan) => {
                *recovery_shown = true;
            }
            (Some(Scenario::WhatIf { .. }), TimerAction::RiskRamp(target)) => {
                debug!(target, "risk ramp");
                self.risk.ramp_to(target, now_ms);
            }
            (Some(Scenario::Spread { informed, .. }), TimerAction::SpreadInform(node)) => {
                debug!(%node, "spread informed");
                informed.insert(node);
            }
            (Some(Scenario::Spread { settled, .. }), TimerAction::SpreadSettled) => {
                *settled = true;
            }
            (Some(Scenario::Spread { .. }), TimerAction::DispatchPreview(node)) => {
                self.toast = Some(Toast {
                    text: script::dispatch_note(node.as_str()).to_owned(),
                    expires_at: now_ms + script::FLASH_LIFETIME_MS,
                });
            }
            (
                Some(Scenario::Spread {
                    informed,
                    corrected,
                    dispatches,
                    ..
                }),
                TimerAction::GapInformed { node, last },
            ) => {
                debug!(%node, last, "gap informed");
                dispatches.push(script::dispatch_note(node.as_str()));
                informed.insert(node.clone());
                corrected.insert(node);
            }
            (Some(Scenario::Spread { fixing, .. }), TimerAction::GapsSettled) => {
                *fixing = false;
            }
            (Some(Scenario::Timeline { revealed }), TimerAction::TimelineReveal(i)) => {
                *revealed = i + 1;
            }
            (Some(Scenario::Onboarding { stage }), TimerAction::OnboardingStage(i)) => {
                *stage = i;
            }
            // A timer from a scenario that is no longer active. The epoch
            // guard already drops these; this arm only covers actions that
            // outlived a variant change within the same epoch, which does
            // not happen in practice.
            _ => {}
        }
    }

    /// Begin the fix-gaps sequence: inform every unreached node in plan
    /// order, one per cycle, with a dispatch preview before each reveal.
    /// A no-op unless a spread is active with outstanding gaps.
    pub fn fix_gaps(&mut self, now_ms: u64) {
        let Some(Scenario::Spread {
            plan,
            corrected,
            fixing,
            ..
        }) = &mut self.scenario
        else {
            return;
        };
        if *fixing || plan.unreached.is_empty() || corrected.len() == plan.unreached.len() {
            return;
        }
        *fixing = true;
        info!(gaps = plan.unreached.len(), "fix gaps");

        let n = plan.unreached.len() as u64;
        for (i, node) in plan.unreached.iter().enumerate() {
            let base = now_ms + i as u64 * GAP_NODE_INTERVAL_MS;
            self.timers
                .schedule(base, self.epoch, TimerAction::DispatchPreview(node.clone()));
            self.timers.schedule(
                base + GAP_INFORM_LAG_MS,
                self.epoch,
                TimerAction::GapInformed {
                    node: node.clone(),
                    last: i as u64 + 1 == n,
                },
            );
        }
        self.timers.schedule(
            now_ms + (n - 1) * GAP_NODE_INTERVAL_MS + GAP_INFORM_LAG_MS + GAP_SETTLE_TRAIL_MS,
            self.epoch,
            TimerAction::GapsSettled,
        );
    }

    /// Record user feedback on a node: flash its first incident edge for
    /// 3 seconds and surface an acknowledgement toast. The toast appears
    /// even when the node has no edges.
    pub fn record_feedback(&mut self, node: &NodeId, polarity: FeedbackPolarity, now_ms: u64) {
        if let Some(edge) = self.catalog.first_edge_incident(node) {
            self.flashes.push(FeedbackFlash {
                source: edge.source.clone(),
                target: edge.target.clone(),
                polarity,
                expires_at: now_ms + script::FLASH_LIFETIME_MS,
            });
        }
        self.toast = Some(Toast {
            text: "Feedback recorded; pathway weights will adapt.".to_owned(),
            expires_at: now_ms + script::FLASH_LIFETIME_MS,
        });
        debug!(%node, ?polarity, "feedback");
    }

    /// Displayed risk value at `now_ms`.
    pub fn risk_displayed(&self, now_ms: u64) -> f64 {
        self.risk.displayed(now_ms)
    }

    /// Capture the read-only frame snapshot. Expired flashes, tokens and
    /// toasts are filtered out even if `tick` has not pruned them yet.
    pub fn snapshot(&self, now_ms: u64) -> VisualState {
        let mut state = VisualState::pristine();
        state.risk_displayed = self.risk.displayed(now_ms);
        state.risk_target = self.risk.target;
        state.tokens = self
            .tokens
            .iter()
            .filter(|t| !t.expired(now_ms))
            .cloned()
            .collect();
        state.flashes = self
            .flashes
            .iter()
            .filter(|f| f.expires_at > now_ms)
            .cloned()
            .collect();
        state.toast = self
            .toast
            .as_ref()
            .filter(|t| t.expires_at > now_ms)
            .map(|t| t.text.clone());

        let Some(scenario) = &self.scenario else {
            return state;
        };

        match scenario {
            Scenario::Trace { revealed, settled } => {
                for stage in &TRACE_STAGES[..*revealed] {
                    for id in stage.highlights {
                        state.highlighted.insert(NodeId::from(*id));
                    }
                }
                state.scenario = Some(ScenarioView::Trace {
                    stages: TRACE_STAGES[..*revealed]
                        .iter()
                        .map(|s| StageView {
                            agent: s.agent,
                            color: s.agent.color(),
                            text: s.text,
                        })
                        .collect(),
                    settled: *settled,
                });
            }
            Scenario::WhatIf {
                removed,
                revealed,
                recovery_shown,
            } => {
                state.removed = Some(removed.clone());
                state.scenario = Some(ScenarioView::WhatIf {
                    removed: removed.clone(),
                    impacts: WHATIF_IMPACTS[..*revealed].to_vec(),
                    recovery: recovery_shown.then_some(WHATIF_RECOVERY),
                });
            }
            Scenario::Spread {
                plan,
                informed,
                corrected,
                dispatches,
                fixing,
                settled,
            } => {
                state.informed = informed.clone();
                state.corrected = corrected.clone();
                state.scenario = Some(ScenarioView::Spread {
                    informed_count: informed.len(),
                    unreached: plan
                        .unreached
                        .iter()
                        .filter(|id| !corrected.contains(id))
                        .cloned()
                        .collect(),
                    dispatches: dispatches.clone(),
                    fixing: *fixing,
                    settled: *settled,
                });
            }
            Scenario::Briefing { started_at } => {
                let total = BRIEFING_TEXT.chars().count();
                let ticks = now_ms.saturating_sub(*started_at) / BRIEFING_TICK_MS;
                let revealed = (ticks as usize * BRIEFING_CHARS_PER_TICK).min(total);
                state.scenario = Some(ScenarioView::Briefing {
                    text: BRIEFING_TEXT.chars().take(revealed).collect(),
                    done: revealed >= total,
                });
            }
            Scenario::Timeline { revealed } => {
                state.scenario = Some(ScenarioView::Timeline {
                    entries: TIMELINE_ENTRIES[..*revealed].to_vec(),
                });
            }
            Scenario::Onboarding { stage } => {
                let division = Division::ALL[*stage];
                for node in self.catalog.nodes_in(division) {
                    state.highlighted.insert(node.id.clone());
                }
                state.scenario = Some(ScenarioView::Onboarding {
                    stage: *stage,
                    text: ONBOARDING_STAGES[*stage],
                });
            }
            Scenario::Silo => {
                let (a, b) = script::SILO_PAIR;
                state.highlighted.insert(NodeId::from(a));
                state.highlighted.insert(NodeId::from(b));
                state.scenario = Some(ScenarioView::Silo {
                    pair: (NodeId::from(a), NodeId::from(b)),
                    note: script::SILO_NOTE,
                });
            }
            Scenario::Ripple => {
                state.ripple_origin = Some(NodeId::from(script::RIPPLE_ORIGIN));
                state.scenario = Some(ScenarioView::Ripple);
            }
        }
        state
    }

    #[cfg(test)]
    pub(crate) fn pending_timers(&self) -> usize {
        self.timers.pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn director() -> Director {
        Director::new(Arc::new(Catalog::meridian()))
    }

    #[test]
    fn trace_reveals_stages_in_order() {
        let mut d = director();
        d.start(ScenarioKind::Trace, 0).unwrap();

        d.tick(0);
        let s = d.snapshot(0);
        let Some(ScenarioView::Trace { stages, settled }) = s.scenario else {
            panic!("expected trace view");
        };
        assert_eq!(stages.len(), 1);
        assert!(!settled);
        assert_eq!(s.tokens.len(), 1);

        d.tick(TRACE_STAGE_INTERVAL_MS * 3);
        let s = d.snapshot(TRACE_STAGE_INTERVAL_MS * 3);
        let Some(ScenarioView::Trace { stages, .. }) = s.scenario else {
            panic!("expected trace view");
        };
        assert_eq!(stages.len(), 4);

        let end = (TRACE_STAGES.len() as u64 - 1) * TRACE_STAGE_INTERVAL_MS
            + TRACE_SETTLE_TRAIL_MS;
        d.tick(end);
        let s = d.snapshot(end);
        let Some(ScenarioView::Trace { stages, settled }) = s.scenario else {
            panic!("expected trace view");
        };
        assert_eq!(stages.len(), TRACE_STAGES.len());
        assert!(settled);
    }

    #[test]
    fn starting_a_new_scenario_clears_the_old_one() {
        let mut d = director();
        d.start(ScenarioKind::Trace, 0).unwrap();
        d.tick(TRACE_STAGE_INTERVAL_MS);
        assert!(!d.snapshot(TRACE_STAGE_INTERVAL_MS).highlighted.is_empty());

        d.start(ScenarioKind::WhatIf, TRACE_STAGE_INTERVAL_MS).unwrap();
        let s = d.snapshot(TRACE_STAGE_INTERVAL_MS);
        assert!(s.highlighted.is_empty());
        assert!(s.tokens.is_empty());
        assert_eq!(s.removed, Some(NodeId::from(WHATIF_REMOVED)));
        assert_eq!(d.active(), Some(ScenarioKind::WhatIf));

        // Stale trace timers must never fire into the what-if.
        d.tick(TRACE_STAGE_INTERVAL_MS * 4);
        assert!(d
            .snapshot(TRACE_STAGE_INTERVAL_MS * 4)
            .highlighted
            .is_empty());
    }

    #[test]
    fn starting_twice_toggles_off() {
        let mut d = director();
        d.start(ScenarioKind::Silo, 0).unwrap();
        assert_eq!(d.active(), Some(ScenarioKind::Silo));

        d.start(ScenarioKind::Silo, 10).unwrap();
        assert_eq!(d.active(), None);
        assert_eq!(d.snapshot(10), VisualState::pristine());
    }

    #[test]
    fn stop_cancels_pending_reveals() {
        let mut d = director();
        d.start(ScenarioKind::Trace, 0).unwrap();
        d.stop(10);
        d.tick(10_000);
        assert_eq!(d.snapshot(10_000), VisualState::pristine());
    }

    #[test]
    fn reset_restores_the_pristine_state() {
        let mut d = director();
        d.start(ScenarioKind::WhatIf, 0).unwrap();
        d.tick(2_000);
        d.record_feedback(&NodeId::from("p-sarah"), FeedbackPolarity::Useful, 2_000);
        d.tick(2_100);

        d.reset(2_200);
        assert_eq!(d.snapshot(2_200), VisualState::pristine());
        assert_eq!(d.pending_timers(), 0);

        // Nothing scheduled before the reset may resurface later.
        d.tick(60_000);
        assert_eq!(d.snapshot(60_000), VisualState::pristine());
    }

    #[test]
    fn whatif_ramps_risk_through_scripted_targets() {
        let mut d = director();
        d.start(ScenarioKind::WhatIf, 0).unwrap();

        d.tick(200);
        assert_eq!(d.snapshot(200).risk_target, 420_000);
        d.tick(800);
        assert_eq!(d.snapshot(800).risk_target, 1_200_000);
        d.tick(1_600);
        assert_eq!(d.snapshot(1_600).risk_target, 2_400_000);

        // Eased display settles on the final target.
        assert!((d.risk_displayed(3_000) - 2_400_000.0).abs() < 1e-6);

        let s = d.snapshot(5_000);
        let Some(ScenarioView::WhatIf { .. }) = s.scenario else {
            panic!("expected what-if view");
        };
        d.tick(5_000);
        let s = d.snapshot(5_000);
        let Some(ScenarioView::WhatIf {
            impacts, recovery, ..
        }) = s.scenario
        else {
            panic!("expected what-if view");
        };
        assert_eq!(impacts.len(), WHATIF_IMPACTS.len());
        assert_eq!(recovery, Some(WHATIF_RECOVERY));
    }

    #[test]
    fn stopping_whatif_snaps_risk_to_baseline() {
        let mut d = director();
        d.start(ScenarioKind::WhatIf, 0).unwrap();
        d.tick(1_600);
        d.stop(1_700);
        assert!((d.risk_displayed(1_700) - script::RISK_BASELINE as f64).abs() < 1e-6);
    }

    #[test]
    fn spread_informs_everyone_reachable_then_fix_gaps_covers_the_rest() {
        let mut d = director();
        d.start(ScenarioKind::Spread, 0).unwrap();

        d.tick(0);
        let s = d.snapshot(0);
        assert!(s.informed.contains(&NodeId::from(SPREAD_SOURCE)));

        d.tick(30_000);
        let s = d.snapshot(30_000);
        let Some(ScenarioView::Spread {
            unreached, settled, ..
        }) = &s.scenario
        else {
            panic!("expected spread view");
        };
        assert!(*settled);
        assert_eq!(unreached.len(), SPREAD_EXCLUDED.len());
        assert_eq!(
            s.informed.len(),
            Catalog::meridian().node_count() - SPREAD_EXCLUDED.len()
        );

        d.fix_gaps(30_000);
        d.tick(30_000);
        // First dispatch preview lands immediately.
        assert!(d.snapshot(30_000).toast.is_some());

        d.tick(60_000);
        let s = d.snapshot(60_000);
        assert_eq!(s.corrected.len(), SPREAD_EXCLUDED.len());
        assert_eq!(s.informed.len(), Catalog::meridian().node_count());
        let Some(ScenarioView::Spread {
            unreached,
            fixing,
            dispatches,
            ..
        }) = s.scenario
        else {
            panic!("expected spread view");
        };
        assert!(unreached.is_empty());
        assert!(!fixing);
        assert_eq!(dispatches.len(), SPREAD_EXCLUDED.len());
    }

    #[test]
    fn fix_gaps_is_a_noop_while_already_fixing() {
        let mut d = director();
        d.start(ScenarioKind::Spread, 0).unwrap();
        d.tick(30_000);
        d.fix_gaps(30_000);
        let pending = d.pending_timers();
        d.fix_gaps(30_001);
        assert_eq!(d.pending_timers(), pending);
    }

    #[test]
    fn feedback_flash_expires_after_three_seconds() {
        let mut d = director();
        let t = 1_000;
        d.record_feedback(&NodeId::from("p-sarah"), FeedbackPolarity::NotUseful, t);

        assert_eq!(d.snapshot(t + 2_999).flashes.len(), 1);
        assert!(d.snapshot(t + 2_999).toast.is_some());
        assert!(d.snapshot(t + 3_001).flashes.is_empty());
        assert!(d.snapshot(t + 3_001).toast.is_none());
    }

    #[test]
    fn feedback_flash_survives_a_scenario_switch() {
        let mut d = director();
        d.record_feedback(&NodeId::from("p-sarah"), FeedbackPolarity::RequestInfo, 0);
        d.start(ScenarioKind::Timeline, 100).unwrap();
        assert_eq!(d.snapshot(100).flashes.len(), 1);
    }

    fn briefing_text_at(d: &Director, now: u64) -> (String, bool) {
        let Some(ScenarioView::Briefing { text, done }) = d.snapshot(now).scenario else {
            panic!("expected briefing view");
        };
        (text, done)
    }

    #[test]
    fn briefing_typewriter_tracks_elapsed_time() {
        let mut d = director();
        d.start(ScenarioKind::Briefing, 0).unwrap();

        let (text, done) = briefing_text_at(&d, 0);
        assert!(text.is_empty());
        assert!(!done);

        // One second in: 55 full ticks have elapsed, whatever the frame
        // cadence was in between.
        let expected = (1_000 / BRIEFING_TICK_MS) as usize * BRIEFING_CHARS_PER_TICK;
        let (text, _) = briefing_text_at(&d, 1_000);
        assert_eq!(text.chars().count(), expected);
        assert!(BRIEFING_TEXT.starts_with(&text));

        let total = BRIEFING_TEXT.chars().count();
        let horizon = (total.div_ceil(BRIEFING_CHARS_PER_TICK) as u64 + 1) * BRIEFING_TICK_MS;
        let (text, done) = briefing_text_at(&d, horizon);
        assert!(done);
        assert_eq!(text, BRIEFING_TEXT);
    }

    #[test]
    fn briefing_rate_is_independent_of_frame_cadence() {
        // Drain at ~60Hz in one director and with a single late tick in
        // another: both must have revealed the same prefix at the same
        // wall-clock moment.
        let mut fast = director();
        fast.start(ScenarioKind::Briefing, 0).unwrap();
        let mut t = 0;
        while t < 1_000 {
            t += 17;
            fast.tick(t);
        }

        let mut stalled = director();
        stalled.start(ScenarioKind::Briefing, 0).unwrap();
        stalled.tick(1_003);

        let (a, _) = briefing_text_at(&fast, 1_003);
        let (b, _) = briefing_text_at(&stalled, 1_003);
        assert_eq!(a, b);
        assert_eq!(
            a.chars().count(),
            (1_003 / BRIEFING_TICK_MS) as usize * BRIEFING_CHARS_PER_TICK
        );
    }

    #[test]
    fn onboarding_walks_the_divisions() {
        let mut d = director();
        d.start(ScenarioKind::Onboarding, 0).unwrap();
        d.tick(0);
        let s = d.snapshot(0);
        let Some(ScenarioView::Onboarding { stage: 0, .. }) = s.scenario else {
            panic!("expected onboarding stage 0");
        };
        assert!(s.highlighted.contains(&NodeId::from("p-alex")));

        let t = 3 * ONBOARDING_STAGE_INTERVAL_MS;
        d.tick(t);
        let s = d.snapshot(t);
        let Some(ScenarioView::Onboarding { stage: 3, .. }) = s.scenario else {
            panic!("expected onboarding stage 3");
        };
        assert!(s.highlighted.contains(&NodeId::from("p-yuki")));
    }

    #[test]
    fn ripple_sets_its_origin() {
        let mut d = director();
        d.start(ScenarioKind::Ripple, 0).unwrap();
        assert_eq!(
            d.snapshot(0).ripple_origin,
            Some(NodeId::from(script::RIPPLE_ORIGIN))
        );
    }
}
