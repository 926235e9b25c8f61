//! Epoch-guarded deadline queue.
//!
//! Every timed effect in the director is an entry in this queue: an
//! absolute deadline, the epoch it was scheduled under, and the action to
//! apply when it fires. Cancellation is cooperative — tearing a scenario
//! down bumps the epoch, and entries from an older epoch are discarded
//! when they come due instead of mutating state. This is the only
//! cancellation mechanism in the system.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use nexus_graph::NodeId;

/// A state mutation applied when its deadline passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TimerAction {
    RevealTraceStage(usize),
    TraceSettled,
    RevealCascadeItem(usize),
    ShowRecoveryPlan,
    RiskRamp(u64),
    SpreadInform(NodeId),
    SpreadSettled,
    DispatchPreview(NodeId),
    GapInformed { node: NodeId, last: bool },
    GapsSettled,
    TimelineReveal(usize),
    OnboardingStage(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    fire_at: u64,
    /// Insertion sequence; breaks deadline ties in schedule order.
    seq: u64,
    epoch: u64,
    action: TimerAction,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.fire_at, self.seq).cmp(&(other.fire_at, other.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-heap of pending timers, drained by `due`.
#[derive(Debug, Default)]
pub(crate) struct TimerQueue {
    heap: BinaryHeap<Reverse<Entry>>,
    seq: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule an action at an absolute deadline under the given epoch.
    pub fn schedule(&mut self, fire_at: u64, epoch: u64, action: TimerAction) {
        self.seq += 1;
        self.heap.push(Reverse(Entry {
            fire_at,
            seq: self.seq,
            epoch,
            action,
        }));
    }

    /// Pop every entry due at `now`, in deadline order. Entries scheduled
    /// under an older epoch are stale: they are dropped here, never
    /// applied.
    pub fn due(&mut self, now: u64, current_epoch: u64) -> Vec<TimerAction> {
        let mut fired = Vec::new();
        while let Some(Reverse(entry)) = self.heap.peek() {
            if entry.fire_at > now {
                break;
            }
            let entry = match self.heap.pop() {
                Some(Reverse(e)) => e,
                None => break,
            };
            if entry.epoch == current_epoch {
                fired.push(entry.action);
            }
        }
        fired
    }

    /// Drop every pending entry regardless of epoch.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    pub fn pending(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_in_deadline_then_insertion_order() {
        let mut q = TimerQueue::new();
        q.schedule(200, 0, TimerAction::RevealTraceStage(1));
        q.schedule(100, 0, TimerAction::RevealTraceStage(0));
        q.schedule(200, 0, TimerAction::TraceSettled);

        assert_eq!(q.due(50, 0), vec![]);
        assert_eq!(q.due(100, 0), vec![TimerAction::RevealTraceStage(0)]);
        assert_eq!(
            q.due(250, 0),
            vec![TimerAction::RevealTraceStage(1), TimerAction::TraceSettled]
        );
        assert_eq!(q.pending(), 0);
    }

    #[test]
    fn stale_epoch_entries_are_dropped() {
        let mut q = TimerQueue::new();
        q.schedule(100, 0, TimerAction::RevealTraceStage(0));
        q.schedule(100, 1, TimerAction::RevealTraceStage(1));

        assert_eq!(q.due(100, 1), vec![TimerAction::RevealTraceStage(1)]);
        assert_eq!(q.pending(), 0);
    }

    #[test]
    fn clear_drops_everything() {
        let mut q = TimerQueue::new();
        q.schedule(100, 0, TimerAction::TraceSettled);
        q.clear();
        assert_eq!(q.due(1_000, 0), vec![]);
    }
}
