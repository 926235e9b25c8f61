//! Scenario direction for the Nexus organizational graph.
//!
//! The [`Director`] owns the single active overlay scenario, the deadline
//! queue that drives its staged reveals, and all transient visual state
//! (message tokens, feedback flashes, toasts, the risk counter). Time is
//! always passed in explicitly; nothing here reads a clock or spawns a
//! task, so playback is fully deterministic under test.

mod director;
mod script;
mod state;
mod timer;

pub use director::Director;
pub use script::{AgentRole, RISK_BASELINE};
pub use state::{
    FeedbackFlash, FeedbackPolarity, MessageToken, RiskCounter, ScenarioKind, ScenarioView,
    StageView, Toast, VisualState,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Spread(#[from] nexus_spread::SpreadError),
}

pub type Result<T> = std::result::Result<T, Error>;
