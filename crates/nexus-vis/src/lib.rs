//! Interactive visualization front-end for the Nexus organizational graph.
//!
//! Hosts the engine (layout + director + renderer) behind an axum server
//! that streams draw-list frames to a canvas client over HTTP and
//! WebSocket, and routes clicks, button actions and feedback back in.

pub mod engine;
pub mod interaction;
pub mod server;

pub use engine::{Engine, Frame};
pub use interaction::{hit_test, Action, HIT_RADIUS};
pub use server::VisServer;
