//! Axum web server with WebSocket streaming for the visualization.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::RwLock;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use nexus_graph::NodeId;
use nexus_layout::Vec2;
use nexus_scenario::{FeedbackPolarity, ScenarioKind};

use crate::engine::{Engine, Frame};
use crate::interaction::Action;

/// Shared application state.
pub struct AppState {
    engine: RwLock<Engine>,
    origin: Instant,
}

impl AppState {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Visualization server.
pub struct VisServer {
    state: Arc<AppState>,
}

impl VisServer {
    /// Create a new visualization server around an engine.
    pub fn new(engine: Engine) -> Self {
        Self {
            state: Arc::new(AppState {
                engine: RwLock::new(engine),
                origin: Instant::now(),
            }),
        }
    }

    /// Build the router for the server.
    pub fn router(&self) -> Router {
        Router::new()
            // Serve the canvas client
            .route("/", get(index_handler))
            // API routes
            .route("/api/status", get(status_handler))
            .route("/api/frame", get(frame_handler))
            .route("/api/action", post(action_handler))
            .route("/api/click", post(click_handler))
            .route("/api/feedback", post(feedback_handler))
            .route("/api/resize", post(resize_handler))
            // WebSocket for frame streaming
            .route("/ws", get(ws_handler))
            .layer(CorsLayer::permissive())
            .with_state(self.state.clone())
    }

    /// Run the server on the given port.
    pub async fn serve(self, port: u16) -> Result<(), std::io::Error> {
        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Visualization server running on http://localhost:{}", port);
        axum::serve(listener, self.router()).await
    }
}

/// Serve the canvas index page.
async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

/// Server status response.
#[derive(Serialize)]
struct StatusResponse {
    status: &'static str,
    node_count: usize,
    edge_count: usize,
    particle_count: usize,
    active: Option<ScenarioKind>,
}

async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let engine = state.engine.read().await;
    Json(StatusResponse {
        status: "ok",
        node_count: engine.catalog().node_count(),
        edge_count: engine.catalog().edge_count(),
        particle_count: engine.particle_count(),
        active: engine.active(),
    })
}

async fn frame_handler(State(state): State<Arc<AppState>>) -> Json<Frame> {
    let now = state.now_ms();
    let mut engine = state.engine.write().await;
    Json(engine.frame(now))
}

#[derive(Serialize)]
struct AckResponse {
    ok: bool,
    active: Option<ScenarioKind>,
}

async fn action_handler(
    State(state): State<Arc<AppState>>,
    Json(action): Json<Action>,
) -> Json<AckResponse> {
    let now = state.now_ms();
    let mut engine = state.engine.write().await;
    let ok = engine.dispatch(action, now).is_ok();
    Json(AckResponse {
        ok,
        active: engine.active(),
    })
}

#[derive(Deserialize)]
struct ClickRequest {
    x: f32,
    y: f32,
}

#[derive(Serialize)]
struct ClickResponse {
    selected: Option<NodeId>,
}

async fn click_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ClickRequest>,
) -> Json<ClickResponse> {
    let now = state.now_ms();
    let mut engine = state.engine.write().await;
    Json(ClickResponse {
        selected: engine.click(Vec2::new(req.x, req.y), now),
    })
}

#[derive(Deserialize)]
struct FeedbackRequest {
    node: NodeId,
    polarity: FeedbackPolarity,
}

async fn feedback_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<FeedbackRequest>,
) -> Json<AckResponse> {
    let now = state.now_ms();
    let mut engine = state.engine.write().await;
    engine.feedback(&req.node, req.polarity, now);
    Json(AckResponse {
        ok: true,
        active: engine.active(),
    })
}

#[derive(Deserialize)]
struct ResizeRequest {
    width: f32,
    height: f32,
}

async fn resize_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ResizeRequest>,
) -> Json<AckResponse> {
    let mut engine = state.engine.write().await;
    engine.resize(req.width, req.height);
    Json(AckResponse {
        ok: true,
        active: engine.active(),
    })
}

async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
    // Send an initial frame so the client can paint immediately.
    let frame = {
        let now = state.now_ms();
        let mut engine = state.engine.write().await;
        engine.frame(now)
    };
    if let Ok(json) = serde_json::to_string(&WsResponse::Frame(frame)) {
        let _ = socket.send(Message::Text(json.into())).await;
    }

    while let Some(Ok(msg)) = socket.recv().await {
        match msg {
            Message::Text(text) => {
                if let Ok(cmd) = serde_json::from_str::<WsCommand>(&text) {
                    let response = handle_ws_command(&state, cmd).await;
                    if let Ok(json) = serde_json::to_string(&response) {
                        let _ = socket.send(Message::Text(json.into())).await;
                    }
                }
            }
            Message::Close(_) => break,
            _ => {}
        }
    }
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
enum WsCommand {
    Frame,
    Action { action: Action },
    Click { x: f32, y: f32 },
    Feedback { node: NodeId, polarity: FeedbackPolarity },
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
enum WsResponse {
    Frame(Frame),
    Ack { ok: bool, active: Option<ScenarioKind> },
    Selected { selected: Option<NodeId> },
}

async fn handle_ws_command(state: &Arc<AppState>, cmd: WsCommand) -> WsResponse {
    let now = state.now_ms();
    match cmd {
        WsCommand::Frame => {
            let mut engine = state.engine.write().await;
            WsResponse::Frame(engine.frame(now))
        }
        WsCommand::Action { action } => {
            let mut engine = state.engine.write().await;
            let ok = engine.dispatch(action, now).is_ok();
            WsResponse::Ack {
                ok,
                active: engine.active(),
            }
        }
        WsCommand::Click { x, y } => {
            let mut engine = state.engine.write().await;
            WsResponse::Selected {
                selected: engine.click(Vec2::new(x, y), now),
            }
        }
        WsCommand::Feedback { node, polarity } => {
            let mut engine = state.engine.write().await;
            engine.feedback(&node, polarity, now);
            WsResponse::Ack {
                ok: true,
                active: engine.active(),
            }
        }
    }
}
