//! Nexus Visualization Server
//!
//! Serve the animated organizational graph and its scenario overlays.

use std::env;
use std::sync::Arc;

use nexus_graph::Catalog;
use nexus_vis::{Engine, VisServer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Parse command line args
    let args: Vec<String> = env::args().collect();

    let port: u16 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(3000);

    let catalog = Arc::new(Catalog::meridian());

    println!("Nexus Graph Visualizer");
    println!("======================");
    println!();
    println!("Meridian Technologies catalog:");
    println!("  Nodes: {}", catalog.node_count());
    println!("  Pathways: {}", catalog.edge_count());
    println!();
    println!("Starting visualization server on http://localhost:{}", port);
    println!("Open in browser to explore the graph and scenario overlays.");
    println!();

    let engine = Engine::new(catalog, 1280.0, 800.0);
    let server = VisServer::new(engine);
    server.serve(port).await?;

    Ok(())
}
