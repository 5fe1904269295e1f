use anyhow::Result;
use axum::{routing::post, Router};
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};
use tracing::info;

use loadout_breakeven::api;
use loadout_breakeven::simulation::DEFAULT_NUM_RAIDS;
use loadout_breakeven::types::AppState;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Port to run the web server on
    #[arg(short, long, default_value = "3000", env = "PORT")]
    port: u16,

    /// Raids per simulated equity path
    #[arg(short, long, default_value_t = DEFAULT_NUM_RAIDS)]
    num_raids: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("loadout_breakeven=info".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    info!("Starting break-even loadout server");
    info!("Port: {}", args.port);
    info!("Raids per simulation: {}", args.num_raids);

    let state = Arc::new(AppState {
        num_raids: args.num_raids,
    });

    // Build router
    let app = Router::new()
        .route("/api/calculate", post(api::calculate))
        .nest_service("/", ServeDir::new("frontend"))
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    info!("Server running at http://{}", addr);
    info!("Open http://localhost:{} in your browser", args.port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
