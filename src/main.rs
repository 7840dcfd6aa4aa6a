/// Itinerary relay HTTP server
///
/// Proxies travel-itinerary requests to the Cerebras chat-completions API
/// - POST /travel     — structured itinerary request
/// - POST /api/route  — raw prompt relay
/// - GET  /health     — liveness probe

use std::sync::Arc;

use anyhow::Result;

use itinerary_api::config::ServerConfig;
use itinerary_api::routes::{build_router, AppState};
use itinerary_api::upstream::CerebrasClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = ServerConfig::from_env();
    let port = config.port;

    if config.cerebras_api_key.is_none() {
        tracing::warn!(
            "[INIT] CEREBRAS_KEY is not set; itinerary requests will answer with a configuration error"
        );
    }

    let transport = Arc::new(CerebrasClient::new(config.chat_url.clone()));
    let app = build_router(AppState::new(config, transport));

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    println!("✓ Itinerary API server running on http://{}", addr);
    println!("  POST /travel     — Build a travel itinerary");
    println!("  POST /api/route  — Relay a raw route prompt");
    println!("  GET  /health     — Check server health\n");

    axum::serve(listener, app).await?;

    Ok(())
}
