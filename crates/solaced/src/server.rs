//! HTTP server for solaced

use crate::routes;
use anyhow::Result;
use axum::Router;
use solace_shared::DialogueEngine;
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Default bind address
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Application state shared across handlers
///
/// The engine is fully trained before the state exists, and is never mutated.
pub struct AppState {
    pub engine: DialogueEngine,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(engine: DialogueEngine) -> Self {
        Self {
            engine,
            start_time: Instant::now(),
        }
    }
}

/// Build the application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::page_routes())
        .merge(routes::chat_routes())
        .merge(routes::health_routes())
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server
pub async fn run(state: AppState, addr: &str) -> Result<()> {
    let app = app(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("  Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutting down gracefully");
    }
}
