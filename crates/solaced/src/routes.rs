//! Route handlers for solaced.
//!
//! `/get` takes the raw `userMessage` query parameter and returns the engine's
//! reply as plain text. Escaping is left to the page that renders it.

use crate::server::AppState;
use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

type AppStateArc = Arc<AppState>;

const INDEX_HTML: &str = include_str!("../static/index.html");

// ============================================================================
// Page Routes
// ============================================================================

pub fn page_routes() -> Router<AppStateArc> {
    Router::new().route("/", get(index))
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

// ============================================================================
// Chat Routes
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct ChatQuery {
    #[serde(rename = "userMessage", default)]
    pub user_message: Option<String>,
}

pub fn chat_routes() -> Router<AppStateArc> {
    Router::new().route("/get", get(chat_reply))
}

async fn chat_reply(State(state): State<AppStateArc>, Query(query): Query<ChatQuery>) -> String {
    // A missing parameter is just an empty utterance
    let utterance = query.user_message.unwrap_or_default();
    info!("[Q]  {} chars", utterance.chars().count());

    state.engine.respond(&utterance)
}

// ============================================================================
// Health Routes
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub corpus_pairs: usize,
    pub rules: Vec<String>,
    pub threshold: f64,
}

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/health", get(health_check))
}

async fn health_check(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    let engine = &state.engine;

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        corpus_pairs: engine.matcher().corpus().len(),
        rules: engine.router().rules().iter().map(|r| r.name().to_string()).collect(),
        threshold: engine.threshold(),
    })
}
