//! API routes module

pub mod webhook;

use std::sync::Arc;

use axum::{Router, routing::get};

use crate::api::state::AppState;

type SharedState = Arc<AppState>;

/// Liveness check
async fn index() -> &'static str {
    "Hello, this is the tripbot Telegram backend!"
}

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(index))
        // Telegram webhook
        .merge(webhook::router())
}
