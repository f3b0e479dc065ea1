//! Router for the webhook API

use std::sync::Arc;

use axum::{Json, Router, body::Bytes, extract::DefaultBodyLimit, extract::State};

use super::public::WebhookAck;
use crate::api::state::AppState;
use crate::chat::generate_response;
use crate::telegram::{Update, incoming_message};

type SharedState = Arc<AppState>;

/// Answer a single update: run the turn and send the reply. Every
/// failure is logged and swallowed here.
async fn process_update(state: &AppState, update: Update) {
    let Some(incoming) = incoming_message(&update) else {
        tracing::debug!(update_id = ?update.id, "Ignoring update without text");
        return;
    };

    let reply = match generate_response(
        &state.conversations,
        &state.config,
        incoming.user_id,
        &incoming.text,
    )
    .await
    {
        Ok(reply) => reply,
        Err(e) => {
            tracing::error!(user_id = incoming.user_id, error = %e, "Handler error");
            return;
        }
    };

    if let Err(e) = state.telegram.send_message(incoming.chat_id, &reply).await {
        tracing::error!(
            user_id = incoming.user_id,
            chat_id = incoming.chat_id,
            error = %e,
            "Failed to send reply"
        );
    }
}

/// Handle updates delivered by Telegram. The body is parsed by hand
/// rather than with the `Json` extractor so malformed payloads are
/// still acknowledged.
async fn telegram_webhook(State(state): State<SharedState>, body: Bytes) -> Json<WebhookAck> {
    match serde_json::from_slice::<Update>(&body) {
        Ok(update) => process_update(&state, update).await,
        Err(e) => tracing::error!(error = %e, "Webhook error"),
    }
    Json(WebhookAck::ok())
}

/// Create the webhook router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/webhook", axum::routing::post(telegram_webhook))
        // Oversized updates must still get an acknowledgement instead
        // of a 413 from the body extractor
        .layer(DefaultBodyLimit::disable())
}
