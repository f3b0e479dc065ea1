//! Test utilities for integration tests
use std::sync::Arc;
use std::time::Duration;

use axum::{Router, body::Body};
use mockito::Matcher;

use tripbot::api::AppState;
use tripbot::api::app;
use tripbot::chat::Conversations;
use tripbot::core::AppConfig;
use tripbot::telegram::TelegramClient;

pub const BOT_TOKEN: &str = "123:test-token";
pub const FALLBACK: &str = "Sorry, there was an error. Please try again later.";
pub const SYSTEM: &str = "You are a travel sales assistant.";

pub fn test_config(openai_url: &str, telegram_url: &str) -> AppConfig {
    AppConfig {
        telegram_bot_token: String::from(BOT_TOKEN),
        telegram_api_hostname: telegram_url.to_string(),
        openai_api_hostname: openai_url.to_string(),
        openai_api_key: String::from("test-api-key"),
        openai_model: String::from("gpt-4"),
        system_message: String::from(SYSTEM),
        fallback_message: String::from(FALLBACK),
        completion_timeout: Duration::from_secs(5),
    }
}

/// Creates a test application router pointed at mock OpenAI and
/// Telegram servers. The shared state is returned so tests can look
/// at the stored transcripts.
pub fn test_app(openai_url: &str, telegram_url: &str) -> (Router, Arc<AppState>) {
    let telegram = TelegramClient::new(telegram_url, BOT_TOKEN).unwrap();
    let state = Arc::new(AppState::new(
        test_config(openai_url, telegram_url),
        Conversations::in_memory(),
        telegram,
    ));
    (app(Arc::clone(&state)), state)
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn completion_body(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1694268190,
        "model": "gpt-4",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
    .to_string()
}

/// Matches the sendMessage call whatever casing the client uses for
/// the method name, Telegram treats them the same.
pub fn send_path() -> Matcher {
    Matcher::Regex(format!("^/bot{}/(?i:sendMessage)$", BOT_TOKEN))
}

/// The `result` Telegram returns for a delivered message.
pub fn sent_message_body(chat_id: i64, text: &str) -> String {
    serde_json::json!({
        "ok": true,
        "result": {
            "message_id": 1,
            "date": 1704067200,
            "chat": {"id": chat_id, "type": "private", "first_name": "Test"},
            "from": {"id": 1, "is_bot": true, "first_name": "tripbot", "username": "tripbot"},
            "text": text
        }
    })
    .to_string()
}

pub fn text_update(update_id: i64, user_id: i64, chat_id: i64, text: &str) -> String {
    serde_json::json!({
        "update_id": update_id,
        "message": {
            "message_id": update_id,
            "date": 1704067200,
            "from": {"id": user_id, "is_bot": false, "first_name": "Test"},
            "chat": {"id": chat_id, "type": "private", "first_name": "Test"},
            "text": text
        }
    })
    .to_string()
}
