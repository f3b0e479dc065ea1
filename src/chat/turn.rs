use anyhow::{Error, Result};

use crate::chat::{Conversations, UserId};
use crate::core::AppConfig;
use crate::openai::{Message, Role, chat};

/// Runs one turn of the user's conversation and returns the text to
/// send back.
///
/// The user message is stored before the completion request is made
/// and is kept even if the request fails. On failure no assistant
/// message is stored and the configured fallback text is returned
/// instead. Turns for the same user are serialized so the transcript
/// always alternates between user and assistant messages (apart from
/// failed turns).
///
/// Only store errors are returned, completion errors are logged.
pub async fn generate_response(
    conversations: &Conversations,
    config: &AppConfig,
    user_id: UserId,
    text: &str,
) -> Result<String, Error> {
    let _guard = conversations.locks.acquire(user_id).await;
    let store = &conversations.store;

    let mut transcript = store.get_or_create(user_id, &config.system_message).await?;
    let user_msg = Message::new(Role::User, text);
    store.append(user_id, user_msg.clone()).await?;
    transcript.push(user_msg);

    let reply = chat(
        transcript.as_slice(),
        &config.completion_params(),
        &config.openai_api_hostname,
        &config.openai_api_key,
    )
    .await;

    match reply {
        Ok(msg) => {
            let content = msg.content.clone();
            store.append(user_id, msg).await?;
            tracing::debug!(user_id, history_len = transcript.len() + 1, "Completed turn");
            Ok(content)
        }
        Err(e) => {
            tracing::error!(user_id, error = %e, "OpenAI API error");
            Ok(config.fallback_message.clone())
        }
    }
}
