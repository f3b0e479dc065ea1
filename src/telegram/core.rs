//! Telegram client using teloxide.

use anyhow::{Error, Result, anyhow};
use reqwest::Url;
use teloxide::RequestError;
use teloxide::prelude::*;
use teloxide::types::{Update, UpdateKind};

/// A text message ready to be answered
#[derive(Debug, PartialEq)]
pub struct IncomingMessage {
    pub user_id: crate::chat::UserId,
    pub chat_id: i64,
    pub text: String,
}

/// Returns the sender, chat and trimmed text when the update is a
/// plain text message from a user. Edits, channel posts and media
/// are skipped.
pub fn incoming_message(update: &Update) -> Option<IncomingMessage> {
    let UpdateKind::Message(message) = &update.kind else {
        return None;
    };
    let user = message.from.as_ref()?;
    let text = message.text()?.trim();
    if text.is_empty() {
        return None;
    }

    Some(IncomingMessage {
        user_id: user.id.0 as i64,
        chat_id: message.chat.id.0,
        text: text.to_string(),
    })
}

// Network errors carry the request URL, which contains the bot token,
// so only their kind is kept.
fn redact(err: RequestError) -> Error {
    match err {
        RequestError::Network(e) => anyhow!(
            "Telegram network error (timeout: {}, connect: {})",
            e.is_timeout(),
            e.is_connect()
        ),
        other => anyhow!(other),
    }
}

/// Telegram API client.
pub struct TelegramClient {
    bot: Bot,
}

impl TelegramClient {
    pub fn new(api_hostname: &str, bot_token: &str) -> Result<Self> {
        let api_url = Url::parse(api_hostname)?;
        Ok(Self {
            bot: Bot::new(bot_token).set_api_url(api_url),
        })
    }

    /// Sends a plain text message to the chat.
    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), Error> {
        self.bot
            .send_message(ChatId(chat_id), text)
            .await
            .map_err(redact)?;
        Ok(())
    }

    /// Registers the URL Telegram should deliver updates to.
    pub async fn set_webhook(&self, url: &str) -> Result<(), Error> {
        let url = Url::parse(url)?;
        self.bot.set_webhook(url).await.map_err(redact)?;
        Ok(())
    }
}
