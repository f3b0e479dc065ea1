//! Telegram side of the bot: reading updates and sending replies.
mod core;

pub use self::core::{IncomingMessage, TelegramClient, incoming_message};
pub use teloxide::types::Update;
