//! Chat models shared across the bot.
pub mod models;

pub use models::Transcript;
