use crate::chat::Conversations;
use crate::core::AppConfig;
use crate::telegram::TelegramClient;

pub struct AppState {
    pub config: AppConfig,
    // Every user's transcript for the lifetime of the process
    pub conversations: Conversations,
    pub telegram: TelegramClient,
}

impl AppState {
    pub fn new(config: AppConfig, conversations: Conversations, telegram: TelegramClient) -> Self {
        Self {
            config,
            conversations,
            telegram,
        }
    }
}
