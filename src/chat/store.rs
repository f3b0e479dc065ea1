//! Storage for conversation transcripts keyed by user.
use std::collections::HashMap;

use anyhow::{Result, bail};
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::ai::chat::Transcript;
use crate::chat::UserId;
use crate::openai::Message;

/// Key-value interface over transcripts so the in-memory store can be
/// swapped for an external one without changing call sites.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Returns the user's transcript, creating one that holds only the
    /// system message if the user hasn't been seen before.
    async fn get_or_create(&self, user_id: UserId, system_message: &str) -> Result<Transcript>;

    /// Appends a message to an existing transcript.
    async fn append(&self, user_id: UserId, msg: Message) -> Result<()>;

    async fn get(&self, user_id: UserId) -> Result<Option<Transcript>>;
}

/// Process-wide transcripts held in memory. Nothing is ever evicted.
#[derive(Default)]
pub struct InMemoryStore {
    transcripts: RwLock<HashMap<UserId, Transcript>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConversationStore for InMemoryStore {
    async fn get_or_create(&self, user_id: UserId, system_message: &str) -> Result<Transcript> {
        if let Some(transcript) = self.transcripts.read().await.get(&user_id) {
            return Ok(transcript.clone());
        }

        let mut transcripts = self.transcripts.write().await;
        let transcript = transcripts.entry(user_id).or_insert_with(|| {
            tracing::debug!(user_id, "Starting new conversation");
            Transcript::new(system_message)
        });
        Ok(transcript.clone())
    }

    async fn append(&self, user_id: UserId, msg: Message) -> Result<()> {
        let mut transcripts = self.transcripts.write().await;
        match transcripts.get_mut(&user_id) {
            Some(transcript) => {
                transcript.push(msg);
                Ok(())
            }
            None => bail!("No conversation for user {}", user_id),
        }
    }

    async fn get(&self, user_id: UserId) -> Result<Option<Transcript>> {
        Ok(self.transcripts.read().await.get(&user_id).cloned())
    }
}
