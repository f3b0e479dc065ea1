//! Per-user conversation state and the turn logic that drives it.
use std::sync::Arc;

use anyhow::Result;

use crate::ai::chat::Transcript;

mod locks;
mod store;
mod turn;

pub use locks::UserLocks;
pub use store::{ConversationStore, InMemoryStore};
pub use turn::generate_response;

/// Telegram user id
pub type UserId = i64;

/// All conversations for the process. Created once at startup and
/// shared by every request.
pub struct Conversations {
    store: Arc<dyn ConversationStore>,
    locks: UserLocks,
}

impl Conversations {
    pub fn new(store: Arc<dyn ConversationStore>) -> Self {
        Self {
            store,
            locks: UserLocks::new(),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryStore::new()))
    }

    pub async fn transcript(&self, user_id: UserId) -> Result<Option<Transcript>> {
        self.store.get(user_id).await
    }
}

impl Default for Conversations {
    fn default() -> Self {
        Self::in_memory()
    }
}
