use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::chat::UserId;

/// One async mutex per user. Holding the guard serializes turns for
/// that user while other users proceed independently. Entries are
/// never removed, same as the transcripts they guard.
#[derive(Default)]
pub struct UserLocks {
    locks: Mutex<HashMap<UserId, Arc<Mutex<()>>>>,
}

impl UserLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, user_id: UserId) -> OwnedMutexGuard<()> {
        // Only hold the map lock long enough to find the user's mutex
        let lock = {
            let mut locks = self.locks.lock().await;
            Arc::clone(locks.entry(user_id).or_default())
        };
        lock.lock_owned().await
    }
}
