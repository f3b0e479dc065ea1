//! Public types for the webhook API
use serde::{Deserialize, Serialize};

/// Acknowledgement returned for every delivery, whatever happened
/// while handling it. Telegram redelivers updates that get an error
/// status so failures are only reported through the logs.
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct WebhookAck {
    pub status: String,
}

impl WebhookAck {
    pub fn ok() -> Self {
        Self {
            status: String::from("ok"),
        }
    }
}
