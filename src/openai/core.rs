use std::time::Duration;

use anyhow::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "system")]
    System,
    #[serde(rename = "assistant")]
    Assistant,
    #[serde(rename = "user")]
    User,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Self {
        Message {
            role,
            content: content.to_string(),
        }
    }
}

/// Fixed sampling parameters sent with every completion request.
#[derive(Clone, Debug)]
pub struct CompletionParams {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl Default for CompletionParams {
    fn default() -> Self {
        Self {
            model: String::from("gpt-4"),
            temperature: 0.7,
            max_tokens: 2000,
            timeout: Duration::from_secs(60 * 10),
        }
    }
}

/// Sends the messages to an OpenAI compatible chat completions
/// endpoint and returns the raw JSON response. Non-2xx responses are
/// returned as errors.
pub async fn completion(
    messages: &[Message],
    params: &CompletionParams,
    api_hostname: &str,
    api_key: &str,
) -> Result<Value, Error> {
    let payload = json!({
        "model": params.model,
        "messages": messages,
        "temperature": params.temperature,
        "max_tokens": params.max_tokens,
    });
    let url = format!("{}/v1/chat/completions", api_hostname.trim_end_matches("/"));
    let response = reqwest::Client::new()
        .post(url)
        .bearer_auth(api_key)
        .header("Content-Type", "application/json")
        .timeout(params.timeout)
        .json(&payload)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(response)
}
