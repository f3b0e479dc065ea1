use anyhow::{Error, Result, anyhow};

use crate::openai::{CompletionParams, Message, Role, completion};

/// Runs the next turn in chat by passing a transcript to the LLM for
/// the next response. Returns the assistant message, or an error when
/// the request fails or the response carries no content.
pub async fn chat(
    history: &[Message],
    params: &CompletionParams,
    api_hostname: &str,
    api_key: &str,
) -> Result<Message, Error> {
    let resp = completion(history, params, api_hostname, api_key).await?;

    let content = resp["choices"][0]["message"]["content"]
        .as_str()
        .ok_or(anyhow!("No message received. Resp:\n\n {}", resp))?;

    Ok(Message::new(Role::Assistant, content))
}
