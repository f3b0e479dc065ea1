use std::env;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};

use crate::ai::prompt::{FALLBACK_REPLY, SYSTEM_PROMPT};
use crate::openai::CompletionParams;

/// Loads variables from a `.env` file in the working directory or one
/// of its parents. Returns whether a file was found, a missing file is
/// not an error. Variables already set in the environment win.
pub fn load_dotenv() -> Result<bool> {
    found(dotenvy::dotenv().map(|_| ()))
}

pub fn load_dotenv_from(path: &Path) -> Result<bool> {
    found(dotenvy::from_path(path))
}

fn found(result: Result<(), dotenvy::Error>) -> Result<bool> {
    match result {
        Ok(()) => Ok(true),
        Err(e) if e.not_found() => Ok(false),
        Err(e) => Err(e.into()),
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub telegram_bot_token: String,
    pub telegram_api_hostname: String,
    pub openai_api_hostname: String,
    pub openai_api_key: String,
    pub openai_model: String,
    pub system_message: String,
    pub fallback_message: String,
    pub completion_timeout: Duration,
}

impl AppConfig {
    /// Load the config from environment variables. The bot token and
    /// the OpenAI key are required, everything else has a default.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required =
            |key: &str| var(key).ok_or_else(|| anyhow!("Missing env var {}", key));

        let telegram_bot_token = required("TELEGRAM_BOT_TOKEN")?;
        let openai_api_key = required("OPENAI_API_KEY")?;
        let telegram_api_hostname = var("TRIPBOT_TELEGRAM_API_HOSTNAME")
            .unwrap_or_else(|| "https://api.telegram.org".to_string());
        let openai_api_hostname = var("TRIPBOT_OPENAI_API_HOSTNAME")
            .unwrap_or_else(|| "https://api.openai.com".to_string());
        let openai_model = var("TRIPBOT_OPENAI_MODEL").unwrap_or_else(|| "gpt-4".to_string());
        let system_message =
            var("TRIPBOT_SYSTEM_MESSAGE").unwrap_or_else(|| SYSTEM_PROMPT.to_string());
        let fallback_message =
            var("TRIPBOT_FALLBACK_MESSAGE").unwrap_or_else(|| FALLBACK_REPLY.to_string());
        let completion_timeout = match var("TRIPBOT_COMPLETION_TIMEOUT_SECS") {
            Some(secs) => Duration::from_secs(secs.trim().parse().with_context(|| {
                format!("Invalid TRIPBOT_COMPLETION_TIMEOUT_SECS: {}", secs)
            })?),
            None => CompletionParams::default().timeout,
        };

        Ok(Self {
            telegram_bot_token,
            telegram_api_hostname,
            openai_api_hostname,
            openai_api_key,
            openai_model,
            system_message,
            fallback_message,
            completion_timeout,
        })
    }

    pub fn completion_params(&self) -> CompletionParams {
        CompletionParams {
            model: self.openai_model.clone(),
            timeout: self.completion_timeout,
            ..CompletionParams::default()
        }
    }
}
