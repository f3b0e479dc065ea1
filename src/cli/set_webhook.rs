use anyhow::Result;

use crate::core::AppConfig;
use crate::telegram::TelegramClient;

pub async fn run(url: &str) -> Result<()> {
    let config = AppConfig::from_env()?;
    let telegram = TelegramClient::new(&config.telegram_api_hostname, &config.telegram_bot_token)?;
    telegram.set_webhook(url).await?;
    println!("Webhook set to {}", url);
    Ok(())
}
