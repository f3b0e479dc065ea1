use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::chat::{Conversations, UserId, generate_response};
use crate::core::AppConfig;

/// Runs the same turn logic as the webhook against the configured
/// completion API, printing replies instead of sending them to
/// Telegram.
pub async fn run(user_id: UserId) -> Result<()> {
    let config = AppConfig::from_env()?;
    let conversations = Conversations::in_memory();
    let mut rl = DefaultEditor::new()?;

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                let text = line.trim();
                if text.is_empty() {
                    continue;
                }
                let reply = generate_response(&conversations, &config, user_id, text).await?;
                println!("{}", reply);
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
