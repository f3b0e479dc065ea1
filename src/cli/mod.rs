use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod chat;
pub mod serve;
pub mod set_webhook;

use crate::api::init_tracing;
use crate::chat::UserId;
use crate::core::load_dotenv;

#[derive(Subcommand)]
enum Command {
    /// Run the webhook server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "5000")]
        port: String,
    },
    /// Chat with the bot in the terminal instead of Telegram
    Chat {
        /// User id the local conversation is stored under
        #[arg(long, default_value = "0")]
        user_id: UserId,
    },
    /// Register the public webhook URL with Telegram
    SetWebhook {
        /// Public URL of the webhook, e.g. https://example.com/webhook
        #[arg(long)]
        url: String,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    // Loaded before tracing so a `RUST_LOG` set in `.env` applies
    let dotenv = load_dotenv();
    init_tracing();
    match dotenv {
        Ok(true) => tracing::debug!("Loaded .env"),
        Ok(false) => {}
        Err(e) => tracing::warn!(error = %e, "Failed to load .env"),
    }

    // Handle each sub command
    match args.command {
        Some(Command::Serve { host, port }) => {
            serve::run(host, port).await?;
        }
        Some(Command::Chat { user_id }) => {
            chat::run(user_id).await?;
        }
        Some(Command::SetWebhook { url }) => {
            set_webhook::run(&url).await?;
        }
        None => {}
    }

    Ok(())
}
