use anyhow::Result;
use tripbot::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
