//! Tradenote CLI - extract structured trade data from notification messages.

use clap::Parser;
use tradenote_cli::{commands, Cli, Command};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> tradenote_cli::Result<()> {
    // Local .env is optional; absence is fine
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Extract(args) => {
            let matched = commands::execute_extract(args).await?;
            if !matched {
                std::process::exit(1);
            }
        }
        Command::Schema => {
            commands::execute_schema()?;
        }
    }

    Ok(())
}
