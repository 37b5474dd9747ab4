//! vidsum - Summarise video captions with a hosted LLM
//!
//! Entry point for the vidsum server and CLI.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vidsum::cli::{Cli, Commands};
use vidsum::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Completions { shell } => {
            vidsum::cli::completions::print(shell);
        }
        command => {
            // Load configuration only for runtime commands.
            let settings = Settings::load()?;

            match command {
                Commands::Serve { host, port } => {
                    vidsum::cli::commands::serve(&settings, host, port).await?;
                }
                Commands::Summarise { video_id, lang } => {
                    vidsum::cli::commands::summarise(&settings, &video_id, lang).await?;
                }
                Commands::Transcribe { video_id, lang } => {
                    vidsum::cli::commands::transcribe(&settings, &video_id, lang).await?;
                }
                Commands::Config(config_cmd) => {
                    vidsum::cli::commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } => unreachable!(),
            }
        }
    }

    Ok(())
}
