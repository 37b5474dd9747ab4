//! CLI command implementations

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::captions::{flatten_transcript, CaptionSource, TranscriptFetcher, YoutubeCaptions};
use crate::cli::ConfigCommand;
use crate::config::Settings;
use crate::llm::{build_provider, Summarizer};
use crate::server::{self, AppState};

/// Run the HTTP server
pub async fn serve(settings: &Settings, host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut settings = settings.clone();
    if let Some(host) = host {
        settings.server.host = host;
    }
    if let Some(port) = port {
        settings.server.port = port;
    }

    let model = build_provider(&settings)?;
    let captions: Arc<dyn CaptionSource> = Arc::new(YoutubeCaptions::new()?);
    let state = AppState::new(&settings, captions, model);

    server::run(&settings, state).await
}

/// Summarise one video and print the result
pub async fn summarise(settings: &Settings, video_id: &str, lang: Option<String>) -> Result<()> {
    // Fail on missing credentials before touching the network.
    let summarizer = Summarizer::new(build_provider(settings)?);
    let fetcher = TranscriptFetcher::new(Arc::new(YoutubeCaptions::new()?));
    let lang = lang.unwrap_or_else(|| settings.captions.lang.clone());

    let subtitles = fetcher.fetch_subtitles(video_id, &lang).await;
    let transcript = flatten_transcript(&subtitles);
    let summary = summarizer.summarize(&transcript).await?;

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

/// Print details and captions for one video
pub async fn transcribe(settings: &Settings, video_id: &str, lang: Option<String>) -> Result<()> {
    let fetcher = TranscriptFetcher::new(Arc::new(YoutubeCaptions::new()?));
    let lang = lang.unwrap_or_else(|| settings.captions.lang.clone());

    let details = fetcher
        .fetch_video_details(video_id, &lang)
        .await?
        .context("Video details could not be fetched")?;

    println!("{}", serde_json::to_string_pretty(&details)?);
    Ok(())
}

pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(settings)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}
