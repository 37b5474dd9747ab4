//! HTTP server for vidsum
//!
//! Routes `/health`, `/transcribe` and `/summarise` onto the caption and
//! summary pipeline.

pub mod error;
mod handlers;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;

use crate::captions::{CaptionSource, TranscriptFetcher};
use crate::config::Settings;
use crate::llm::{LlmProvider, Summarizer};
use crate::server::error::ErrorResponder;

pub use error::{ApiError, ErrorEnvelope};
pub use handlers::{SummariseResponse, TranscribeResponse};

/// Services shared by every request. Nothing in here is mutable.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: TranscriptFetcher,
    pub summarizer: Summarizer,
    pub responder: ErrorResponder,
    pub default_lang: String,
}

impl AppState {
    pub fn new(
        settings: &Settings,
        captions: Arc<dyn CaptionSource>,
        model: Arc<dyn LlmProvider>,
    ) -> Self {
        Self {
            fetcher: TranscriptFetcher::new(captions),
            summarizer: Summarizer::new(model),
            responder: ErrorResponder::new(
                settings.server.status_codes,
                settings.server.is_production(),
            ),
            default_lang: settings.captions.lang.clone(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/transcribe", post(handlers::transcribe))
        .route("/summarise", post(handlers::summarise))
        .with_state(state)
}

/// Serve on an already bound listener until Ctrl+C.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("running HTTP server")
}

/// Bind the configured host and port. Host names are resolved.
pub async fn bind(settings: &Settings) -> Result<TcpListener> {
    let host = settings.server.host.trim();
    let port = settings.server.port;
    TcpListener::bind((host, port))
        .await
        .with_context(|| format!("failed to bind {host}:{port}"))
}

/// Bind the configured address and serve.
pub async fn run(settings: &Settings, state: AppState) -> Result<()> {
    let listener = bind(settings).await?;
    let addr = listener
        .local_addr()
        .context("reading bound listen address")?;

    tracing::info!(
        "vidsum listening on http://{} ({})",
        addr,
        settings.server.environment
    );
    serve(listener, state).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
