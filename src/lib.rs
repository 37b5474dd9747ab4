//! vidsum - Summarise video captions with a hosted LLM
//!
//! Fetches the captions of a video, flattens them into a transcript and asks a
//! chat model for a short summary plus key points. Served over HTTP or run
//! once from the command line.

pub mod captions;
pub mod cli;
pub mod config;
pub mod llm;
pub mod server;

use thiserror::Error;

/// Main error type for vidsum
///
/// Each variant is a failure kind. Upstream errors carry one as anyhow context
/// so the HTTP layer can classify any failure by downcasting.
#[derive(Error, Debug)]
pub enum VidsumError {
    #[error("{0}")]
    MissingInput(String),

    #[error("{0}")]
    UpstreamFetch(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    UpstreamModel(String),

    #[error("{0}")]
    Schema(String),
}

pub type Result<T> = std::result::Result<T, VidsumError>;

