//! Captions module for vidsum
//!
//! Fetches subtitle tracks and video metadata from the captions provider.

mod fetcher;
mod youtube;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use fetcher::{flatten_transcript, TranscriptFetcher};
pub use youtube::YoutubeCaptions;

/// A single caption cue, in seconds from the start of the video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubtitleFragment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

/// Video metadata as returned to `/transcribe` callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetails {
    pub video_id: String,
    pub title: String,
    pub author: String,
    pub description: String,
    pub view_count: String,
    pub subtitles: Vec<SubtitleFragment>,
}

/// Source of captions and metadata.
#[async_trait]
pub trait CaptionSource: Send + Sync {
    /// Caption cues for `video_id` in `lang`, in chronological order.
    async fn subtitles(&self, video_id: &str, lang: &str) -> Result<Vec<SubtitleFragment>>;

    /// Metadata for `video_id`, or `None` when the provider has nothing for it.
    async fn video_details(&self, video_id: &str, lang: &str) -> Result<Option<VideoDetails>>;
}
