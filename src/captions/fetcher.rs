use std::sync::Arc;

use anyhow::Result;

use crate::captions::{CaptionSource, SubtitleFragment, VideoDetails};
use crate::VidsumError;

/// Front door to a [`CaptionSource`].
///
/// Subtitle failures are logged and swallowed (an empty track is rejected
/// later as a too-short transcript); detail failures are logged and returned.
#[derive(Clone)]
pub struct TranscriptFetcher {
    source: Arc<dyn CaptionSource>,
}

impl TranscriptFetcher {
    pub fn new(source: Arc<dyn CaptionSource>) -> Self {
        Self { source }
    }

    pub async fn fetch_subtitles(&self, video_id: &str, lang: &str) -> Vec<SubtitleFragment> {
        match self.source.subtitles(video_id, lang).await {
            Ok(subtitles) => subtitles,
            Err(e) => {
                tracing::error!("Error fetching subtitles for {}: {:#}", video_id, e);
                Vec::new()
            }
        }
    }

    pub async fn fetch_video_details(
        &self,
        video_id: &str,
        lang: &str,
    ) -> Result<Option<VideoDetails>> {
        self.source
            .video_details(video_id, lang)
            .await
            .map_err(|e| {
                tracing::error!("Error fetching video details for {}: {:#}", video_id, e);
                e.context(VidsumError::UpstreamFetch(
                    "Failed to fetch video details".to_string(),
                ))
            })
    }
}

/// Join caption text into a single space-separated transcript.
pub fn flatten_transcript(subtitles: &[SubtitleFragment]) -> String {
    subtitles
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
