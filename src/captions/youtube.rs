use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use yt_transcript_rs::YouTubeTranscriptApi;

use crate::captions::{CaptionSource, SubtitleFragment, VideoDetails};

/// YouTube captions through `yt-transcript-rs`.
pub struct YoutubeCaptions {
    api: YouTubeTranscriptApi,
}

impl YoutubeCaptions {
    pub fn new() -> Result<Self> {
        let api = YouTubeTranscriptApi::new(None, None, None)
            .map_err(|e| anyhow!("Failed to initialise YouTube transcript client: {e}"))?;
        Ok(Self { api })
    }
}

#[async_trait]
impl CaptionSource for YoutubeCaptions {
    async fn subtitles(&self, video_id: &str, lang: &str) -> Result<Vec<SubtitleFragment>> {
        let transcript = self
            .api
            .fetch_transcript(video_id, &[lang], false)
            .await
            .map_err(|e| anyhow!("{e}"))
            .with_context(|| format!("Failed to fetch '{lang}' captions for {video_id}"))?;

        Ok(transcript
            .parts()
            .iter()
            .map(|snippet| SubtitleFragment {
                text: snippet.text.clone(),
                start: snippet.start,
                duration: snippet.duration,
            })
            .collect())
    }

    async fn video_details(&self, video_id: &str, lang: &str) -> Result<Option<VideoDetails>> {
        let details = self
            .api
            .fetch_video_details(video_id)
            .await
            .map_err(|e| anyhow!("{e}"))
            .with_context(|| format!("Failed to fetch details for {video_id}"))?;

        // Videos without a caption track still have details.
        let subtitles = match self.subtitles(video_id, lang).await {
            Ok(subtitles) => subtitles,
            Err(e) => {
                tracing::warn!("No '{}' captions for {}: {:#}", lang, video_id, e);
                Vec::new()
            }
        };

        Ok(Some(VideoDetails {
            video_id: video_id.to_string(),
            title: details.title,
            author: details.author,
            description: details.short_description,
            view_count: details.view_count,
            subtitles,
        }))
    }
}
