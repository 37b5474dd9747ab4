use std::sync::Arc;

use anyhow::Result;

use crate::llm::client::LlmProvider;
use crate::llm::parser::{parse_summary, SummaryResult};
use crate::llm::prompts::build_summary_prompt;
use crate::VidsumError;

/// Transcript in, structured summary out.
#[derive(Clone)]
pub struct Summarizer {
    model: Arc<dyn LlmProvider>,
}

impl Summarizer {
    pub fn new(model: Arc<dyn LlmProvider>) -> Self {
        Self { model }
    }

    pub async fn summarize(&self, transcript: &str) -> Result<SummaryResult> {
        let prompt = build_summary_prompt(transcript)?;

        let raw = self.model.complete(&prompt).await.map_err(|e| {
            e.context(VidsumError::UpstreamModel(
                "Summarization model request failed".to_string(),
            ))
        })?;

        Ok(parse_summary(&raw)?)
    }
}
