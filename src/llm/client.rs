use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::config::Settings;
use crate::llm::gemini::GeminiClient;

/// A hosted chat model that turns a prompt into raw reply text.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// Build an LLM provider from runtime settings.
pub fn build_provider(settings: &Settings) -> Result<Arc<dyn LlmProvider>> {
    match settings.llm.provider.to_lowercase().as_str() {
        "gemini" => Ok(Arc::new(GeminiClient::from_settings(settings)?)),
        other => anyhow::bail!(
            "Unsupported llm.provider '{}'. Supported providers: gemini",
            other
        ),
    }
}
