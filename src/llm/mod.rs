//! LLM module for vidsum
//!
//! Prompt construction, the Gemini client and strict parsing of its replies.

mod client;
mod gemini;
mod parser;
mod prompts;
mod summarizer;

pub use client::{build_provider, LlmProvider};
pub use gemini::GeminiClient;
pub use parser::{parse_summary, SummaryResult};
pub use prompts::{build_summary_prompt, count_words, SummaryTier, MIN_TRANSCRIPT_CHARS};
pub use summarizer::Summarizer;
