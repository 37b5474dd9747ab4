//! Summary prompt construction.

use crate::{Result, VidsumError};

/// Transcripts shorter than this (in characters) are rejected.
pub const MIN_TRANSCRIPT_CHARS: usize = 20;

const MEDIUM_WORD_THRESHOLD: usize = 800;
const DETAILED_WORD_THRESHOLD: usize = 2500;

const KEY_POINT_SCALING: &str = "Scale the number of key points with the length of the transcript \
and never drop an important point to stay brief.";

/// How much detail the summary should carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryTier {
    Concise,
    Medium,
    Detailed,
}

impl SummaryTier {
    /// Counts strictly above a threshold move up a tier.
    pub fn for_word_count(word_count: usize) -> Self {
        if word_count > DETAILED_WORD_THRESHOLD {
            Self::Detailed
        } else if word_count > MEDIUM_WORD_THRESHOLD {
            Self::Medium
        } else {
            Self::Concise
        }
    }

    pub fn instructions(self) -> &'static str {
        match self {
            Self::Concise => "Write a concise summary of 4-6 sentences.",
            Self::Medium => {
                "Write a medium-length summary of 6-12 sentences that covers the context, \
the insights and every key point."
            }
            Self::Detailed => {
                "This is a long transcript. Write a detailed summary of 3-5 paragraphs that \
covers the main ideas, how the material is structured, important examples and the conclusions."
            }
        }
    }
}

/// Number of whitespace-delimited tokens.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Build the summary prompt for a flattened transcript.
pub fn build_summary_prompt(transcript: &str) -> Result<String> {
    if transcript.chars().count() < MIN_TRANSCRIPT_CHARS {
        return Err(VidsumError::Validation(
            "Transcript is too short or missing.".to_string(),
        ));
    }

    let word_count = count_words(transcript);
    let tier = SummaryTier::for_word_count(word_count);
    let instructions = format!("{} {}", tier.instructions(), KEY_POINT_SCALING);

    Ok(format!(
        "You are an expert summarizer of video transcripts.\n\
Reply with ONLY a valid JSON object. Do not use markdown, do not wrap the reply in code fences \
and do not add any explanation before or after it.\n\
\n\
The JSON object must have exactly this shape:\n\
{{\n  \"summary\": \"string\",\n  \"keyPoints\": [\"string\", \"string\", ...]\n}}\n\
\n\
Transcript length: {word_count} words.\n\
Instructions: {instructions}\n\
\n\
Transcript:\n\
---------------\n\
{transcript}\n\
---------------\n\
\n\
Reply with only the JSON object."
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn rejects_short_and_empty_transcripts() {
        for transcript in ["", "too short", "nineteen characters"] {
            let err = build_summary_prompt(transcript).unwrap_err();
            assert!(matches!(err, VidsumError::Validation(_)), "{transcript:?}");
        }
    }

    #[test]
    fn twenty_characters_is_enough() {
        assert!(build_summary_prompt("exactly twenty chars").is_ok());
    }

    #[test]
    fn counts_multibyte_characters_once() {
        // 19 characters, more than 20 bytes
        assert!(build_summary_prompt("ééééééééééééééééééé").is_err());
    }

    #[test]
    fn word_count_ignores_repeated_whitespace() {
        assert_eq!(count_words("  one\ttwo \n three  "), 3);
        assert_eq!(count_words(""), 0);
    }

    #[test]
    fn tier_boundaries_are_exclusive() {
        assert_eq!(SummaryTier::for_word_count(0), SummaryTier::Concise);
        assert_eq!(SummaryTier::for_word_count(800), SummaryTier::Concise);
        assert_eq!(SummaryTier::for_word_count(801), SummaryTier::Medium);
        assert_eq!(SummaryTier::for_word_count(2500), SummaryTier::Medium);
        assert_eq!(SummaryTier::for_word_count(2501), SummaryTier::Detailed);
    }

    #[test]
    fn prompt_embeds_tier_for_boundary_transcripts() {
        let at_800 = build_summary_prompt(&words(800)).unwrap();
        assert!(at_800.contains("Transcript length: 800 words."));
        assert!(at_800.contains(SummaryTier::Concise.instructions()));

        let at_2500 = build_summary_prompt(&words(2500)).unwrap();
        assert!(at_2500.contains("Transcript length: 2500 words."));
        assert!(at_2500.contains(SummaryTier::Medium.instructions()));

        let long = build_summary_prompt(&words(2501)).unwrap();
        assert!(long.contains(SummaryTier::Detailed.instructions()));
    }

    #[test]
    fn prompt_carries_output_contract_and_transcript() {
        let transcript = "the quick brown fox jumps over the lazy dog";
        let prompt = build_summary_prompt(transcript).unwrap();

        assert!(prompt.contains("\"keyPoints\": [\"string\", \"string\", ...]"));
        assert!(prompt.contains("\"summary\": \"string\""));
        assert!(prompt.contains("do not wrap the reply in code fences"));
        assert!(prompt.contains(KEY_POINT_SCALING));
        assert!(prompt.contains(&format!("---------------\n{transcript}\n---------------")));
    }

    #[test]
    fn prompt_is_deterministic() {
        let transcript = words(42);
        assert_eq!(
            build_summary_prompt(&transcript).unwrap(),
            build_summary_prompt(&transcript).unwrap()
        );
    }
}
