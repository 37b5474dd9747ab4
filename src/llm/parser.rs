//! Structured parsing of model replies.

use serde::{Deserialize, Serialize};

use crate::{Result, VidsumError};

/// Summary returned by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResult {
    pub summary: String,
    pub key_points: Vec<String>,
}

/// Parse a raw model reply into a [`SummaryResult`].
///
/// A single surrounding markdown fence is tolerated; anything else around the
/// JSON object is not.
pub fn parse_summary(raw: &str) -> Result<SummaryResult> {
    let body = strip_code_fence(raw);
    serde_json::from_str(body).map_err(|e| {
        VidsumError::Schema(format!(
            "Model reply did not match the expected summary schema: {e}"
        ))
    })
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(inner) = trimmed
        .strip_prefix("```")
        .and_then(|rest| rest.strip_suffix("```"))
    else {
        return trimmed;
    };

    // Drop the info string (e.g. "json"), with or without a line break after it.
    inner
        .trim_start()
        .trim_start_matches(|c: char| c.is_ascii_alphabetic())
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SummaryResult {
        SummaryResult {
            summary: "A talk about Rust.".to_string(),
            key_points: vec!["Ownership".to_string(), "Borrowing".to_string()],
        }
    }

    fn assert_schema_error(raw: &str) {
        match parse_summary(raw) {
            Err(VidsumError::Schema(_)) => {}
            other => panic!("expected schema error for {raw:?}, got {other:?}"),
        }
    }

    #[test]
    fn parses_rendered_summary_back() {
        let rendered = serde_json::to_string(&sample()).unwrap();
        assert!(rendered.contains("\"keyPoints\""));
        assert_eq!(parse_summary(&rendered).unwrap(), sample());
    }

    #[test]
    fn accepts_fenced_reply() {
        let raw = "```json\n{\"summary\": \"A talk about Rust.\", \"keyPoints\": [\"Ownership\", \"Borrowing\"]}\n```";
        assert_eq!(parse_summary(raw).unwrap(), sample());

        let bare_fence = "```\n{\"summary\": \"s\", \"keyPoints\": []}\n```";
        assert_eq!(parse_summary(bare_fence).unwrap().summary, "s");
    }

    #[test]
    fn accepts_single_line_fenced_reply() {
        let raw = "```json{\"summary\": \"s\", \"keyPoints\": [\"a\"]}```";
        assert_eq!(parse_summary(raw).unwrap().key_points, vec!["a"]);

        let spaced = "```JSON {\"summary\": \"s\", \"keyPoints\": []}```";
        assert_eq!(parse_summary(spaced).unwrap().summary, "s");
    }

    #[test]
    fn ignores_unknown_fields() {
        let raw = r#"{"summary": "s", "keyPoints": ["a"], "title": "extra"}"#;
        assert_eq!(parse_summary(raw).unwrap().key_points, vec!["a"]);
    }

    #[test]
    fn rejects_non_json() {
        assert_schema_error("Here is your summary: it was good.");
        assert_schema_error("");
    }

    #[test]
    fn rejects_text_around_json() {
        assert_schema_error(r#"Sure! {"summary": "s", "keyPoints": []}"#);
    }

    #[test]
    fn rejects_missing_key_points() {
        assert_schema_error(r#"{"summary": "s"}"#);
    }

    #[test]
    fn rejects_non_string_key_point() {
        assert_schema_error(r#"{"summary": "s", "keyPoints": ["a", 2]}"#);
    }

    #[test]
    fn rejects_non_string_summary() {
        assert_schema_error(r#"{"summary": null, "keyPoints": []}"#);
        assert_schema_error(r#"["summary", "keyPoints"]"#);
    }
}
