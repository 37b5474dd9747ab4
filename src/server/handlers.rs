use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::{FromRequest, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use axum::{Form, Json};
use serde::Serialize;
use serde_json::{json, Value};

use crate::captions::{flatten_transcript, VideoDetails};
use crate::llm::SummaryResult;
use crate::server::error::ApiError;
use crate::server::AppState;
use crate::VidsumError;

type ApiResult<T> = std::result::Result<Json<T>, ApiError>;

#[derive(Debug, Serialize)]
pub struct TranscribeResponse {
    // Misspelled on the wire; clients depend on it.
    #[serde(rename = "videoDetials")]
    pub video_details: VideoDetails,
}

#[derive(Debug, Serialize)]
pub struct SummariseResponse {
    pub summary: SummaryResult,
}

/// Target of a `/transcribe` or `/summarise` request.
#[derive(Debug)]
struct VideoRequest {
    video_id: String,
    lang: Option<String>,
}

impl VideoRequest {
    /// Read a form-encoded or JSON body, picked by `Content-Type`.
    async fn extract(request: Request) -> crate::Result<Self> {
        if is_form(request.headers()) {
            let Form(fields) = Form::<HashMap<String, String>>::from_request(request, &())
                .await
                .map_err(|e| {
                    VidsumError::MissingInput(format!(
                        "Request body is not a valid form: {}",
                        e.body_text()
                    ))
                })?;
            return Self::from_value(&json!(fields));
        }

        let body = Bytes::from_request(request, &()).await.map_err(|e| {
            VidsumError::MissingInput(format!("Failed to read request body: {}", e.body_text()))
        })?;
        Self::parse(&body)
    }

    /// An empty body counts as `{}`.
    fn parse(body: &[u8]) -> crate::Result<Self> {
        let value: Value = if body.iter().all(u8::is_ascii_whitespace) {
            json!({})
        } else {
            serde_json::from_slice(body).map_err(|e| {
                VidsumError::MissingInput(format!("Request body is not valid JSON: {e}"))
            })?
        };
        Self::from_value(&value)
    }

    fn from_value(value: &Value) -> crate::Result<Self> {
        let video_id = value
            .get("videoId")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                VidsumError::MissingInput("Video ID isn't provided or does not exist".to_string())
            })?;

        let lang = value
            .get("lang")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|lang| !lang.is_empty())
            .map(str::to_string);

        Ok(Self {
            video_id: video_id.to_string(),
            lang,
        })
    }
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| {
            value
                .trim_start()
                .to_ascii_lowercase()
                .starts_with("application/x-www-form-urlencoded")
        })
}

pub async fn health() -> Json<Value> {
    Json(json!({ "hello": "world" }))
}

pub async fn transcribe(
    State(state): State<AppState>,
    request: Request,
) -> ApiResult<TranscribeResponse> {
    let result = transcribe_video(&state, request).await;
    respond(&state, "/transcribe", result)
}

pub async fn summarise(
    State(state): State<AppState>,
    request: Request,
) -> ApiResult<SummariseResponse> {
    let result = summarise_video(&state, request).await;
    respond(&state, "/summarise", result)
}

async fn transcribe_video(state: &AppState, request: Request) -> anyhow::Result<TranscribeResponse> {
    let request = VideoRequest::extract(request).await?;
    let lang = request.lang.as_deref().unwrap_or(&state.default_lang);

    let video_details = state
        .fetcher
        .fetch_video_details(&request.video_id, lang)
        .await?
        .ok_or_else(|| {
            VidsumError::UpstreamFetch("Video details could not be fetched".to_string())
        })?;

    tracing::info!("Fetched details for {}", request.video_id);
    Ok(TranscribeResponse { video_details })
}

async fn summarise_video(state: &AppState, request: Request) -> anyhow::Result<SummariseResponse> {
    let request = VideoRequest::extract(request).await?;
    let lang = request.lang.as_deref().unwrap_or(&state.default_lang);

    let subtitles = state.fetcher.fetch_subtitles(&request.video_id, lang).await;
    if subtitles.is_empty() {
        tracing::warn!("No captions found for {}", request.video_id);
    }

    let transcript = flatten_transcript(&subtitles);
    let summary = state.summarizer.summarize(&transcript).await?;

    tracing::info!(
        "Summarised {} ({} key points)",
        request.video_id,
        summary.key_points.len()
    );
    Ok(SummariseResponse { summary })
}

fn respond<T>(state: &AppState, route: &str, result: anyhow::Result<T>) -> ApiResult<T> {
    result.map(Json).map_err(|err| {
        let error = state.responder.respond(&err);
        tracing::warn!("{} failed with {}: {:#}", route, error.status, err);
        error
    })
}
