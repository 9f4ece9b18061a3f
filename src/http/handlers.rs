//! HTTP request handlers
//!
//! Maps the retrieval pipeline onto the external contract: 400 for input
//! problems, 422 when no transcript exists, 500 for anything unexpected.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::transcript::{TranscriptLine, TranscriptResult};
use crate::video::VideoId;
use crate::TranscriptError;

use super::AppState;

/// HTTP error type with a JSON `{ "error": ... }` body
#[derive(Debug)]
pub enum HttpError {
    MissingUrl,
    InvalidUrl,
    NoTranscript(String),
    Internal(String),
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::MissingUrl => (StatusCode::BAD_REQUEST, "URL is required".to_string()),
            HttpError::InvalidUrl => {
                (StatusCode::BAD_REQUEST, "Invalid YouTube URL".to_string())
            }
            HttpError::NoTranscript(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<anyhow::Error> for HttpError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast_ref::<TranscriptError>() {
            Some(TranscriptError::InvalidUrl) => HttpError::InvalidUrl,
            Some(TranscriptError::NoTranscript) => HttpError::NoTranscript(err.to_string()),
            None => HttpError::Internal(format!("Failed to fetch transcript: {}", err)),
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Request body for `POST /transcript`. `url` is optional so its absence maps
/// to the specific 400 message instead of a generic deserialization reject.
#[derive(Debug, Deserialize)]
pub struct TranscriptRequest {
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub title: String,
    pub thumbnail: String,
    #[serde(rename = "videoId")]
    pub video_id: VideoId,
    pub transcript: Vec<TranscriptLine>,
}

impl From<TranscriptResult> for TranscriptResponse {
    fn from(result: TranscriptResult) -> Self {
        Self {
            title: result.meta.title,
            thumbnail: result.meta.thumbnail_url,
            video_id: result.video_id,
            transcript: result.lines,
        }
    }
}

/// Embedded single-page UI
/// GET /
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}

/// Transcript endpoint
/// POST /transcript
pub async fn fetch_transcript(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TranscriptRequest>,
) -> Result<Json<TranscriptResponse>, HttpError> {
    let url = request.url.ok_or(HttpError::MissingUrl)?;

    let video_id = VideoId::extract(&url).map_err(HttpError::from)?;

    let result = state.pipeline.fetch(&video_id).await?;

    Ok(Json(result.into()))
}
