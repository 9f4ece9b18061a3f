//! HTTP boundary: axum router, request handlers, and error mapping

use crate::transcript::TranscriptPipeline;

pub mod handlers;
pub mod routes;

/// Shared application state
pub struct AppState {
    pub pipeline: TranscriptPipeline,
}

impl AppState {
    pub fn new(pipeline: TranscriptPipeline) -> Self {
        Self { pipeline }
    }
}
