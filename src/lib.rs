//! YouTube Transcript Server - fetch caption tracks for a video and serve them
//! as timestamped transcript lines over a small HTTP API.
//!
//! The retrieval core tries several independent upstream access paths in a fixed
//! order (mobile client API, watch-page scrape, desktop web client API) until one
//! yields usable caption data, then downloads and normalizes the selected track.

pub mod cli;
pub mod extractors;
pub mod http;
pub mod metadata;
pub mod transcript;
pub mod video;

pub use extractors::{CaptionSource, CaptionTrack};
pub use metadata::VideoMeta;
pub use transcript::{TranscriptLine, TranscriptPipeline, TranscriptResult};
pub use video::VideoId;

/// Result type used throughout the library
pub type Result<T> = anyhow::Result<T>;

/// Expected failure outcomes, distinguished from unexpected errors at the
/// HTTP boundary
#[derive(thiserror::Error, Debug)]
pub enum TranscriptError {
    #[error("Invalid YouTube URL")]
    InvalidUrl,

    #[error("No transcript available for this video. Captions may be disabled or unsupported.")]
    NoTranscript,
}
