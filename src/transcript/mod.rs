use anyhow::Context;
use reqwest::Client;

pub mod timedtext;

pub use timedtext::TranscriptLine;

use crate::extractors::{
    android::AndroidClientSource, watch_page::WatchPageSource, web::WebClientSource,
    CaptionSource, CaptionTrack,
};
use crate::metadata::{MetadataClient, VideoMeta};
use crate::video::VideoId;
use crate::{Result, TranscriptError};

/// Language preferred during track selection
const PREFERRED_LANGUAGE: &str = "en";

/// Complete result of one transcript request
#[derive(Debug, Clone)]
pub struct TranscriptResult {
    pub meta: VideoMeta,
    pub video_id: VideoId,
    pub lines: Vec<TranscriptLine>,
}

/// Main transcript retrieval pipeline.
///
/// Holds the ordered caption source chain and the metadata client. Each
/// request is independent; nothing is cached or shared across requests beyond
/// the connection pool of the underlying HTTP client.
pub struct TranscriptPipeline {
    sources: Vec<Box<dyn CaptionSource>>,
    metadata: MetadataClient,
    client: Client,
}

impl TranscriptPipeline {
    /// Create a pipeline with the default source chain, most reliable first
    pub fn new(client: Client) -> Self {
        let sources: Vec<Box<dyn CaptionSource>> = vec![
            Box::new(AndroidClientSource::new(client.clone())),
            Box::new(WatchPageSource::new(client.clone())),
            Box::new(WebClientSource::new(client.clone())),
        ];

        Self::with_sources(sources, client)
    }

    /// Create a pipeline with an explicit source chain
    pub fn with_sources(sources: Vec<Box<dyn CaptionSource>>, client: Client) -> Self {
        Self {
            sources,
            metadata: MetadataClient::new(client.clone()),
            client,
        }
    }

    /// Fetch the transcript and display metadata for a video.
    ///
    /// The metadata lookup and the caption retrieval run concurrently; the
    /// lookup never fails, so the overall outcome is decided by retrieval
    /// alone.
    pub async fn fetch(&self, video_id: &VideoId) -> Result<TranscriptResult> {
        tracing::info!("Fetching transcript for video {}", video_id);

        let (meta, lines) = tokio::join!(
            self.metadata.lookup(video_id),
            self.fetch_lines(video_id)
        );

        let lines = lines?;
        tracing::info!("Fetched {} transcript lines for {}", lines.len(), video_id);

        Ok(TranscriptResult {
            meta,
            video_id: video_id.clone(),
            lines,
        })
    }

    async fn fetch_lines(&self, video_id: &VideoId) -> Result<Vec<TranscriptLine>> {
        let tracks = self.locate_tracks(video_id).await?;
        let track = select_track(&tracks);

        tracing::debug!(
            "Selected '{}' track for {}",
            track.language_code,
            video_id
        );

        self.download_track(track).await
    }

    /// Run the source chain in order until one yields a non-empty descriptor
    /// list. Per-source failures and empty results both fall through to the
    /// next source; exhaustion is the distinguished no-transcript outcome.
    async fn locate_tracks(&self, video_id: &VideoId) -> Result<Vec<CaptionTrack>> {
        for source in &self.sources {
            match source.caption_tracks(video_id).await {
                Ok(tracks) if !tracks.is_empty() => {
                    tracing::debug!(
                        "Source {} found {} caption tracks for {}",
                        source.source_name(),
                        tracks.len(),
                        video_id
                    );
                    return Ok(tracks);
                }
                Ok(_) => {
                    tracing::debug!(
                        "Source {} found no captions for {}",
                        source.source_name(),
                        video_id
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        "Source {} failed for {}: {}",
                        source.source_name(),
                        video_id,
                        e
                    );
                }
            }
        }

        Err(TranscriptError::NoTranscript.into())
    }

    /// Download and normalize the selected track's timed-text payload
    async fn download_track(&self, track: &CaptionTrack) -> Result<Vec<TranscriptLine>> {
        let url = timedtext::timedtext_url(&track.base_url);

        let payload: timedtext::TimedTextPayload = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to download timed-text payload")?
            .error_for_status()?
            .json()
            .await
            .context("Failed to parse timed-text payload")?;

        timedtext::normalize(payload).ok_or_else(|| TranscriptError::NoTranscript.into())
    }
}

/// Prefer the exact `"en"` track; otherwise take the first descriptor in
/// upstream order. The chain only ever returns non-empty lists.
fn select_track(tracks: &[CaptionTrack]) -> &CaptionTrack {
    tracks
        .iter()
        .find(|t| t.language_code == PREFERRED_LANGUAGE)
        .unwrap_or(&tracks[0])
}
