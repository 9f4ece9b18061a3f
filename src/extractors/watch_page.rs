use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::{parse_caption_tracks, CaptionSource, CaptionTrack};
use crate::video::VideoId;
use crate::Result;

const DESKTOP_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/124.0.0.0 Safari/537.36";

const PLAYER_RESPONSE_MARKER: &str = "ytInitialPlayerResponse = ";
const PLAYER_RESPONSE_END: &str = ";</script>";

/// Caption source that fetches the canonical watch page and reads the caption
/// list out of the serialized player state embedded in its inline script.
pub struct WatchPageSource {
    client: Client,
}

impl WatchPageSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

/// Slice the inline `ytInitialPlayerResponse` JSON out of watch-page HTML.
/// The object sits between its assignment marker and the closing script tag.
fn extract_player_json(html: &str) -> Option<&str> {
    let start = html.find(PLAYER_RESPONSE_MARKER)? + PLAYER_RESPONSE_MARKER.len();
    let rest = &html[start..];
    let end = rest.find(PLAYER_RESPONSE_END).unwrap_or(rest.len());
    Some(&rest[..end])
}

#[async_trait]
impl CaptionSource for WatchPageSource {
    async fn caption_tracks(&self, video_id: &VideoId) -> Result<Vec<CaptionTrack>> {
        tracing::debug!("Fetching watch page for {}", video_id);

        let html = self
            .client
            .get(video_id.watch_url())
            .header("User-Agent", DESKTOP_USER_AGENT)
            .header("Accept-Language", "en-US")
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let Some(json_str) = extract_player_json(&html) else {
            tracing::debug!("No embedded player state found in watch page for {}", video_id);
            return Ok(Vec::new());
        };

        let player: Value = serde_json::from_str(json_str)?;

        Ok(parse_caption_tracks(&player))
    }

    fn source_name(&self) -> &'static str {
        "watch-page"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_player_json() {
        let html = r#"<script>var ytInitialPlayerResponse = {"playabilityStatus":{"status":"OK"}};</script>"#;
        let json = extract_player_json(html).unwrap();
        assert_eq!(json, r#"{"playabilityStatus":{"status":"OK"}}"#);

        let parsed: Value = serde_json::from_str(json).unwrap();
        assert!(super::super::is_playable(&parsed));
    }

    #[test]
    fn test_extract_player_json_missing_marker() {
        assert!(extract_player_json("<html><body>consent page</body></html>").is_none());
    }

    #[test]
    fn test_extract_player_json_unterminated() {
        // Truncated page: take everything after the marker
        let html = r#"ytInitialPlayerResponse = {"a":1}"#;
        assert_eq!(extract_player_json(html).unwrap(), r#"{"a":1}"#);
    }
}
