use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod android;
pub mod watch_page;
pub mod web;

use crate::video::VideoId;
use crate::Result;

/// Player API endpoint shared by the client-impersonation sources. The access
/// key differs per declared client and is appended by each source.
pub(crate) const PLAYER_API_URL: &str = "https://www.youtube.com/youtubei/v1/player";

/// Location of the caption track list inside a player response
const CAPTION_TRACKS_PATH: &str = "/captions/playerCaptionsTracklistRenderer/captionTracks";

/// Minimal metadata identifying one caption track before download
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionTrack {
    /// BCP-47 language code as reported upstream
    pub language_code: String,

    /// Timed-text fetch URL for this track
    pub base_url: String,

    /// Human-readable track name, when upstream provides one
    pub name: Option<String>,
}

/// One self-contained method of obtaining caption track descriptors.
///
/// Sources are interchangeable: each returns the full descriptor list it could
/// see, an empty list when the video has no captions via that path, or an
/// error on network/parse failure. The caller decides what to do next; a
/// source never falls through to another source internally.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CaptionSource: Send + Sync {
    /// Look up the caption tracks available for a video
    async fn caption_tracks(&self, video_id: &VideoId) -> Result<Vec<CaptionTrack>>;

    /// Short name for logging
    fn source_name(&self) -> &'static str;
}

/// Pull caption track descriptors out of a parsed player response.
///
/// Returns an empty list when the response reports the video as unplayable or
/// the track list is absent at any nesting level. Upstream escapes `&` inside
/// `baseUrl`; that is undone here so the URL is usable as-is.
pub(crate) fn parse_caption_tracks(player: &Value) -> Vec<CaptionTrack> {
    if !is_playable(player) {
        return Vec::new();
    }

    let Some(tracks) = player.pointer(CAPTION_TRACKS_PATH).and_then(Value::as_array) else {
        return Vec::new();
    };

    tracks
        .iter()
        .filter_map(|track| {
            let language_code = track.get("languageCode")?.as_str()?.to_string();
            let base_url = track.get("baseUrl")?.as_str()?.replace("\\u0026", "&");

            let name = track
                .pointer("/name/simpleText")
                .or_else(|| track.pointer("/name/runs/0/text"))
                .and_then(Value::as_str)
                .map(str::to_string);

            Some(CaptionTrack {
                language_code,
                base_url,
                name,
            })
        })
        .collect()
}

/// Check the playability status of a player response. A missing status block
/// passes; some surfaces omit it entirely for playable videos.
pub(crate) fn is_playable(player: &Value) -> bool {
    match player.pointer("/playabilityStatus/status").and_then(Value::as_str) {
        Some(status) => status == "OK",
        None => true,
    }
}
