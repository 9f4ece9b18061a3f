use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

use crate::TranscriptError;

/// An 11-character YouTube video identifier.
///
/// Only constructed through [`VideoId::extract`], so holding one implies the
/// token already matched the identifier character class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoId(String);

/// Recognized URL shapes, tried in order. Each pattern captures the identifier
/// in group 1.
fn id_patterns() -> &'static Vec<Regex> {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        // The trailing group rejects a 12th identifier-class character, so an
        // over-long path segment or v= value does not match on its prefix.
        [
            // Standard watch URL, v= anywhere in the query string
            r"youtube\.com/watch\?(?:[^#\s]*&)?v=([A-Za-z0-9_-]{11})(?:[^A-Za-z0-9_-]|$)",
            // Short link
            r"youtu\.be/([A-Za-z0-9_-]{11})(?:[^A-Za-z0-9_-]|$)",
            // Shorts
            r"youtube\.com/shorts/([A-Za-z0-9_-]{11})(?:[^A-Za-z0-9_-]|$)",
            // Embed URL
            r"youtube\.com/embed/([A-Za-z0-9_-]{11})(?:[^A-Za-z0-9_-]|$)",
            // Legacy /v/ URL
            r"youtube\.com/v/([A-Za-z0-9_-]{11})(?:[^A-Za-z0-9_-]|$)",
            // Bare identifier
            r"^([A-Za-z0-9_-]{11})$",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("identifier pattern must compile"))
        .collect()
    })
}

impl VideoId {
    /// Extract a video identifier from an arbitrary input string.
    ///
    /// The input is trimmed of surrounding whitespace, then matched against the
    /// recognized URL shapes in order; the first capture wins. No other
    /// normalization is applied.
    pub fn extract(input: &str) -> crate::Result<Self> {
        let input = input.trim();

        for pattern in id_patterns() {
            if let Some(captures) = pattern.captures(input) {
                if let Some(id) = captures.get(1) {
                    return Ok(Self(id.as_str().to_string()));
                }
            }
        }

        Err(TranscriptError::InvalidUrl.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical watch-page URL for this video
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.0)
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
