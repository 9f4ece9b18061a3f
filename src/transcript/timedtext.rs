use serde::{Deserialize, Serialize};

/// One normalized transcript line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptLine {
    /// Start time in seconds
    pub time: f64,

    /// Line text, trimmed
    pub text: String,
}

/// Timed-text payload in the structured `json3` format
#[derive(Debug, Deserialize)]
pub struct TimedTextPayload {
    pub events: Option<Vec<TimedTextEvent>>,
}

#[derive(Debug, Deserialize)]
pub struct TimedTextEvent {
    /// Start offset in milliseconds
    #[serde(rename = "tStartMs", default)]
    pub start_ms: f64,

    /// Text fragments; absent on style/window metadata events
    pub segs: Option<Vec<TextSegment>>,
}

#[derive(Debug, Deserialize)]
pub struct TextSegment {
    #[serde(default)]
    pub utf8: String,
}

/// Shape a track's fetch URL to request the structured JSON timing format
pub fn timedtext_url(base_url: &str) -> String {
    format!("{}&fmt=json3", base_url)
}

/// Normalize a timed-text payload into transcript lines.
///
/// Events without segments are skipped, fragments are concatenated in order
/// with no separator, and lines that are empty after trimming are dropped.
/// Event order is preserved. Returns `None` when the payload has no events
/// collection at all.
pub fn normalize(payload: TimedTextPayload) -> Option<Vec<TranscriptLine>> {
    let events = payload.events?;

    let lines = events
        .into_iter()
        .filter_map(|event| {
            let segs = event.segs?;

            let text: String = segs.into_iter().map(|seg| seg.utf8).collect();
            let text = text.trim();
            if text.is_empty() {
                return None;
            }

            Some(TranscriptLine {
                time: event.start_ms / 1000.0,
                text: text.to_string(),
            })
        })
        .collect();

    Some(lines)
}
