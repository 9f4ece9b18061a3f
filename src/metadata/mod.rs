use reqwest::Client;
use serde::Deserialize;

use crate::video::VideoId;

const OEMBED_URL: &str = "https://www.youtube.com/oembed";
const FALLBACK_TITLE: &str = "YouTube Video";

/// Best-effort display metadata for a video
#[derive(Debug, Clone)]
pub struct VideoMeta {
    pub title: String,
    pub thumbnail_url: String,
}

impl VideoMeta {
    /// Fallback metadata built purely from the identifier, used whenever the
    /// oEmbed lookup fails in any way
    pub fn fallback(video_id: &VideoId) -> Self {
        Self {
            title: FALLBACK_TITLE.to_string(),
            thumbnail_url: fallback_thumbnail(video_id),
        }
    }
}

fn fallback_thumbnail(video_id: &VideoId) -> String {
    format!("https://i.ytimg.com/vi/{}/hqdefault.jpg", video_id)
}

#[derive(Debug, Deserialize)]
struct OEmbedResponse {
    title: String,
    thumbnail_url: Option<String>,
}

/// Client for the public, unauthenticated oEmbed endpoint
pub struct MetadataClient {
    client: Client,
    endpoint: String,
}

impl MetadataClient {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            endpoint: OEMBED_URL.to_string(),
        }
    }

    #[cfg(test)]
    fn with_endpoint(client: Client, endpoint: &str) -> Self {
        Self {
            client,
            endpoint: endpoint.to_string(),
        }
    }

    /// Look up display metadata for a video. Never fails: any network, status,
    /// or parse problem degrades to [`VideoMeta::fallback`].
    pub async fn lookup(&self, video_id: &VideoId) -> VideoMeta {
        match self.try_lookup(video_id).await {
            Ok(meta) => meta,
            Err(e) => {
                tracing::debug!("oEmbed lookup failed for {}: {}", video_id, e);
                VideoMeta::fallback(video_id)
            }
        }
    }

    async fn try_lookup(&self, video_id: &VideoId) -> crate::Result<VideoMeta> {
        let url = format!(
            "{}?url={}&format=json",
            self.endpoint,
            urlencoding::encode(&video_id.watch_url())
        );

        let response: OEmbedResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(VideoMeta {
            title: response.title,
            thumbnail_url: response
                .thumbnail_url
                .unwrap_or_else(|| fallback_thumbnail(video_id)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_id() -> VideoId {
        VideoId::extract("dQw4w9WgXcQ").unwrap()
    }

    #[test]
    fn test_fallback_meta() {
        let meta = VideoMeta::fallback(&test_id());
        assert_eq!(meta.title, "YouTube Video");
        assert_eq!(
            meta.thumbnail_url,
            "https://i.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg"
        );
    }

    #[tokio::test]
    async fn test_lookup_degrades_on_network_error() {
        // Nothing listens on this port; the lookup must still produce a result
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(200))
            .build()
            .unwrap();
        let metadata = MetadataClient::with_endpoint(client, "http://127.0.0.1:9/oembed");

        let meta = metadata.lookup(&test_id()).await;
        assert_eq!(meta.title, "YouTube Video");
        assert_eq!(
            meta.thumbnail_url,
            "https://i.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg"
        );
    }
}
