//! Axum router configuration

use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{fetch_transcript, health_check, index};
use super::AppState;

/// Create the axum router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::ACCEPT, header::CONTENT_TYPE, header::ORIGIN])
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/transcript", post(fetch_transcript))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::TranscriptPipeline;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::util::ServiceExt;

    fn test_app() -> Router {
        let pipeline = TranscriptPipeline::new(reqwest::Client::new());
        create_router(Arc::new(AppState::new(pipeline)))
    }

    async fn post_transcript(app: Router, body: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/transcript")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_health() {
        let response = test_app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_index_serves_page() {
        let response = test_app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_url_is_400_before_any_outbound_call() {
        let (status, body) = post_transcript(test_app(), "{}").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "URL is required");
    }

    #[tokio::test]
    async fn test_unrecognized_url_is_400() {
        let (status, body) = post_transcript(test_app(), r#"{"url":"not a url"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid YouTube URL");
    }

    #[tokio::test]
    async fn test_exhausted_chain_is_422() {
        use crate::extractors::{CaptionSource, MockCaptionSource};

        // Every source reports no captions; the chain exhausts without the
        // download step ever running
        let mut sources: Vec<Box<dyn CaptionSource>> = Vec::new();
        for name in ["first", "second"] {
            let mut source = MockCaptionSource::new();
            source.expect_caption_tracks().returning(|_| Ok(vec![]));
            source.expect_source_name().return_const(name);
            sources.push(Box::new(source));
        }

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(2))
            .build()
            .unwrap();
        let pipeline = TranscriptPipeline::with_sources(sources, client);
        let app = create_router(Arc::new(AppState::new(pipeline)));

        let (status, body) =
            post_transcript(app, r#"{"url":"https://youtu.be/dQw4w9WgXcQ"}"#).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("No transcript available"));
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/transcript")
            .header(header::ORIGIN, "http://localhost:8080")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap();

        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );
    }
}
