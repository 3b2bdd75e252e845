//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`] which starts a `wiremock` server standing in for
//! the clip server, together with an [`ApiClient`] pointed at it and helpers
//! to mount the API routes the session uses.

#![allow(dead_code)]

use std::sync::Arc;

use clipstitch::catalog::ApiClient;
use clipstitch::config::{ApiConfig, SessionConfig};
use clipstitch::session::{PlaybackSession, Services};
use clipstitch_parser::Parser;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Siblings of the reference segment, in catalog order.
pub const SIBLINGS: &[&str] = &[
    "c5n_20250905_233636_20250905_233806.ts",
    "c5n_20250905_233806_20250905_233936.ts",
    "c5n_20250905_233936_20250905_234106.ts",
    "c5n_20250905_234106_20250905_234236.ts",
    "c5n_20250905_234236_20250905_234406.ts",
    "c5n_20250905_234406_20250905_234536.ts",
    "c5n_20250905_234536_20250905_234706.ts",
];

/// The segment containing 23:41:30 civil time.
pub const REFERENCE: &str = "c5n_20250905_234106_20250905_234236.ts";

/// Test harness wrapping a mock clip server and a client for it.
pub struct TestHarness {
    pub server: MockServer,
    pub client: Arc<ApiClient>,
}

impl TestHarness {
    /// Start a mock server with no routes mounted.
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let client = Arc::new(ApiClient::new(&ApiConfig {
            base_url: server.uri(),
            timeout_secs: 5,
        }));
        Self { server, client }
    }

    /// A fresh playback session backed by this harness' client.
    pub fn session(&self) -> PlaybackSession {
        self.session_with(SessionConfig::default())
    }

    pub fn session_with(&self, config: SessionConfig) -> PlaybackSession {
        PlaybackSession::new(Services::from_client(self.client.clone()), config)
    }

    /// A session that interprets names with `parser`.
    pub fn session_with_parser(&self, parser: Parser) -> PlaybackSession {
        PlaybackSession::with_parser(
            Services::from_client(self.client.clone()),
            SessionConfig::default(),
            parser,
        )
    }

    /// Answer every segment listing for `channel` with `videos`.
    pub async fn mount_videos(&self, channel: &str, videos: &[&str]) {
        Mock::given(method("GET"))
            .and(path("/api/v1/clips/videos"))
            .and(query_param("canal", channel))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "videos": videos })))
            .mount(&self.server)
            .await;
    }

    /// Answer every transcript request with `text`.
    pub async fn mount_transcript(&self, text: &str) {
        Mock::given(method("GET"))
            .and(path("/api/v1/search/transcripcionClip"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "texto": text,
                "canal": "c5n",
                "timestamp": "2025-09-06T02:41:06Z",
            })))
            .mount(&self.server)
            .await;
    }

    /// Make transcript requests fail with a server error.
    pub async fn mount_transcript_failure(&self) {
        Mock::given(method("GET"))
            .and(path("/api/v1/search/transcripcionClip"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&self.server)
            .await;
    }

    /// Answer merge requests with `status` and `body`.
    pub async fn mount_merge(&self, status: u16, body: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path("/api/v1/clips/concatenar"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }
}
