use super::types::{
    MergeRequest, MergeResponseBody, SearchHit, SearchResponse, Transcript, VideoListResponse,
};
use super::{MergeService, SegmentCatalog, TranscriptSearch, TranscriptSource};
use crate::config::ApiConfig;
use crate::planner::interpret_merge_response;
use chrono::{DateTime, FixedOffset, SecondsFormat};
use clipstitch_common::paths::{validate_channel, validate_file_name};
use clipstitch_common::{ArtifactId, Error, Result, SegmentId};
use reqwest::{Client, StatusCode, Url};
use std::path::Path;
use std::time::Duration;

/// Path prefix of every API route.
pub const API_PREFIX: &str = "/api/v1";

/// Neighbors requested on each side when listing segments.
const DEFAULT_NEIGHBOR_RANGE: u8 = 3;

/// The server refuses larger merges.
const MAX_MERGE_SEGMENTS: usize = 20;

/// HTTP client for the clip server.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    neighbor_range: u8,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build HTTP client with timeout: {}", e);
                Client::new()
            });

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            neighbor_range: DEFAULT_NEIGHBOR_RANGE,
        }
    }

    /// Set how many neighbors per side the catalog is asked for.
    pub fn with_neighbor_range(mut self, range: u8) -> Self {
        self.neighbor_range = range;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
    }

    fn url_with_params(&self, path: &str, params: &[(&str, &str)]) -> Result<Url> {
        Url::parse_with_params(&self.url(path), params)
            .map_err(|e| Error::invalid_input(format!("invalid server URL: {e}")))
    }

    /// Playback URL of a stored segment.
    pub fn segment_url(&self, channel: &str, segment: &SegmentId) -> Result<String> {
        validate_channel(channel)?;
        validate_file_name(segment.as_str())?;
        Ok(self.url(&format!("/clips/video/{}/{}", channel, segment)))
    }

    async fn get(&self, service: &'static str, url: Url) -> Result<reqwest::Response> {
        tracing::debug!(service, url = %url, "GET");
        self.client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::upstream(service, e.to_string()))
    }

    /// Download a merged artifact into memory.
    pub async fn download(&self, artifact: &ArtifactId) -> Result<Vec<u8>> {
        let url = self.artifact_url(artifact)?;
        let url = Url::parse(&url).map_err(|e| Error::invalid_input(e.to_string()))?;
        let response = self.get("download", url).await?;

        if !response.status().is_success() {
            return Err(Error::upstream(
                "download",
                format!("HTTP {}", response.status().as_u16()),
            ));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::upstream("download", e.to_string()))?;
        Ok(bytes.to_vec())
    }

    /// Download a merged artifact to `path`, returning the bytes written.
    pub async fn download_to(&self, artifact: &ArtifactId, path: &Path) -> Result<u64> {
        let bytes = self.download(artifact).await?;
        tokio::fs::write(path, &bytes).await?;
        tracing::info!(
            artifact = %artifact,
            path = %path.display(),
            bytes = bytes.len(),
            "Saved artifact"
        );
        Ok(bytes.len() as u64)
    }
}

/// RFC 3339 rendering used in query strings. UTC instants end in `Z`.
fn wire_instant(instant: &DateTime<FixedOffset>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}

async fn error_text(response: reqwest::Response) -> String {
    let status = response.status().as_u16();
    match response.text().await {
        Ok(text) if !text.trim().is_empty() => format!("HTTP {}: {}", status, text.trim()),
        _ => format!("HTTP {}", status),
    }
}

#[async_trait::async_trait]
impl SegmentCatalog for ApiClient {
    async fn list_segments(
        &self,
        channel: &str,
        instant: &DateTime<FixedOffset>,
    ) -> Result<Vec<SegmentId>> {
        validate_channel(channel)?;
        let timestamp = wire_instant(instant);
        let range = self.neighbor_range.to_string();
        let url = self.url_with_params(
            "/clips/videos",
            &[("canal", channel), ("timestamp", &timestamp), ("rango", &range)],
        )?;

        let response = self.get("catalog", url).await?;
        if !response.status().is_success() {
            return Err(Error::upstream("catalog", error_text(response).await));
        }

        let body: VideoListResponse = response
            .json()
            .await
            .map_err(|e| Error::upstream("catalog", e.to_string()))?;

        tracing::debug!(
            channel,
            timestamp = %timestamp,
            count = body.videos.len(),
            "Listed segments"
        );
        Ok(body.videos.into_iter().map(SegmentId::from).collect())
    }
}

#[async_trait::async_trait]
impl TranscriptSource for ApiClient {
    async fn transcript(
        &self,
        channel: &str,
        instant: &DateTime<FixedOffset>,
        window_secs: u32,
    ) -> Result<Option<Transcript>> {
        validate_channel(channel)?;
        let timestamp = wire_instant(instant);
        let duration = window_secs.to_string();
        let url = self.url_with_params(
            "/search/transcripcionClip",
            &[
                ("canal", channel),
                ("timestamp", &timestamp),
                ("duracion_segundos", &duration),
            ],
        )?;

        let response = self.get("transcript", url).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Error::upstream("transcript", error_text(response).await));
        }

        let transcript: Transcript = response
            .json()
            .await
            .map_err(|e| Error::upstream("transcript", e.to_string()))?;

        Ok((!transcript.is_empty()).then_some(transcript))
    }
}

#[async_trait::async_trait]
impl MergeService for ApiClient {
    async fn merge(&self, segments: &[SegmentId], channel: &str) -> Result<ArtifactId> {
        validate_channel(channel)?;
        if segments.is_empty() {
            return Err(Error::EmptySelection);
        }
        if segments.len() > MAX_MERGE_SEGMENTS {
            return Err(Error::invalid_input(format!(
                "at most {} segments can be merged at once, got {}",
                MAX_MERGE_SEGMENTS,
                segments.len()
            )));
        }
        for segment in segments {
            validate_file_name(segment.as_str())?;
        }

        let request = MergeRequest {
            videos: segments.iter().map(SegmentId::as_str).collect(),
            canal: channel,
        };

        tracing::debug!(channel, count = segments.len(), "POST merge");
        let response = self
            .client
            .post(self.url("/clips/concatenar"))
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::merge_failed(e.to_string()))?;

        let status = response.status().as_u16();
        // An unreadable body is treated like an absent one.
        let body = response.json::<MergeResponseBody>().await.ok();
        interpret_merge_response(status, body)
    }

    fn artifact_url(&self, artifact: &ArtifactId) -> Result<String> {
        validate_file_name(artifact.as_str())?;
        let url = self.url_with_params("/clips/descargar", &[("clip", artifact.as_str())])?;
        Ok(url.to_string())
    }
}

#[async_trait::async_trait]
impl TranscriptSearch for ApiClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(Error::invalid_input("search query is empty"));
        }

        let url = self.url_with_params("/search/buscar", &[("palabra", query)])?;
        let response = self.get("search", url).await?;
        if !response.status().is_success() {
            return Err(Error::upstream("search", error_text(response).await));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| Error::upstream("search", e.to_string()))?;
        Ok(body.resultados)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new(&ApiConfig {
            base_url: "http://clips.local:8001/".to_string(),
            timeout_secs: 5,
        })
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        assert_eq!(client().base_url(), "http://clips.local:8001");
    }

    #[test]
    fn test_segment_url() {
        let url = client()
            .segment_url("c5n", &SegmentId::from("c5n_20250905_234106_20250905_234236.ts"))
            .unwrap();
        assert_eq!(
            url,
            "http://clips.local:8001/api/v1/clips/video/c5n/c5n_20250905_234106_20250905_234236.ts"
        );
    }

    #[test]
    fn test_segment_url_rejects_traversal() {
        assert!(client()
            .segment_url("../etc", &SegmentId::from("passwd"))
            .is_err());
        assert!(client()
            .segment_url("c5n", &SegmentId::from("../../passwd"))
            .is_err());
    }

    #[test]
    fn test_artifact_url_is_encoded() {
        let url = client()
            .artifact_url(&ArtifactId::from("clip c5n.mp4"))
            .unwrap();
        assert_eq!(
            url,
            "http://clips.local:8001/api/v1/clips/descargar?clip=clip+c5n.mp4"
        );
    }

    #[test]
    fn test_wire_instant_formats() {
        let utc = DateTime::parse_from_rfc3339("2025-09-06T02:41:06+00:00").unwrap();
        assert_eq!(wire_instant(&utc), "2025-09-06T02:41:06Z");

        let civil = DateTime::parse_from_rfc3339("2025-09-05T23:41:06-03:00").unwrap();
        assert_eq!(wire_instant(&civil), "2025-09-05T23:41:06-03:00");
    }
}
