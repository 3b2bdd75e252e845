use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the clip server, without the `/api/v1` prefix
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8001".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Maximum extra segments selectable on each side of the anchor
    #[serde(default = "default_max_extra")]
    pub max_extra: usize,

    /// Neighbors requested on each side when listing segments
    #[serde(default = "default_neighbor_range")]
    pub neighbor_range: u8,

    /// Length of the transcript window fetched for a segment, in seconds
    #[serde(default = "default_transcript_window_secs")]
    pub transcript_window_secs: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_extra: default_max_extra(),
            neighbor_range: default_neighbor_range(),
            transcript_window_secs: default_transcript_window_secs(),
        }
    }
}

fn default_max_extra() -> usize {
    crate::window::MAX_EXTRA
}

fn default_neighbor_range() -> u8 {
    3
}

fn default_transcript_window_secs() -> u32 {
    90
}
