//! Wire types exchanged with the clip server.

use clipstitch_common::paths::is_segment_file;
use clipstitch_parser::HitRecord;
use serde::{Deserialize, Serialize};

/// Transcript text covering a window around an instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    #[serde(rename = "texto", default)]
    pub text: String,

    #[serde(rename = "canal", default)]
    pub channel: Option<String>,

    #[serde(default)]
    pub timestamp: Option<String>,
}

impl Transcript {
    /// Whether the server returned any text.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// A single transcript search result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchHit {
    #[serde(rename = "texto")]
    pub text: Option<String>,

    #[serde(rename = "canal")]
    pub channel: Option<String>,

    pub name: Option<String>,
    pub timestamp: Option<String>,
    pub start_timestamp: Option<String>,
    pub end_timestamp: Option<String>,
    pub service: Option<String>,
    pub channel_id: Option<String>,
}

impl From<&SearchHit> for HitRecord {
    fn from(hit: &SearchHit) -> Self {
        // Only segment names carry parseable times; anything else is a label.
        let filename = hit.name.clone().filter(|name| is_segment_file(name));
        HitRecord {
            channel: hit.channel.clone(),
            start_timestamp: hit.start_timestamp.clone(),
            end_timestamp: hit.end_timestamp.clone(),
            timestamp: hit.timestamp.clone(),
            filename,
            label: None,
            name: hit.name.clone(),
            text: hit.text.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct VideoListResponse {
    #[serde(default)]
    pub videos: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub resultados: Vec<SearchHit>,
}

#[derive(Debug, Serialize)]
pub(crate) struct MergeRequest<'a> {
    pub videos: Vec<&'a str>,
    pub canal: &'a str,
}

/// Body of a merge reply. Either field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MergeResponseBody {
    pub clip_filename: Option<String>,
    pub error: Option<String>,
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_hit_from_server_json() {
        let json = r#"{
            "texto": "hola mundo",
            "canal": "c5n",
            "name": "c5n_20250905_234106_20250905_234236.ts",
            "timestamp": "2025-09-06T02:41:06",
            "service": "whisper",
            "channel_id": "42"
        }"#;
        let hit: SearchHit = serde_json::from_str(json).unwrap();
        assert_eq!(hit.text.as_deref(), Some("hola mundo"));
        assert_eq!(hit.channel.as_deref(), Some("c5n"));
        assert!(hit.start_timestamp.is_none());

        let record = HitRecord::from(&hit);
        assert_eq!(
            record.filename.as_deref(),
            Some("c5n_20250905_234106_20250905_234236.ts")
        );
        assert_eq!(record.timestamp.as_deref(), Some("2025-09-06T02:41:06"));
    }

    #[test]
    fn test_non_segment_name_is_not_a_filename() {
        let hit = SearchHit {
            name: Some("transcripcion_c5n".into()),
            ..SearchHit::default()
        };
        let record = HitRecord::from(&hit);
        assert!(record.filename.is_none());
        assert_eq!(record.name.as_deref(), Some("transcripcion_c5n"));
    }

    #[test]
    fn test_transcript_wire_names() {
        let t: Transcript =
            serde_json::from_str(r#"{"texto":"  ","canal":"tn","timestamp":"x"}"#).unwrap();
        assert!(t.is_empty());
        assert_eq!(t.channel.as_deref(), Some("tn"));
    }

    #[test]
    fn test_merge_body_tolerates_missing_fields() {
        let body: MergeResponseBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body, MergeResponseBody::default());
    }
}
