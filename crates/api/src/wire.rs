use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use museum_core::model::ArtworkId;

/// `GET /status` payload.
///
/// Only `status` (and an optional `message`) is guaranteed; deployed
/// backends also report collection counters, so every extra field defaults
/// when absent and either shape decodes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendStatus {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub artworks_count: u64,
    #[serde(default)]
    pub features_available: bool,
    #[serde(default)]
    pub active_learner_initialized: bool,
}

impl BackendStatus {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }
}

/// `POST /artworks/classify` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifyRequest {
    pub artwork_id: ArtworkId,
    pub classification: BTreeMap<String, String>,
}

/// `{status}` reply used by classify and question deletion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReply {
    pub status: String,
}

/// Fields of the multipart `POST /artworks/upload` form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtworkUpload {
    pub title: String,
    pub artist: String,
    pub year: i32,
    pub file_name: String,
    pub image: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_decodes_minimal_shape() {
        let json = r#"{"status": "error", "message": "backend unreachable"}"#;
        let status: BackendStatus = serde_json::from_str(json).unwrap();
        assert!(!status.is_active());
        assert_eq!(status.message.as_deref(), Some("backend unreachable"));
        assert_eq!(status.artworks_count, 0);
    }

    #[test]
    fn status_decodes_backend_shape() {
        let json = r#"{
            "status": "active",
            "artworks_count": 42,
            "features_available": true,
            "active_learner_initialized": true
        }"#;
        let status: BackendStatus = serde_json::from_str(json).unwrap();
        assert!(status.is_active());
        assert_eq!(status.artworks_count, 42);
        assert!(status.message.is_none());
    }

    #[test]
    fn classify_request_serializes_flat_map() {
        let request = ClassifyRequest {
            artwork_id: ArtworkId::new(5),
            classification: BTreeMap::from([("1".to_string(), "A".to_string())]),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"artwork_id":5,"classification":{"1":"A"}}"#);
    }
}
