use serde::{Deserialize, Serialize};

use super::{versioned_serde, Versioned};

/// Hosts an embedded video can come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoProvider {
    Youtube,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoV1 {
    pub provider: VideoProvider,
    /// Provider-specific id (the `v=` parameter for YouTube)
    pub video_id: String,
}

impl VideoV1 {
    pub fn youtube(video_id: impl Into<String>) -> Self {
        Self {
            provider: VideoProvider::Youtube,
            video_id: video_id.into(),
        }
    }
}

/// `attrs.data` of a `video` node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoData {
    V1(VideoV1),
}

versioned_serde!(VideoData { 1 => V1 });

impl Versioned for VideoData {
    type Latest = VideoV1;
    const PAYLOAD: &'static str = "video";

    fn version(&self) -> u32 {
        match self {
            VideoData::V1(_) => 1,
        }
    }

    fn upgrade(self) -> VideoV1 {
        match self {
            VideoData::V1(video) => video,
        }
    }
}

impl From<VideoV1> for VideoData {
    fn from(video: VideoV1) -> Self {
        VideoData::V1(video)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_video_payload() {
        let data: VideoData = serde_json::from_value(json!({
            "version": 1,
            "provider": "youtube",
            "video_id": "dQw4w9WgXcQ",
        }))
        .unwrap();

        let video = data.upgrade();
        assert_eq!(video, VideoV1::youtube("dQw4w9WgXcQ"));
    }

    #[test]
    fn test_video_payload_rejects_unknown_provider() {
        let err = serde_json::from_value::<VideoData>(json!({
            "version": 1,
            "provider": "vimeo",
            "video_id": "123",
        }))
        .unwrap_err();

        assert!(err.to_string().contains("invalid video payload"));
    }
}
