use serde::{Deserialize, Serialize};

use super::{versioned_serde, Versioned};

/// Image stored with the external asset host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageV1 {
    /// Asset id at the image host
    pub asset_id: String,
    /// Caption shown under the image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Credits for where the image came from
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
}

/// `attrs.data` of an `image` node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageData {
    V1(ImageV1),
}

versioned_serde!(ImageData { 1 => V1 });

impl Versioned for ImageData {
    type Latest = ImageV1;
    const PAYLOAD: &'static str = "image";

    fn version(&self) -> u32 {
        match self {
            ImageData::V1(_) => 1,
        }
    }

    fn upgrade(self) -> ImageV1 {
        match self {
            ImageData::V1(image) => image,
        }
    }
}

impl From<ImageV1> for ImageData {
    fn from(image: ImageV1) -> Self {
        ImageData::V1(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_image_payload_reads_optional_fields() {
        let data: ImageData = serde_json::from_value(json!({
            "version": 1,
            "asset_id": "image-abc123-800x600-jpg",
        }))
        .unwrap();

        assert_eq!(data.version(), 1);
        let image = data.upgrade();
        assert_eq!(image.asset_id, "image-abc123-800x600-jpg");
        assert_eq!(image.label, None);
        assert!(image.sources.is_empty());
    }

    #[test]
    fn test_image_payload_writes_version() {
        let data = ImageData::from(ImageV1 {
            asset_id: "image-1".to_string(),
            label: Some("Couve em consórcio".to_string()),
            sources: vec!["Acervo Gororobas".to_string()],
        });

        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["version"], 1);
        assert_eq!(value["label"], "Couve em consórcio");
        assert_eq!(serde_json::from_value::<ImageData>(value).unwrap(), data);
    }

    #[test]
    fn test_image_payload_rejects_unknown_version() {
        let err = serde_json::from_value::<ImageData>(json!({
            "version": 9,
            "asset_id": "image-1",
        }))
        .unwrap_err();

        assert!(err.to_string().contains("unsupported image payload version 9"));
    }

    #[test]
    fn test_image_payload_requires_asset_id() {
        let err = serde_json::from_value::<ImageData>(json!({ "version": 1 })).unwrap_err();
        assert!(err.to_string().contains("asset_id"));
    }
}
