use std::fmt;

use serde::{Deserialize, Serialize};

use super::{versioned_serde, Versioned};

/// Kind of entity a mention points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MentionKind {
    Person,
    Vegetable,
}

impl fmt::Display for MentionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MentionKind::Person => write!(f, "person"),
            MentionKind::Vegetable => write!(f, "vegetable"),
        }
    }
}

/// Cached thumbnail of the mentioned entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionImage {
    pub asset_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionV1 {
    pub kind: MentionKind,
    pub id: String,
    /// Display label cached when the mention was inserted
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<MentionImage>,
}

/// `attrs.data` of a `mention` node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MentionData {
    V1(MentionV1),
}

versioned_serde!(MentionData { 1 => V1 });

impl Versioned for MentionData {
    type Latest = MentionV1;
    const PAYLOAD: &'static str = "mention";

    fn version(&self) -> u32 {
        match self {
            MentionData::V1(_) => 1,
        }
    }

    fn upgrade(self) -> MentionV1 {
        match self {
            MentionData::V1(mention) => mention,
        }
    }
}

impl From<MentionV1> for MentionData {
    fn from(mention: MentionV1) -> Self {
        MentionData::V1(mention)
    }
}
