//! Versioned payloads carried by atom nodes under `attrs.data`.
//!
//! Every payload is a JSON object with an integer `version` field next to the
//! version-specific fields. Each payload type is an enum over known versions;
//! an unknown version fails deserialization so the surrounding document is
//! rejected as a whole.

mod image;
mod mention;
mod video;

pub use image::{ImageData, ImageV1};
pub use mention::{MentionData, MentionImage, MentionKind, MentionV1};
pub use video::{VideoData, VideoProvider, VideoV1};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// The `attrs` object of an atom node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtomAttrs<T> {
    pub data: T,
}

impl<T> AtomAttrs<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A payload that exists in several wire versions.
pub trait Versioned: Sized {
    /// Most recent representation of this payload
    type Latest;

    /// Payload name used in error messages
    const PAYLOAD: &'static str;

    /// Wire version of this value
    fn version(&self) -> u32;

    /// Migrate to the most recent version
    fn upgrade(self) -> Self::Latest;
}

#[derive(Deserialize)]
struct Envelope {
    version: u32,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

/// Split a versioned payload into its version number and remaining fields.
pub(crate) fn read_envelope<'de, D>(deserializer: D) -> Result<(u32, Value), D::Error>
where
    D: Deserializer<'de>,
{
    let envelope = Envelope::deserialize(deserializer)?;
    Ok((envelope.version, Value::Object(envelope.fields)))
}

/// Decode the version-specific body of a payload.
pub(crate) fn decode_body<T, E>(payload: &str, version: u32, body: Value) -> Result<T, E>
where
    T: DeserializeOwned,
    E: serde::de::Error,
{
    serde_json::from_value(body)
        .map_err(|e| E::custom(format!("invalid {payload} payload (version {version}): {e}")))
}

pub(crate) fn unsupported_version<E: serde::de::Error>(payload: &str, version: u32) -> E {
    E::custom(format!("unsupported {payload} payload version {version}"))
}

/// Serialize a version-specific body with its `version` field.
pub(crate) fn write_envelope<T, S>(version: u32, body: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    use serde::ser::Error as _;

    let mut value = serde_json::to_value(body).map_err(S::Error::custom)?;
    match value.as_object_mut() {
        Some(fields) => {
            fields.insert("version".to_string(), Value::from(version));
        }
        None => return Err(S::Error::custom("versioned payload must be an object")),
    }
    value.serialize(serializer)
}

/// Implements `Serialize`/`Deserialize` for a payload enum whose variants
/// each wrap one version-specific struct.
macro_rules! versioned_serde {
    ($ty:ident { $($version:literal => $variant:ident),+ $(,)? }) => {
        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                match self {
                    $($ty::$variant(body) => {
                        $crate::richtext::attrs::write_envelope($version, body, serializer)
                    })+
                }
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let payload = <$ty as $crate::richtext::attrs::Versioned>::PAYLOAD;
                let (version, body) = $crate::richtext::attrs::read_envelope(deserializer)?;
                match version {
                    $($version => $crate::richtext::attrs::decode_body(payload, version, body)
                        .map($ty::$variant),)+
                    other => Err($crate::richtext::attrs::unsupported_version(payload, other)),
                }
            }
        }
    };
}

pub(crate) use versioned_serde;
