use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;
use std::sync::Arc;

/// An opaque, pre-rendered raster image (PNG or JPEG bytes).
///
/// The engine never generates or inspects these images beyond decoding them
/// for placement. In JSON they travel as base64, optionally as a `data:` URI.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageData(Arc<[u8]>);

impl ImageData {
    pub fn new(bytes: impl Into<Arc<[u8]>>) -> Self {
        Self(bytes.into())
    }

    pub fn bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn from_base64(encoded: &str) -> Result<Self, base64::DecodeError> {
        let payload = match encoded.split_once(";base64,") {
            Some((_, data)) => data,
            None => encoded,
        };
        STANDARD.decode(payload.trim()).map(|bytes| Self(bytes.into()))
    }
}

impl fmt::Debug for ImageData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageData")
            .field("len", &self.0.len())
            .finish()
    }
}

impl Serialize for ImageData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(&self.0))
    }
}

impl<'de> Deserialize<'de> for ImageData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        Self::from_base64(&encoded).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_uri_prefix_is_stripped() {
        let plain = ImageData::from_base64("AQID").unwrap();
        let uri = ImageData::from_base64("data:image/png;base64,AQID").unwrap();
        assert_eq!(plain.bytes(), &[1, 2, 3]);
        assert_eq!(plain, uri);
    }

    #[test]
    fn test_invalid_base64_is_rejected() {
        assert!(serde_json::from_str::<ImageData>("\"***\"").is_err());
    }
}
