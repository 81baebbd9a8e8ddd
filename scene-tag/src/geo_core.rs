use std::str::FromStr;

use geojson::{FeatureCollection, JsonObject, JsonValue};
use tracing::{debug, trace};

use crate::commons::basic_functions::json_type_name;
use crate::error::ExtractError;

/// A parsed GeoJSON document.
///
/// The document is kept as raw JSON rather than a typed `GeoJson` value:
/// only `features[0].properties` is ever read, and files that omit `type`
/// or `geometry` members are still accepted.
#[derive(Debug, Clone)]
pub struct GeoDocument {
    root: JsonValue,
}

impl GeoDocument {
    /// Parse a document from raw file bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ExtractError> {
        let root: JsonValue = serde_json::from_slice(bytes)?;
        trace!(kind = json_type_name(&root), "parsed document root");
        Ok(GeoDocument { root })
    }

    /// Parse a document from text
    pub fn parse(text: &str) -> Result<Self, ExtractError> {
        Self::from_slice(text.as_bytes())
    }

    /// The `features` array of the document
    pub fn features(&self) -> Result<&[JsonValue], ExtractError> {
        let root = self.root.as_object().ok_or_else(|| {
            ExtractError::resolution(
                "$",
                format!("expected an object, found {}", json_type_name(&self.root)),
            )
        })?;

        let features = root
            .get("features")
            .ok_or_else(|| ExtractError::resolution("features", "missing key"))?;

        features.as_array().map(Vec::as_slice).ok_or_else(|| {
            ExtractError::resolution(
                "features",
                format!("expected an array, found {}", json_type_name(features)),
            )
        })
    }

    /// The `properties` object of the first feature.
    /// Later features are never inspected.
    pub fn first_properties(&self) -> Result<&JsonObject, ExtractError> {
        let features = self.features()?;
        debug!(count = features.len(), "document features");

        let first = features
            .first()
            .ok_or_else(|| ExtractError::resolution("features[0]", "features array is empty"))?;

        let feature = first.as_object().ok_or_else(|| {
            ExtractError::resolution(
                "features[0]",
                format!("expected an object, found {}", json_type_name(first)),
            )
        })?;

        let properties = feature
            .get("properties")
            .ok_or_else(|| ExtractError::resolution("features[0].properties", "missing key"))?;

        properties.as_object().ok_or_else(|| {
            ExtractError::resolution(
                "features[0].properties",
                format!("expected an object, found {}", json_type_name(properties)),
            )
        })
    }
}

impl FromStr for GeoDocument {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<&FeatureCollection> for GeoDocument {
    fn from(collection: &FeatureCollection) -> Self {
        GeoDocument {
            root: JsonValue::Object(JsonObject::from(collection)),
        }
    }
}
