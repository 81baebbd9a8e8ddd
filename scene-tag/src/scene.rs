use std::fmt;
use std::path::Path;

use geojson::{JsonObject, JsonValue};
use tracing::debug;

use crate::collect::file_collect::read_document;
use crate::commons::basic_functions::{json_type_name, render_value, year_prefix};
use crate::error::ExtractError;
use crate::geo_core::GeoDocument;

pub const ID_KEY: &str = "id";
pub const COLLECTION_ID_KEY: &str = "c:id";
pub const DATETIME_KEY: &str = "datetime";

/// Label of a scene: acquisition year, collection id and scene id.
///
/// Displays as the tab separated line `year\tc:id\tid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneLabel {
    /// Everything before the first `-` of `datetime`
    pub year: String,
    /// Rendered `c:id` property
    pub collection_id: String,
    /// Rendered `id` property
    pub id: String,
}

impl SceneLabel {
    /// Build a label from a feature's properties.
    /// Keys are looked up in the order `id`, `c:id`, `datetime`.
    pub fn from_properties(properties: &JsonObject) -> Result<Self, ExtractError> {
        let id = lookup(properties, ID_KEY)?;
        let collection_id = lookup(properties, COLLECTION_ID_KEY)?;
        let datetime = lookup(properties, DATETIME_KEY)?;

        let datetime = datetime.as_str().ok_or_else(|| {
            ExtractError::resolution(
                property_path(DATETIME_KEY),
                format!("expected a string, found {}", json_type_name(datetime)),
            )
        })?;

        let label = SceneLabel {
            year: year_prefix(datetime).to_string(),
            collection_id: render_value(collection_id),
            id: render_value(id),
        };
        debug!(year = %label.year, collection_id = %label.collection_id, id = %label.id, "resolved scene label");
        Ok(label)
    }

    /// Build a label from the first feature of a document
    pub fn from_document(document: &GeoDocument) -> Result<Self, ExtractError> {
        Self::from_properties(document.first_properties()?)
    }
}

impl fmt::Display for SceneLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.year, self.collection_id, self.id)
    }
}

/// Read, parse and label the GeoJSON file at `path`
pub fn extract<P: AsRef<Path>>(path: P) -> Result<SceneLabel, ExtractError> {
    let bytes = read_document(path)?;
    let document = GeoDocument::from_slice(&bytes)?;
    SceneLabel::from_document(&document)
}

fn lookup<'a>(properties: &'a JsonObject, key: &str) -> Result<&'a JsonValue, ExtractError> {
    properties
        .get(key)
        .ok_or_else(|| ExtractError::resolution(property_path(key), "missing key"))
}

fn property_path(key: &str) -> String {
    format!("features[0].properties[{key:?}]")
}
