pub mod collect;
pub mod commons;
pub mod error;
pub mod geo_core;
pub mod scene;

pub use error::ExtractError;
pub use geo_core::GeoDocument;
pub use scene::{extract, SceneLabel};
