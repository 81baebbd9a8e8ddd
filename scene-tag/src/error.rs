use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a scene from being labelled.
///
/// Nothing here is recovered from: the binary reports the error and exits
/// without writing to stdout.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The input path is missing or unreadable
    #[error("failed to read {}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not valid JSON (including invalid UTF-8)
    #[error("failed to parse GeoJSON")]
    Parse {
        #[from]
        source: serde_json::Error,
    },

    /// A member needed to build the label is absent or has the wrong shape
    #[error("{path}: {reason}")]
    Resolution { path: String, reason: String },
}

impl ExtractError {
    pub fn resolution(path: impl Into<String>, reason: impl Into<String>) -> Self {
        ExtractError::Resolution {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Stable name of the error class, used in the CLI error line and logs
    pub fn kind(&self) -> &'static str {
        match self {
            ExtractError::FileAccess { .. } => "FileAccessError",
            ExtractError::Parse { .. } => "ParseError",
            ExtractError::Resolution { .. } => "ResolutionError",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let file = ExtractError::FileAccess {
            path: PathBuf::from("scenes.geojson"),
            source: io_err,
        };
        assert_eq!(file.kind(), "FileAccessError");

        let parse: ExtractError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert_eq!(parse.kind(), "ParseError");

        let missing = ExtractError::resolution("features", "missing key");
        assert_eq!(missing.kind(), "ResolutionError");
    }

    #[test]
    fn test_resolution_message_names_path() {
        let err = ExtractError::resolution("features[0].properties[\"c:id\"]", "missing key");
        assert_eq!(
            err.to_string(),
            "features[0].properties[\"c:id\"]: missing key"
        );
    }

    #[test]
    fn test_file_access_keeps_source() {
        use std::error::Error as _;

        let err = ExtractError::FileAccess {
            path: PathBuf::from("/nope/scenes.geojson"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "failed to read /nope/scenes.geojson");
        assert_eq!(err.source().map(|s| s.to_string()), Some("gone".to_string()));
    }
}
