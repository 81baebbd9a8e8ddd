use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::ExtractError;

/// Read a GeoJSON document from disk.
///
/// The bytes are returned undecoded so that UTF-8 problems surface as a
/// parse error rather than a file access error.
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, ExtractError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| ExtractError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), bytes = bytes.len(), "read GeoJSON document");
    Ok(bytes)
}
