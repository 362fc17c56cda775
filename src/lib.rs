//! GeoJSON reader adapter for a shapes layer.
//!
//! Turns `.geojson` files holding a `FeatureCollection` into the layer-data
//! records a host viewer expects for its shapes layer: per-polygon coordinate
//! arrays plus a fixed-key styling metadata mapping. The host discovers the
//! adapter by calling [`get_reader`] with a candidate path; when the path
//! looks like GeoJSON it gets back the [`read_geojson`] parser to invoke with
//! the same path (or a list of paths).

use std::path::{Path, PathBuf};

pub mod layer;
pub mod reader;

pub use layer::{Blending, LayerData, LayerType, ShapeDefaults, ShapeType, ShapesMetadata};
pub use reader::{read_geojson, read_layer};

/// Result type alias for reader operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for reader operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The top-level GeoJSON object was something other than a
    /// `FeatureCollection`. Carries the type string actually found.
    #[error("need a FeatureCollection as annotation, got: {0}")]
    NotAFeatureCollection(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// The parser signature the host registry stores and calls back.
pub type ReaderFn = fn(&[PathBuf]) -> Result<Vec<LayerData>>;

/// Discovery hook: decide by file extension whether this adapter applies.
///
/// Returns the parser for paths ending in `.geojson` (case-insensitive) and
/// `None` for everything else. Never reads file contents; the host probes
/// many readers with the same path and expects a cheap answer.
pub fn get_reader(path: &Path) -> Option<ReaderFn> {
    let ext = path.extension()?.to_str()?;
    if ext.eq_ignore_ascii_case("geojson") {
        Some(reader::read_geojson)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_geojson_extension() {
        assert!(get_reader(Path::new("annotations.geojson")).is_some());
        assert!(get_reader(Path::new("/data/cells/2024.GeoJSON")).is_some());
    }

    #[test]
    fn rejects_other_extensions() {
        assert!(get_reader(Path::new("annotations.json")).is_none());
        assert!(get_reader(Path::new("annotations.geojson.gz")).is_none());
        assert!(get_reader(Path::new("image.tif")).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn rejects_non_utf8_extensions() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new(OsStr::from_bytes(b"cells.geojso\xff"));
        assert!(path.extension().is_some());
        assert!(get_reader(path).is_none());
    }

    #[test]
    fn rejects_paths_without_extension() {
        assert!(get_reader(Path::new("geojson")).is_none());
        assert!(get_reader(Path::new("/tmp/")).is_none());
        assert!(get_reader(Path::new("")).is_none());
    }
}
