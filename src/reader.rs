//! Parses GeoJSON files into shapes-layer records.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use geo::{Geometry, Polygon, Validation};
use geojson::Feature;
use log::debug;
use serde_json::Value as JsonValue;

use crate::layer::{LayerData, LayerType, ShapeDefaults, ShapeType, ShapesMetadata};
use crate::{Error, Result};

/// Parse a list of `.geojson` files into layer-data records, one per path,
/// in input order.
///
/// Every accepted shape in a file gets the same default styling; the first
/// failing file aborts the whole call. This is the function handed out by
/// [`crate::get_reader`].
pub fn read_geojson(paths: &[PathBuf]) -> Result<Vec<LayerData>> {
    let defaults = ShapeDefaults::default();
    paths.iter().map(|path| read_layer(path, &defaults)).collect()
}

/// Parse one GeoJSON file into a single shapes-layer record.
///
/// The top-level object must be a `FeatureCollection` (type compared
/// case-insensitively); anything else is [`Error::NotAFeatureCollection`].
/// Features with a missing, unparseable, or invalid geometry are skipped
/// without a signal, as are geometry types the shapes layer does not convert
/// yet (`Point` and `LineString` are recognized but produce no output).
pub fn read_layer(path: &Path, defaults: &ShapeDefaults) -> Result<LayerData> {
    let file = File::open(path)?;
    let mut root: JsonValue = serde_json::from_reader(BufReader::new(file))?;

    let kind = root.get("type").and_then(JsonValue::as_str).unwrap_or("");
    if !kind.eq_ignore_ascii_case("featurecollection") {
        return Err(Error::NotAFeatureCollection(kind.to_owned()));
    }

    let features: Vec<Feature> = serde_json::from_value(
        root.get_mut("features")
            .map(JsonValue::take)
            .unwrap_or(JsonValue::Null),
    )?;
    debug!("{}: {} features", path.display(), features.len());

    let mut data = Vec::new();
    let mut metadata = ShapesMetadata::new(defaults);

    for feature in features {
        let Some(geometry) = feature.geometry else {
            continue;
        };
        let shape = match Geometry::<f64>::try_from(geometry.value) {
            Ok(shape) => shape,
            Err(_) => continue,
        };
        if !shape.is_valid() {
            continue;
        }
        match shape {
            // Recognized, not converted yet: no data, no style entries.
            Geometry::Point(_) | Geometry::LineString(_) => {}
            Geometry::Polygon(polygon) => {
                metadata.push_shape(ShapeType::Polygon, defaults);
                data.push(exterior_xy(&polygon));
            }
            // Multi* and GeometryCollection are not shapes-layer material.
            _ => {}
        }
    }
    debug!("{}: converted {} shapes", path.display(), data.len());

    Ok(LayerData {
        data,
        metadata,
        layer_type: LayerType::Shapes,
    })
}

// Exterior ring only, holes dropped. The closing vertex that repeats the
// first stays in, so a ring of n vertices yields an (n x 2) array.
fn exterior_xy(polygon: &Polygon<f64>) -> Vec<[f64; 2]> {
    polygon.exterior().coords().map(|c| [c.x, c.y]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::LineString;

    #[test]
    fn exterior_xy_keeps_ring_order_and_closing_vertex() {
        let polygon = Polygon::new(
            LineString::from(vec![
                (0.0, 0.0),
                (0.0, 1.0),
                (1.0, 1.0),
                (1.0, 0.0),
                (0.0, 0.0),
            ]),
            vec![],
        );
        let xy = exterior_xy(&polygon);
        assert_eq!(
            xy,
            vec![[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]]
        );
    }

    #[test]
    fn exterior_xy_ignores_holes() {
        let polygon = Polygon::new(
            LineString::from(vec![
                (0.0, 0.0),
                (0.0, 4.0),
                (4.0, 4.0),
                (4.0, 0.0),
                (0.0, 0.0),
            ]),
            vec![LineString::from(vec![
                (1.0, 1.0),
                (1.0, 2.0),
                (2.0, 2.0),
                (2.0, 1.0),
                (1.0, 1.0),
            ])],
        );
        assert_eq!(exterior_xy(&polygon).len(), 5);
    }
}
