//! Layer-data record and styling types handed to the host viewer.

use serde::Serialize;

/// One renderable layer produced from one input file.
///
/// `data` holds one (N x 2) coordinate array per accepted shape; `metadata`
/// carries the styling arrays the host viewer expects alongside them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerData {
    pub data: Vec<Vec<[f64; 2]>>,
    pub metadata: ShapesMetadata,
    pub layer_type: LayerType,
}

/// Kind tag of the produced layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerType {
    Shapes,
}

impl LayerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayerType::Shapes => "shapes",
        }
    }
}

/// Shape kinds the converter emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    Polygon,
}

impl ShapeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeType::Polygon => "polygon",
        }
    }
}

/// Blending modes the host viewer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Blending {
    Opaque,
    Translucent,
    Additive,
}

/// Styling applied to every accepted shape in a file.
///
/// An explicit configuration record, built locally per call and passed down;
/// there is no process-wide styling state.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeDefaults {
    pub edge_width: f64,
    pub edge_color: String,
    pub face_color: String,
    pub opacity: f64,
    pub blending: Blending,
}

impl Default for ShapeDefaults {
    fn default() -> Self {
        ShapeDefaults {
            edge_width: 100.0,
            edge_color: "red".to_string(),
            face_color: "blue".to_string(),
            opacity: 0.25,
            blending: Blending::Opaque,
        }
    }
}

/// The styling mapping of a shapes layer, keyed exactly as the host expects:
/// `shape_type`, `edge_width`, `edge_color`, `face_color`, `opacity`,
/// `blending`.
///
/// The four per-shape arrays must stay the same length as the layer's `data`
/// array; [`ShapesMetadata::push_shape`] is the only append path, so they
/// advance together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapesMetadata {
    pub shape_type: Vec<ShapeType>,
    pub edge_width: Vec<f64>,
    pub edge_color: Vec<String>,
    pub face_color: Vec<String>,
    pub opacity: f64,
    pub blending: Blending,
}

impl ShapesMetadata {
    pub fn new(defaults: &ShapeDefaults) -> Self {
        ShapesMetadata {
            shape_type: Vec::new(),
            edge_width: Vec::new(),
            edge_color: Vec::new(),
            face_color: Vec::new(),
            opacity: defaults.opacity,
            blending: defaults.blending,
        }
    }

    /// Record one accepted shape with the default styling.
    // TODO: take styling read from the feature's `properties` once the host
    // contract for per-feature styles is settled.
    pub fn push_shape(&mut self, shape_type: ShapeType, defaults: &ShapeDefaults) {
        self.shape_type.push(shape_type);
        self.edge_width.push(defaults.edge_width);
        self.edge_color.push(defaults.edge_color.clone());
        self.face_color.push(defaults.face_color.clone());
    }

    /// Number of shapes recorded so far.
    pub fn len(&self) -> usize {
        self.shape_type.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shape_type.is_empty()
    }
}
