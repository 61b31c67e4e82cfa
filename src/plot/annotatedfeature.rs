use serde::Serialize;

use crate::math::quadratic::analyzer::Vertex;

/// What a highlighted feature means. Renderers pick the styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureRole {
    Vertex,
    Root,
    AxisOfSymmetry
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeatureGeometry {
    Point {
        x: f64,
        y: f64
    },
    VerticalLine {
        x: f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedFeature {
    role: FeatureRole,
    geometry: FeatureGeometry,
    label: String
}

impl AnnotatedFeature {
    pub fn new(role: FeatureRole, geometry: FeatureGeometry, label: String) -> AnnotatedFeature {
        AnnotatedFeature { role, geometry, label }
    }

    pub fn vertex_marker(vertex: &Vertex, label: String) -> AnnotatedFeature {
        AnnotatedFeature::new(
            FeatureRole::Vertex,
            FeatureGeometry::Point { x: vertex.x(), y: vertex.y() },
            label)
    }

    pub fn root_marker(x: f64, label: String) -> AnnotatedFeature {
        AnnotatedFeature::new(FeatureRole::Root, FeatureGeometry::Point { x, y: 0.0 }, label)
    }

    pub fn axis_of_symmetry(x: f64, label: String) -> AnnotatedFeature {
        AnnotatedFeature::new(FeatureRole::AxisOfSymmetry, FeatureGeometry::VerticalLine { x }, label)
    }

    pub fn role(&self) -> FeatureRole {
        self.role
    }

    pub fn geometry(&self) -> &FeatureGeometry {
        &self.geometry
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Horizontal position shared by both geometries.
    pub fn x(&self) -> f64 {
        match self.geometry {
            FeatureGeometry::Point { x, .. } => x,
            FeatureGeometry::VerticalLine { x } => x
        }
    }
}
