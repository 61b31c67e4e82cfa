use serde::Serialize;

use crate::math::curve::point2d::Point2D;

/// An ordered run of `(x, y)` samples with strictly increasing `x`,
/// optionally labelled when several curves share one plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleSeries {
    label: Option<String>,
    points: Vec<Point2D>
}

impl SampleSeries {
    pub(crate) fn new(points: Vec<Point2D>) -> SampleSeries {
        SampleSeries { label: None, points }
    }

    pub fn with_label(mut self, label: Option<String>) -> SampleSeries {
        self.label = label;
        self
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|pt| pt.x())
    }

    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|pt| pt.y())
    }
}
