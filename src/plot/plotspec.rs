use serde::Serialize;

use crate::plot::annotatedfeature::{
    AnnotatedFeature,
    FeatureRole
};
use crate::plot::sampleseries::SampleSeries;

/// Renderer-agnostic description of one plot. Built once by
/// `PlotSpecBuilder` and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotSpec {
    title: String,
    subtitle: String,
    x_label: String,
    y_label: String,
    series: Vec<SampleSeries>,
    features: Vec<AnnotatedFeature>
}

impl PlotSpec {
    pub(crate) fn new(title: String,
                      subtitle: String,
                      x_label: String,
                      y_label: String,
                      series: Vec<SampleSeries>,
                      features: Vec<AnnotatedFeature>) -> PlotSpec {
        PlotSpec { title, subtitle, x_label, y_label, series, features }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    pub fn y_label(&self) -> &str {
        &self.y_label
    }

    pub fn series(&self) -> &[SampleSeries] {
        &self.series
    }

    pub fn features(&self) -> &[AnnotatedFeature] {
        &self.features
    }

    pub fn features_with_role(&self, role: FeatureRole) -> impl Iterator<Item = &AnnotatedFeature> {
        self.features.iter().filter(move |feature| feature.role() == role)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
