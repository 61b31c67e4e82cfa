use crate::configuration::Configuration;
use crate::math::quadratic::analyzer::AnalysisResult;
use crate::math::quadratic::coefficientset::{
    CoefficientSet,
    VariedCoefficient
};
use crate::plot::annotatedfeature::AnnotatedFeature;
use crate::plot::caption::{
    analysis_subtitle,
    format_number,
    function_title,
    overlay_title,
    point_label
};
use crate::plot::plotspec::PlotSpec;
use crate::plot::sampleseries::SampleSeries;

// ─────────────────────────────────────────────────────────────────────────────
// CurveInput
// ─────────────────────────────────────────────────────────────────────────────

/// One fully computed curve, ready to be placed on a plot.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveInput {
    coefficients: CoefficientSet,
    analysis: AnalysisResult,
    series: SampleSeries,
    label: Option<String>
}

impl CurveInput {
    pub fn new(coefficients: CoefficientSet,
               analysis: AnalysisResult,
               series: SampleSeries,
               label: Option<String>) -> CurveInput {
        CurveInput { coefficients, analysis, series, label }
    }

    pub fn coefficients(&self) -> &CoefficientSet {
        &self.coefficients
    }

    pub fn analysis(&self) -> &AnalysisResult {
        &self.analysis
    }

    pub fn series(&self) -> &SampleSeries {
        &self.series
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    fn into_series(self) -> SampleSeries {
        let label = self.label;
        self.series.with_label(label)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// PlotSpecBuilder
// ─────────────────────────────────────────────────────────────────────────────

pub struct PlotSpecBuilder {
    digits: u32,
    x_label: String,
    y_label: String
}

impl PlotSpecBuilder {
    pub fn new(digits: u32, x_label: String, y_label: String) -> PlotSpecBuilder {
        PlotSpecBuilder { digits, x_label, y_label }
    }

    pub fn from_configuration(configuration: &Configuration) -> PlotSpecBuilder {
        PlotSpecBuilder::new(
            configuration.label_digits(),
            configuration.x_label().to_owned(),
            configuration.y_label().to_owned())
    }

    pub fn digits(&self) -> u32 {
        self.digits
    }

    fn features(&self, analysis: &AnalysisResult) -> Vec<AnnotatedFeature> {
        let vertex = analysis.vertex();
        let axis = analysis.axis_of_symmetry();
        let mut features = vec![
            AnnotatedFeature::vertex_marker(
                vertex,
                format!("Vertex {}", point_label(vertex.x(), vertex.y(), self.digits))),
            AnnotatedFeature::axis_of_symmetry(
                axis,
                format!("x = {}", format_number(axis, self.digits)))
        ];
        // Near-coincident TwoRoots still get two markers.
        features.extend(analysis.root_result().roots().into_iter().map(|x| {
            AnnotatedFeature::root_marker(x, format!("Root {}", point_label(x, 0.0, self.digits)))
        }));
        features
    }

    /// One curve with its vertex, axis of symmetry and real roots marked.
    pub fn build_single(&self, curve: CurveInput) -> PlotSpec {
        let title = function_title(curve.coefficients(), self.digits);
        let subtitle = analysis_subtitle(curve.analysis(), self.digits);
        let features = self.features(curve.analysis());
        PlotSpec::new(
            title,
            subtitle,
            self.x_label.clone(),
            self.y_label.clone(),
            vec![curve.into_series()],
            features)
    }

    /// Several curves that differ only in `varied`, each series tagged with
    /// its own label. No per-curve markers are attached.
    pub fn build_overlay(&self, varied: VariedCoefficient, curves: Vec<CurveInput>) -> PlotSpec {
        let values: Vec<f64> = curves.iter()
            .map(|curve| curve.coefficients().get(varied))
            .collect();
        let title = match curves.first() {
            Some(first) => overlay_title(varied, first.coefficients(), &values, self.digits),
            None => String::new()
        };
        let subtitle = format!("{} curves varying {}", curves.len(), varied);
        let series = curves.into_iter()
            .map(CurveInput::into_series)
            .collect();
        PlotSpec::new(
            title,
            subtitle,
            self.x_label.clone(),
            self.y_label.clone(),
            series,
            Vec::new())
    }

    /// Dispatches on arity: a single curve gets full annotations, several
    /// curves are overlaid.
    pub fn build(&self, varied: VariedCoefficient, curves: Vec<CurveInput>) -> PlotSpec {
        match <[CurveInput; 1]>::try_from(curves) {
            Ok([curve]) => self.build_single(curve),
            Err(curves) => self.build_overlay(varied, curves)
        }
    }
}
