use crate::configuration::Configuration;
use crate::math::quadratic::analyzer::analyze;
use crate::math::quadratic::coefficientset::CoefficientSet;
use crate::math::quadratic::quadraticerror::QuadraticError;
use crate::math::quadratic::range::Range;
use crate::math::quadratic::validator::{
    validate,
    validate_coefficients,
    validate_range,
    validate_sampling
};
use crate::plot::caption::variant_label;
use crate::plot::plotspec::PlotSpec;
use crate::plot::plotspecbuilder::{
    CurveInput,
    PlotSpecBuilder
};
use crate::plot::sampler::sample;
use crate::request::{
    OverlayRequest,
    PlotRequest,
    Request
};

/// Runs requests through validation, analysis, sampling and plot assembly.
///
/// Every input is validated before any curve is analysed, so an error never
/// leaves a partially built `PlotSpec` behind.
pub struct QuadraticPlotter {
    configuration: Configuration,
    builder: PlotSpecBuilder
}

impl QuadraticPlotter {
    pub fn new(configuration: Configuration) -> QuadraticPlotter {
        let builder = PlotSpecBuilder::from_configuration(&configuration);
        QuadraticPlotter { configuration, builder }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    fn resolve(&self, range: Option<(f64, f64)>, samples: Option<usize>) -> ((f64, f64), usize) {
        (
            range.unwrap_or(self.configuration.default_range()),
            samples.unwrap_or(self.configuration.default_samples())
        )
    }

    fn curve(&self,
             coefficients: CoefficientSet,
             range: &Range,
             samples: usize,
             label: Option<String>) -> Result<CurveInput, QuadraticError> {
        let analysis = analyze(&coefficients);
        let series = sample(&coefficients, range, samples)?;
        Ok(CurveInput::new(coefficients, analysis, series, label))
    }

    pub fn plot(&self, request: &PlotRequest) -> Result<PlotSpec, QuadraticError> {
        let ((min, max), samples) = self.resolve(request.range, request.samples);
        let (coefficients, range) = validate(request.a, request.b, request.c, min, max)?;
        let samples = validate_sampling(&range, samples)?;
        let curve = self.curve(coefficients, &range, samples, None)?;
        Ok(self.builder.build_single(curve))
    }

    /// Each variant is validated on its own; the first invalid one is
    /// reported through `QuadraticError::VariantError` with its index.
    pub fn plot_overlay(&self, request: &OverlayRequest) -> Result<PlotSpec, QuadraticError> {
        if request.values.is_empty() {
            return Err(QuadraticError::EmptyOverlayError);
        }
        let ((min, max), samples) = self.resolve(request.range, request.samples);
        let range = validate_range(min, max)?;
        let samples = validate_sampling(&range, samples)?;

        let validated = request.variants()
            .into_iter()
            .enumerate()
            .map(|(index, (a, b, c))| {
                validate_coefficients(a, b, c).map_err(|error| error.in_variant(index))
            })
            .collect::<Result<Vec<CoefficientSet>, QuadraticError>>()?;

        let digits = self.builder.digits();
        let curves = validated.into_iter()
            .zip(request.values.iter())
            .map(|(coefficients, &value)| {
                let label = variant_label(request.varied, value, digits);
                self.curve(coefficients, &range, samples, Some(label))
            })
            .collect::<Result<Vec<CurveInput>, QuadraticError>>()?;

        log::debug!("overlay of {} curves varying {}", curves.len(), request.varied);
        Ok(self.builder.build_overlay(request.varied, curves))
    }

    pub fn run(&self, request: &Request) -> Result<PlotSpec, QuadraticError> {
        match request {
            Request::Single(single) => self.plot(single),
            Request::Overlay(overlay) => self.plot_overlay(overlay)
        }
    }
}

impl Default for QuadraticPlotter {
    fn default() -> QuadraticPlotter {
        QuadraticPlotter::new(Configuration::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::quadratic::coefficientset::VariedCoefficient;

    #[test]
    fn defaults_come_from_the_configuration() {
        let plotter = QuadraticPlotter::new(Configuration::new().with_default_range(-2.0, 2.0).with_default_samples(9));
        let spec = plotter.plot(&PlotRequest::new(1.0, 0.0, -1.0)).unwrap();
        let series = &spec.series()[0];
        assert_eq!(series.len(), 9);
        assert_eq!(series.points()[0].x(), -2.0);
        assert_eq!(series.points()[8].x(), 2.0);
    }

    #[test]
    fn request_values_override_the_defaults() {
        let plotter = QuadraticPlotter::default();
        let request = PlotRequest::new(1.0, 0.0, 0.0).with_range(0.0, 1.0).with_samples(3);
        let spec = plotter.plot(&request).unwrap();
        let xs: Vec<f64> = spec.series()[0].xs().collect();
        assert_eq!(xs, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn invalid_variant_reports_its_index() {
        let plotter = QuadraticPlotter::default();
        let request = OverlayRequest::new(1.0, 2.0, 3.0, VariedCoefficient::A, vec![1.0, 0.5, 0.0, 2.0]);
        let error = plotter.plot_overlay(&request).unwrap_err();
        match error {
            QuadraticError::VariantError { index, source } => {
                assert_eq!(index, 2);
                assert!(matches!(*source, QuadraticError::DegenerateInputError { field: "a", .. }));
            }
            other => panic!("expected VariantError, got {:?}", other)
        }
    }

    #[test]
    fn overlay_range_errors_are_not_attributed_to_a_variant() {
        let plotter = QuadraticPlotter::default();
        let request = OverlayRequest::new(1.0, 0.0, 0.0, VariedCoefficient::B, vec![1.0, 2.0])
            .with_range(5.0, -5.0);
        assert_eq!(
            plotter.plot_overlay(&request),
            Err(QuadraticError::InvalidRangeError { min: 5.0, max: -5.0 })
        );
    }

    #[test]
    fn overlay_too_narrow_for_its_samples_is_a_range_error() {
        let plotter = QuadraticPlotter::default();
        let next_after_one = f64::from_bits(1f64.to_bits() + 1);
        let request = OverlayRequest::new(1.0, 0.0, 0.0, VariedCoefficient::C, vec![0.0, 1.0])
            .with_range(1.0, next_after_one)
            .with_samples(3);
        assert_eq!(
            plotter.plot_overlay(&request),
            Err(QuadraticError::InvalidRangeError { min: 1.0, max: next_after_one })
        );
    }

    #[test]
    fn empty_overlay_is_rejected() {
        let plotter = QuadraticPlotter::default();
        let request = OverlayRequest::new(1.0, 0.0, 0.0, VariedCoefficient::C, vec![]);
        assert_eq!(plotter.plot_overlay(&request), Err(QuadraticError::EmptyOverlayError));
    }
}
