use std::fs::File;
use std::io::BufReader;

use serde::{
    Deserialize,
    Serialize
};

use crate::math::quadratic::coefficientset::VariedCoefficient;
use crate::quadploterror::QuadPlotError;

// ─────────────────────────────────────────────────────────────────────────────
// PlotRequest
// ─────────────────────────────────────────────────────────────────────────────

/// A single curve. Values are raw and unvalidated; `range` and `samples`
/// fall back to the configuration when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotRequest {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    #[serde(default)]
    pub range: Option<(f64, f64)>,
    #[serde(default)]
    pub samples: Option<usize>
}

impl PlotRequest {
    pub fn new(a: f64, b: f64, c: f64) -> PlotRequest {
        PlotRequest { a, b, c, range: None, samples: None }
    }

    pub fn with_range(mut self, min: f64, max: f64) -> PlotRequest {
        self.range = Some((min, max));
        self
    }

    pub fn with_samples(mut self, samples: usize) -> PlotRequest {
        self.samples = Some(samples);
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// OverlayRequest
// ─────────────────────────────────────────────────────────────────────────────

/// A family of curves sharing two coefficients while `varied` sweeps through
/// `values`. The base value of the varied coefficient is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayRequest {
    #[serde(default)]
    pub a: f64,
    #[serde(default)]
    pub b: f64,
    #[serde(default)]
    pub c: f64,
    pub varied: VariedCoefficient,
    pub values: Vec<f64>,
    #[serde(default)]
    pub range: Option<(f64, f64)>,
    #[serde(default)]
    pub samples: Option<usize>
}

impl OverlayRequest {
    pub fn new(a: f64, b: f64, c: f64, varied: VariedCoefficient, values: Vec<f64>) -> OverlayRequest {
        OverlayRequest { a, b, c, varied, values, range: None, samples: None }
    }

    pub fn with_range(mut self, min: f64, max: f64) -> OverlayRequest {
        self.range = Some((min, max));
        self
    }

    pub fn with_samples(mut self, samples: usize) -> OverlayRequest {
        self.samples = Some(samples);
        self
    }

    /// Raw `(a, b, c)` triple of every variant, in request order.
    pub fn variants(&self) -> Vec<(f64, f64, f64)> {
        let base = (self.a, self.b, self.c);
        self.values.iter()
            .map(|&value| self.varied.apply(base, value))
            .collect()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Request
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Request {
    Single(PlotRequest),
    Overlay(OverlayRequest)
}

impl Request {
    pub fn from_reader(file_path: &str) -> Result<Request, QuadPlotError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let request: Request = serde_json::from_reader(reader)?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_request_parses_with_optional_fields_missing() {
        let request: Request = serde_json::from_str(r#"{ "kind": "single", "a": 2, "b": -4, "c": 1 }"#).unwrap();
        assert_eq!(request, Request::Single(PlotRequest::new(2.0, -4.0, 1.0)));
    }

    #[test]
    fn overlay_request_parses_range_and_values() {
        let json = r#"{
            "kind": "overlay",
            "b": 0, "c": -1,
            "varied": "a",
            "values": [0.5, 1, 2],
            "range": [-5, 5],
            "samples": 101
        }"#;
        let request: Request = serde_json::from_str(json).unwrap();
        let expected = OverlayRequest::new(0.0, 0.0, -1.0, VariedCoefficient::A, vec![0.5, 1.0, 2.0])
            .with_range(-5.0, 5.0)
            .with_samples(101);
        assert_eq!(request, Request::Overlay(expected));
    }

    #[test]
    fn variants_substitute_the_varied_coefficient() {
        let request = OverlayRequest::new(1.0, 0.0, 0.0, VariedCoefficient::C, vec![-1.0, 0.0, 1.0]);
        assert_eq!(request.variants(), vec![(1.0, 0.0, -1.0), (1.0, 0.0, 0.0), (1.0, 0.0, 1.0)]);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let result = serde_json::from_str::<Request>(r#"{ "kind": "cubic", "a": 1 }"#);
        assert!(result.is_err());
    }
}
