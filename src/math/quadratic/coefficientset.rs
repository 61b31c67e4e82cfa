use std::fmt;

use serde::{
    Deserialize,
    Serialize
};

use crate::math::curve::curve::Curve;

// ─────────────────────────────────────────────────────────────────────────────
// CoefficientSet
// ─────────────────────────────────────────────────────────────────────────────

/// The `(a, b, c)` triple of `f(x) = a·x² + b·x + c`.
///
/// Only the validator builds one, so a value of this type always has finite
/// coefficients and `a ≠ 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoefficientSet {
    a: f64,
    b: f64,
    c: f64
}

impl CoefficientSet {
    pub(crate) fn new(a: f64, b: f64, c: f64) -> CoefficientSet {
        CoefficientSet { a, b, c }
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    pub fn get(&self, coefficient: VariedCoefficient) -> f64 {
        match coefficient {
            VariedCoefficient::A => self.a,
            VariedCoefficient::B => self.b,
            VariedCoefficient::C => self.c
        }
    }
}

impl Curve for CoefficientSet {
    fn value(&self, x: f64) -> f64 {
        // Horner form: (a·x + b)·x + c
        f64::mul_add(f64::mul_add(self.a, x, self.b), x, self.c)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// VariedCoefficient
// ─────────────────────────────────────────────────────────────────────────────

/// Which coefficient an overlay sweeps across its list of values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariedCoefficient {
    A,
    B,
    C
}

impl VariedCoefficient {
    pub fn symbol(&self) -> &'static str {
        match self {
            VariedCoefficient::A => "a",
            VariedCoefficient::B => "b",
            VariedCoefficient::C => "c"
        }
    }

    /// Replaces the varied member of a raw `(a, b, c)` triple with `value`.
    pub fn apply(&self, base: (f64, f64, f64), value: f64) -> (f64, f64, f64) {
        let (a, b, c) = base;
        match self {
            VariedCoefficient::A => (value, b, c),
            VariedCoefficient::B => (a, value, c),
            VariedCoefficient::C => (a, b, value)
        }
    }
}

impl fmt::Display for VariedCoefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
