use serde::Serialize;

use crate::math::curve::curve::Curve;
use crate::math::quadratic::coefficientset::CoefficientSet;

/// Relative size of the discriminant, against `b²` and `|4ac|`, under which
/// two distinct roots are reported as numerically coincident.
pub const COINCIDENT_ROOT_TOLERANCE: f64 = 1e-12;

// ─────────────────────────────────────────────────────────────────────────────
// Vertex / RootResult
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Vertex {
    x: f64,
    y: f64
}

impl Vertex {
    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

/// Real roots of the quadratic, classified by the sign of the discriminant.
///
/// A zero discriminant yields `OneRoot` rather than a repeated pair, so
/// callers must match on the variant instead of assuming two roots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RootResult {
    NoRealRoots,
    OneRoot(f64),
    /// Always ordered `x1 < x2`.
    TwoRoots(f64, f64)
}

impl RootResult {
    pub fn roots(&self) -> Vec<f64> {
        match *self {
            RootResult::NoRealRoots => Vec::new(),
            RootResult::OneRoot(x) => vec![x],
            RootResult::TwoRoots(x1, x2) => vec![x1, x2]
        }
    }

    pub fn count(&self) -> usize {
        match self {
            RootResult::NoRealRoots => 0,
            RootResult::OneRoot(_) => 1,
            RootResult::TwoRoots(_, _) => 2
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// AnalysisResult
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnalysisResult {
    vertex: Vertex,
    discriminant: f64,
    root_result: RootResult,
    opens_upward: bool
}

impl AnalysisResult {
    pub fn vertex(&self) -> &Vertex {
        &self.vertex
    }

    pub fn discriminant(&self) -> f64 {
        self.discriminant
    }

    pub fn root_result(&self) -> &RootResult {
        &self.root_result
    }

    /// The vertex is a minimum when `a > 0` and a maximum otherwise.
    pub fn opens_upward(&self) -> bool {
        self.opens_upward
    }

    pub fn axis_of_symmetry(&self) -> f64 {
        self.vertex.x
    }
}

pub fn discriminant(coefficients: &CoefficientSet) -> f64 {
    let (a, b, c) = (coefficients.a(), coefficients.b(), coefficients.c());
    b * b - 4.0 * a * c
}

pub fn vertex(coefficients: &CoefficientSet) -> Vertex {
    let x = -coefficients.b() / (2.0 * coefficients.a());
    Vertex { x, y: coefficients.value(x) }
}

/// Roots of `a·x² + b·x + c` for a known discriminant.
///
/// Uses `q = -(b + sign(b)·√d) / 2`, `x = q / a` and `x = c / q`, so the
/// smaller-magnitude root never comes from subtracting nearly equal terms.
pub(crate) fn classify_roots(coefficients: &CoefficientSet, discriminant: f64, vertex_x: f64) -> RootResult {
    if discriminant < 0.0 {
        RootResult::NoRealRoots
    } else if discriminant == 0.0 {
        RootResult::OneRoot(vertex_x)
    } else {
        let (a, b, c) = (coefficients.a(), coefficients.b(), coefficients.c());
        let q = -0.5 * (b + b.signum() * discriminant.sqrt());
        let lhs = q / a;
        let rhs = c / q;
        if lhs <= rhs {
            RootResult::TwoRoots(lhs, rhs)
        } else {
            RootResult::TwoRoots(rhs, lhs)
        }
    }
}

fn roots_coincide(coefficients: &CoefficientSet, discriminant: f64) -> bool {
    let (a, b, c) = (coefficients.a(), coefficients.b(), coefficients.c());
    let scale = f64::max(b * b, (4.0 * a * c).abs());
    discriminant.abs() <= COINCIDENT_ROOT_TOLERANCE * scale
}

/// Closed-form analysis of a validated quadratic. Cannot fail.
pub fn analyze(coefficients: &CoefficientSet) -> AnalysisResult {
    let vertex = vertex(coefficients);
    let discriminant = discriminant(coefficients);
    let root_result = classify_roots(coefficients, discriminant, vertex.x);

    if let RootResult::TwoRoots(x1, x2) = root_result {
        if roots_coincide(coefficients, discriminant) {
            log::warn!("discriminant {:e} is within rounding of zero, roots {} and {} nearly coincide",
                       discriminant, x1, x2);
        }
    }
    log::debug!("vertex = ({}, {}), discriminant = {}, roots = {:?}",
                vertex.x, vertex.y, discriminant, root_result);

    AnalysisResult {
        vertex,
        discriminant,
        root_result,
        opens_upward: coefficients.a() > 0.0
    }
}
