use rust_decimal::Decimal;

use crate::math::quadratic::analyzer::{
    AnalysisResult,
    RootResult
};
use crate::math::quadratic::coefficientset::{
    CoefficientSet,
    VariedCoefficient
};

// ─────────────────────────────────────────────────────────────────────────────
// Numbers
// ─────────────────────────────────────────────────────────────────────────────

/// Rounds `value` to `digits` decimal places (half to even) and prints it
/// without trailing zeros, so `2.0` reads `2` and `-0.001` reads `0`.
/// Magnitudes beyond `Decimal` print in scientific notation (`1.00e200`).
pub fn format_number(value: f64, digits: u32) -> String {
    match Decimal::from_f64_retain(value) {
        Some(decimal) => decimal.round_dp(digits).normalize().to_string(),
        // out of Decimal's range
        None => format!("{:.*e}", digits as usize, value)
    }
}

pub fn point_label(x: f64, y: f64, digits: u32) -> String {
    format!("({}, {})", format_number(x, digits), format_number(y, digits))
}

// ─────────────────────────────────────────────────────────────────────────────
// Titles
// ─────────────────────────────────────────────────────────────────────────────

fn equation(a: &str, b: &str, c: &str) -> String {
    format!("y = {}x² + {}x + {}", a, b, c)
}

pub fn function_title(coefficients: &CoefficientSet, digits: u32) -> String {
    equation(
        &format_number(coefficients.a(), digits),
        &format_number(coefficients.b(), digits),
        &format_number(coefficients.c(), digits))
}

/// Title shared by an overlay: the varied coefficient stays symbolic and the
/// swept values are listed after the equation.
pub fn overlay_title(varied: VariedCoefficient,
                     coefficients: &CoefficientSet,
                     values: &[f64],
                     digits: u32) -> String {
    let term = |coefficient: VariedCoefficient| {
        if coefficient == varied {
            coefficient.symbol().to_owned()
        } else {
            format_number(coefficients.get(coefficient), digits)
        }
    };
    let listed: Vec<String> = values.iter().map(|&v| format_number(v, digits)).collect();
    format!("{}, {} ∈ {{{}}}",
            equation(&term(VariedCoefficient::A), &term(VariedCoefficient::B), &term(VariedCoefficient::C)),
            varied.symbol(),
            listed.join(", "))
}

pub fn variant_label(varied: VariedCoefficient, value: f64, digits: u32) -> String {
    format!("{} = {}", varied.symbol(), format_number(value, digits))
}

// ─────────────────────────────────────────────────────────────────────────────
// Subtitles
// ─────────────────────────────────────────────────────────────────────────────

pub fn roots_summary(root_result: &RootResult, digits: u32) -> String {
    match *root_result {
        RootResult::NoRealRoots => "No real roots".to_owned(),
        RootResult::OneRoot(x) => format!("Root: x = {}", format_number(x, digits)),
        RootResult::TwoRoots(x1, x2) => format!("Roots: x = {}, x = {}",
                                                format_number(x1, digits),
                                                format_number(x2, digits))
    }
}

pub fn analysis_subtitle(analysis: &AnalysisResult, digits: u32) -> String {
    let extremum = if analysis.opens_upward() { "minimum" } else { "maximum" };
    let vertex = analysis.vertex();
    format!("Vertex ({}): {} | {}",
            extremum,
            point_label(vertex.x(), vertex.y(), digits),
            roots_summary(analysis.root_result(), digits))
}
