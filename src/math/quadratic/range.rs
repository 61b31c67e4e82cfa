use serde::Serialize;

/// Closed sampling interval `[min, max]` with `min < max`, both finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Range {
    min: f64,
    max: f64
}

impl Range {
    pub(crate) fn new(min: f64, max: f64) -> Range {
        Range { min, max }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }
}
