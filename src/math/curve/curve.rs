/// A real-valued function of one variable that can be sampled pointwise.
pub trait Curve {
    fn value(&self, x: f64) -> f64;
}
