

pub trait Quadrature {
    /// Returns the estimate of the integral at the next refinement level.
    /// Each call reuses the sums accumulated by every previous call, so
    /// levels must be requested in order and the operation is never
    /// idempotent.
    fn next(&mut self) -> f64;
}
