use crate::math::quadrature::quadrature::Quadrature;

/// Closed-formula trapezoidal rule with successive refinement.
///
/// Level 1 uses only the two endpoints. Every later level doubles the panel
/// count and samples just the midpoints of the previous level's panels, so
/// the running estimate after level k equals the composite trapezoidal rule
/// on 2^(k-1) panels while no abscissa is ever evaluated twice.
///
/// Assumes `a < b`; the integrand must be defined at both endpoints.
pub struct TrapezoidalRule<'a, F: Fn(f64) -> f64> {
    func: &'a F,
    a: f64,
    b: f64,
    s: f64,
    n: u32,
}

impl<'a, F: Fn(f64) -> f64> TrapezoidalRule<'a, F> {
    pub fn new(func: &'a F, a: f64, b: f64) -> TrapezoidalRule<'a, F> {
        TrapezoidalRule { func, a, b, s: 0.0, n: 0 }
    }
}

impl<'a, F: Fn(f64) -> f64> Quadrature for TrapezoidalRule<'a, F> {
    fn next(&mut self) -> f64 {
        self.n += 1;
        if self.n == 1 {
            self.s = 0.5 * (self.b - self.a) * ((self.func)(self.a) + (self.func)(self.b));
        } else {
            let it = 1_usize << (self.n - 2);
            let tnm = it as f64;
            let del = (self.b - self.a) / tnm;
            let mut x = self.a + 0.5 * del;
            let mut sum = 0.0;
            for _ in 0..it {
                sum += (self.func)(x);
                x += del;
            }
            self.s = 0.5 * (self.s + (self.b - self.a) * sum / tnm);
        }
        self.s
    }
}
