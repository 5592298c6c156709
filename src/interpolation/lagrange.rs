//! Lagrange Interpolation
//!
//! Implements global polynomial interpolation in the
//! [Lagrange basis](https://en.wikipedia.org/wiki/Lagrange_polynomial).
//!
//! Each node `i` contributes a basis polynomial `L_i` that is 1 at that
//! node and 0 at every other node; the interpolant is `Σ y_i · L_i(x)`.

use crate::grid::SampleSet;
use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::traits::Interpolator;

/// Global Lagrange interpolating polynomial over a [`SampleSet`].
///
/// # Behavior
/// - [`Interpolator::eval`] computes the classical basis form
///   `L_i(x) = Π_{j≠i} (x − x_j)/(x_i − x_j)`, at `O(n²)` per query point.
/// - Any `x` is a valid query, including points outside the sample
///   interval. Extrapolation error grows rapidly with distance from the
///   interval, which is expected of a high-degree polynomial rather than
///   an error condition.
///
/// Distinct abscissas are a [`SampleSet`] construction invariant, so the
/// basis denominators are never zero.
#[derive(Debug, Clone, Copy)]
pub struct LagrangePolynomial<'a> {
    set: &'a SampleSet,
}

impl<'a> LagrangePolynomial<'a> {
    #[must_use]
    pub fn new(set: &'a SampleSet) -> Self {
        Self { set }
    }
}

impl Interpolator for LagrangePolynomial<'_> {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Lagrange
    }

    fn sample_set(&self) -> &SampleSet {
        self.set
    }

    fn eval(&self, x: f64) -> f64 {
        let points = self.set.points();
        let mut acc = 0.0;

        for (i, pi) in points.iter().enumerate() {
            let mut li = 1.0;
            for (j, pj) in points.iter().enumerate() {
                if i != j {
                    li *= (x - pj.x) / (pi.x - pj.x);
                }
            }
            acc += pi.y * li;
        }

        acc
    }
}
