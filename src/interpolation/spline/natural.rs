//! Natural Cubic Spline
//!
//! Implements [natural cubic spline](https://en.wikipedia.org/wiki/Spline_interpolation)
//! interpolation: piecewise cubics with continuous value, first and second
//! derivative across the nodes, and zero second derivative at both
//! endpoints.
//!
//! The per-node second derivatives come from the continuity system,
//! assembled densely and solved by [`gauss::solve`]. Evaluation applies
//! the closed form in the second derivatives directly; no per-segment
//! coefficient arrays are derived.

use nalgebra::{DMatrix, DVector};

use crate::grid::SampleSet;
use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::spline::helpers::{find_segment, spacings};
use crate::interpolation::traits::Interpolator;
use crate::linalg::gauss;

/// Natural cubic spline model over a [`SampleSet`].
///
/// # Fields
/// - `set`   : interpolation nodes
/// - `gamma` : second derivative at each node, one per point
/// - `h`     : segment widths, one per segment
#[derive(Debug, Clone)]
pub struct NaturalSpline<'a> {
    set: &'a SampleSet,
    gamma: Vec<f64>,
    h: Vec<f64>,
}

impl<'a> NaturalSpline<'a> {
    /// Builds the spline model for `set`.
    ///
    /// # Behavior
    /// Assembles the `(n+1)×(n+1)` system for the second derivatives
    /// `γ_0..γ_n`:
    /// - rows 0 and `n` pin the natural boundary, `γ_0 = γ_n = 0`
    /// - interior row `i`:
    ///   `h_{i−1}·γ_{i−1} + 2(h_{i−1}+h_i)·γ_i + h_i·γ_{i+1}
    ///    = 6·[(y_{i+1}−y_i)/h_i − (y_i−y_{i−1})/h_{i−1}]`
    ///
    /// The matrix is tridiagonal and diagonally dominant for positive
    /// segment widths, so the no-pivoting elimination in
    /// [`gauss::solve`] is stable on it.
    ///
    /// # Errors
    /// - [`InterpolationError::Singular`] if the system cannot be solved;
    ///   unreachable for sets that satisfy the [`SampleSet`] spacing
    ///   invariant.
    pub fn new(set: &'a SampleSet) -> Result<Self, InterpolationError> {
        let points = set.points();
        let n = points.len() - 1;

        let h = spacings(points);

        let size = n + 1;
        let mut matrix = DMatrix::<f64>::zeros(size, size);
        let mut rhs = DVector::<f64>::zeros(size);

        // natural boundary rows
        matrix[(0, 0)] = 1.0;
        matrix[(n, n)] = 1.0;

        for i in 1..n {
            matrix[(i, i - 1)] = h[i - 1];
            matrix[(i, i)] = 2.0 * (h[i - 1] + h[i]);
            matrix[(i, i + 1)] = h[i];
            rhs[i] = 6.0
                * ((points[i + 1].y - points[i].y) / h[i]
                    - (points[i].y - points[i - 1].y) / h[i - 1]);
        }

        let gamma = gauss::solve(matrix, rhs)?;

        Ok(Self {
            set,
            gamma: gamma.as_slice().to_vec(),
            h,
        })
    }

    /// Second derivatives `γ_i`, one per node. `γ_0` and `γ_n` are 0 by
    /// the natural boundary condition.
    #[inline]
    #[must_use]
    pub fn gamma(&self) -> &[f64] {
        &self.gamma
    }

    /// Segment widths `h_i`, one per segment.
    #[inline]
    #[must_use]
    pub fn widths(&self) -> &[f64] {
        &self.h
    }
}

impl Interpolator for NaturalSpline<'_> {
    fn algorithm(&self) -> Algorithm {
        Algorithm::NaturalSpline
    }

    fn sample_set(&self) -> &SampleSet {
        self.set
    }

    /// Evaluates the spline at `x`.
    ///
    /// Out-of-range queries clamp to the boundary segments: `x < x_0`
    /// extends the first cubic, `x > x_n` the last.
    fn eval(&self, x: f64) -> f64 {
        let points = self.set.points();
        let i = find_segment(points, x);

        let (x0, y0) = (points[i].x, points[i].y);
        let (x1, y1) = (points[i + 1].x, points[i + 1].y);
        let h = self.h[i];

        let dr = x1 - x; // distance to the right node
        let dl = x - x0; // distance to the left node

        y0 * dr / h
            + y1 * dl / h
            + self.gamma[i] * (dr * dr * dr - h * h * dr) / (6.0 * h)
            + self.gamma[i + 1] * (dl * dl * dl - h * h * dl) / (6.0 * h)
    }
}
