//! Pointwise comparison of the interpolation methods against the exact
//! function.
//!
//! Drives both models over one sample set: a row sweep for display
//! (default [`TABLE_POINTS`] abscissas) and a denser sweep for max-error
//! estimation (default [`ERROR_POINTS`]).

use log::debug;

use crate::grid::SampleSet;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::lagrange::LagrangePolynomial;
use crate::interpolation::spline::natural::NaturalSpline;
use crate::interpolation::traits::Interpolator;

/// Default number of rows in the printable comparison table.
pub const TABLE_POINTS: usize = 20;

/// Default number of samples for max-error estimation.
pub const ERROR_POINTS: usize = 100;

/// One comparison sample.
#[derive(Debug, Clone, Copy)]
pub struct ComparisonRow {
    pub x: f64,
    pub exact: f64,
    pub lagrange: f64,
    pub lagrange_err: f64,
    pub spline: f64,
    pub spline_err: f64,
}

/// Comparison of both methods over one sample set.
///
/// - `rows`             : pointwise values and absolute errors
/// - `max_lagrange_err` : max |f − lagrange| over the error sweep
/// - `max_spline_err`   : max |f − spline| over the error sweep
#[derive(Debug, Clone)]
pub struct ComparisonReport {
    pub rows: Vec<ComparisonRow>,
    pub max_lagrange_err: f64,
    pub max_spline_err: f64,
}

/// `count` evenly spaced abscissas covering `[a, b]` inclusive.
/// `count` must be at least 2.
pub(crate) fn even_abscissas(a: f64, b: f64, count: usize) -> Vec<f64> {
    debug_assert!(count >= 2);

    let step = (b - a) / (count - 1) as f64;
    let mut xs = Vec::with_capacity(count);
    for i in 0..count {
        xs.push(a + i as f64 * step);
    }

    xs
}

/// Maximum absolute error of `interp` against `f` over `samples` evenly
/// spaced points in `[a, b]`.
pub fn max_abs_error<I, F>(interp: &I, f: F, a: f64, b: f64, samples: usize) -> f64
where
    I: Interpolator,
    F: Fn(f64) -> f64,
{
    even_abscissas(a, b, samples)
        .into_iter()
        .map(|x| (f(x) - interp.eval(x)).abs())
        .fold(0.0, f64::max)
}

/// Builds the comparison report for `set` against the exact function `f`.
///
/// # Behavior
/// - one [`ComparisonRow`] per abscissa, `table_points` of them evenly
///   spaced over the set's interval
/// - max errors estimated over `error_points` evenly spaced abscissas
///
/// # Errors
/// - [`InterpolationError::Singular`] if the spline system cannot be
///   solved.
pub fn compare<F>(
    set: &SampleSet,
    f: F,
    table_points: usize,
    error_points: usize,
) -> Result<ComparisonReport, InterpolationError>
where
    F: Fn(f64) -> f64,
{
    let lagrange = LagrangePolynomial::new(set);
    let spline = NaturalSpline::new(set)?;

    let (a, b) = set.interval();
    debug!("comparing over [{a}, {b}]: {table_points} rows, {error_points} error samples");

    let mut rows = Vec::with_capacity(table_points);
    for x in even_abscissas(a, b, table_points) {
        let exact = f(x);
        let lagrange_val = lagrange.eval(x);
        let spline_val = spline.eval(x);

        rows.push(ComparisonRow {
            x,
            exact,
            lagrange: lagrange_val,
            lagrange_err: (exact - lagrange_val).abs(),
            spline: spline_val,
            spline_err: (exact - spline_val).abs(),
        });
    }

    Ok(ComparisonReport {
        rows,
        max_lagrange_err: max_abs_error(&lagrange, &f, a, b, error_points),
        max_spline_err: max_abs_error(&spline, &f, a, b, error_points),
    })
}
