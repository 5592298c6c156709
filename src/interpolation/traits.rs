use crate::grid::SampleSet;
use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::report::InterpolationReport;

/// Common surface of the interpolation models.
///
/// `eval` is total over `f64`: the Lagrange polynomial extrapolates outside
/// the sample interval and the spline clamps to its boundary segments, so
/// no query can fail once a model exists. Models are immutable after
/// construction and evaluation is a pure read, safe to share across
/// threads.
pub trait Interpolator {
    /// which algorithm this model implements
    fn algorithm(&self) -> Algorithm;

    /// the sample set the model was built from
    fn sample_set(&self) -> &SampleSet;

    /// evaluates single point
    /// defined separately in each method
    fn eval(&self, x: f64) -> f64;

    /// evaluates many points
    #[inline]
    fn eval_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&xq| self.eval(xq)).collect()
    }

    /// evaluates many points into an [`InterpolationReport`]
    fn report(&self, x_eval: &[f64]) -> InterpolationReport {
        let mut report = InterpolationReport::new(
            self.algorithm(),
            self.sample_set().points().len(),
            x_eval.len(),
        );
        report.evaluated = self.eval_many(x_eval);
        report
    }
}
