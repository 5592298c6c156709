use thiserror::Error;

use crate::grid::errors::GridError;
use crate::linalg::errors::LinAlgError;

/// Failures surfaced while building or driving an interpolation model.
///
/// Bad sample data is rejected at [`SampleSet`](crate::grid::SampleSet)
/// construction, so the evaluators only ever see valid sets; what remains
/// is the spline continuity system failing to solve.
#[derive(Debug, Error)]
pub enum InterpolationError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Singular(#[from] LinAlgError),
}
