//! Linear-solver error types.
//!
//! ┌ shape errors
//! │   ├ non-square coefficient matrix
//! │   └ right-hand side length mismatch
//! │
//! └ [`LinAlgError::SingularSystem`]
//!     └ pivot magnitude below tolerance during elimination

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LinAlgError {
    #[error("matrix must be square. got {rows}x{cols}")]
    NonSquare { rows: usize, cols: usize },

    #[error("dimension mismatch: matrix has {rows} rows, rhs has {rhs_len}")]
    DimensionMismatch { rows: usize, rhs_len: usize },

    #[error("singular system: pivot {pivot} at row {row} is below tolerance")]
    SingularSystem { row: usize, pivot: f64 },
}
