//! Dense Gaussian elimination.
//!
//! Solves `A·x = b` by forward elimination followed by back-substitution.
//! There is no row pivoting: callers must supply a system whose diagonal
//! stays away from zero throughout elimination, which diagonally dominant
//! matrices guarantee. The tridiagonal continuity system assembled for
//! natural cubic splines is diagonally dominant for positive segment
//! widths, so it always qualifies.

use log::trace;
use nalgebra::{DMatrix, DVector};

use crate::linalg::errors::LinAlgError;

/// Pivot magnitude below which a system is reported as singular.
pub const PIVOT_TOL: f64 = 1e-12;

/// Solves `a · x = b`, consuming both.
///
/// The matrix is reduced in place and discarded; it never outlives the
/// call.
///
/// # Behavior
/// - Forward phase: for each pivot row `i`, rows below are reduced with
///   factor `a[(k, i)] / a[(i, i)]`. No row swaps.
/// - Back-substitution from the last row up. Every diagonal entry was
///   already checked against [`PIVOT_TOL`] at pivot time, so the divisions
///   are safe.
///
/// # Errors
/// - [`LinAlgError::NonSquare`] / [`LinAlgError::DimensionMismatch`] on
///   shape violations
/// - [`LinAlgError::SingularSystem`] when a pivot magnitude falls below
///   [`PIVOT_TOL`]. A near-singular system is a hard failure here, never a
///   silently degraded solution.
pub fn solve(mut a: DMatrix<f64>, mut b: DVector<f64>) -> Result<DVector<f64>, LinAlgError> {
    let (rows, cols) = a.shape();
    if rows != cols {
        return Err(LinAlgError::NonSquare { rows, cols });
    }
    if rows != b.len() {
        return Err(LinAlgError::DimensionMismatch {
            rows,
            rhs_len: b.len(),
        });
    }

    let n = rows;
    trace!("eliminating {n}x{n} dense system");

    // forward elimination
    for i in 0..n {
        let pivot = a[(i, i)];
        if pivot.abs() < PIVOT_TOL {
            return Err(LinAlgError::SingularSystem { row: i, pivot });
        }

        for k in i + 1..n {
            let factor = a[(k, i)] / pivot;
            if factor == 0.0 {
                continue;
            }
            for j in i..n {
                a[(k, j)] -= factor * a[(i, j)];
            }
            b[k] -= factor * b[i];
        }
    }

    // back-substitution
    let mut x = DVector::<f64>::zeros(n);
    for i in (0..n).rev() {
        let mut acc = b[i];
        for j in i + 1..n {
            acc -= a[(i, j)] * x[j];
        }
        x[i] = acc / a[(i, i)];
    }

    Ok(x)
}
