use assert_approx_eq::assert_approx_eq;
use nalgebra::{DMatrix, DVector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use gridfit::linalg::errors::LinAlgError;
use gridfit::linalg::gauss;

#[test]
fn identity_returns_rhs() {
    let a = DMatrix::<f64>::identity(4, 4);
    let b = DVector::from_row_slice(&[1.0, -2.0, 3.5, 0.25]);

    let x = gauss::solve(a, b.clone()).unwrap();
    for i in 0..4 {
        assert_approx_eq!(x[i], b[i], 1e-12);
    }
}

#[test]
fn known_two_by_two() {
    // 2x + y = 3, x + 3y = 4
    let a = DMatrix::from_row_slice(2, 2, &[2.0, 1.0, 1.0, 3.0]);
    let b = DVector::from_row_slice(&[3.0, 4.0]);

    let x = gauss::solve(a, b).unwrap();
    assert_approx_eq!(x[0], 1.0, 1e-12);
    assert_approx_eq!(x[1], 1.0, 1e-12);
}

#[test]
fn spline_shaped_tridiagonal() {
    // boundary rows pin the outer unknowns, interior rows are diagonally
    // dominant, matching the continuity system assembled by the spline
    let a = DMatrix::from_row_slice(
        4,
        4,
        &[
            1.0, 0.0, 0.0, 0.0, //
            1.0, 4.0, 1.0, 0.0, //
            0.0, 1.0, 4.0, 1.0, //
            0.0, 0.0, 0.0, 1.0, //
        ],
    );
    let b = DVector::from_row_slice(&[0.0, 6.0, 6.0, 0.0]);

    let x = gauss::solve(a, b).unwrap();
    assert_approx_eq!(x[0], 0.0, 1e-12);
    assert_approx_eq!(x[1], 1.2, 1e-12);
    assert_approx_eq!(x[2], 1.2, 1e-12);
    assert_approx_eq!(x[3], 0.0, 1e-12);
}

#[test]
fn random_diagonally_dominant_round_trip() {
    let mut rng = StdRng::seed_from_u64(7);
    let n = 12;

    let mut a = DMatrix::<f64>::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            a[(i, j)] = rng.gen_range(-1.0..1.0);
        }
    }
    for i in 0..n {
        let row_sum: f64 = (0..n).map(|j| a[(i, j)].abs()).sum();
        a[(i, i)] = row_sum + 1.0;
    }
    let b = DVector::<f64>::from_fn(n, |_, _| rng.gen_range(-1.0..1.0));

    let x = gauss::solve(a.clone(), b.clone()).unwrap();

    let residual = &a * &x - &b;
    assert!(
        residual.amax() < 1e-6,
        "residual too large: {}",
        residual.amax()
    );
}

#[test]
fn singular_system_is_reported() {
    let a = DMatrix::from_row_slice(2, 2, &[1.0, 1.0, 1.0, 1.0]);
    let b = DVector::from_row_slice(&[2.0, 2.0]);

    let err = gauss::solve(a, b).unwrap_err();
    assert!(matches!(err, LinAlgError::SingularSystem { row: 1, .. }));
}

#[test]
fn zero_leading_pivot_is_reported() {
    // solvable with row swaps, but this solver deliberately does none
    let a = DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 1.0, 0.0]);
    let b = DVector::from_row_slice(&[1.0, 1.0]);

    let err = gauss::solve(a, b).unwrap_err();
    assert!(matches!(err, LinAlgError::SingularSystem { row: 0, .. }));
}

#[test]
fn non_square_is_rejected() {
    let a = DMatrix::<f64>::zeros(2, 3);
    let b = DVector::from_row_slice(&[1.0, 2.0]);

    let err = gauss::solve(a, b).unwrap_err();
    assert!(matches!(err, LinAlgError::NonSquare { rows: 2, cols: 3 }));
}

#[test]
fn rhs_length_mismatch_is_rejected() {
    let a = DMatrix::<f64>::identity(3, 3);
    let b = DVector::from_row_slice(&[1.0, 2.0]);

    let err = gauss::solve(a, b).unwrap_err();
    assert!(matches!(
        err,
        LinAlgError::DimensionMismatch {
            rows: 3,
            rhs_len: 2
        }
    ));
}
