use assert_approx_eq::assert_approx_eq;

use gridfit::grid::errors::GridError;
use gridfit::grid::SampleSet;
use gridfit::interpolation::lagrange::LagrangePolynomial;
use gridfit::interpolation::Interpolator;

type GridResult = Result<(), GridError>;

fn test_function(x: f64) -> f64 {
    x * (x + 1.0).log10() - 1.0
}

#[test]
fn reproduces_node_values() -> GridResult {
    let set = SampleSet::uniform(1.0, 6.0, 5, test_function)?;
    let lagrange = LagrangePolynomial::new(&set);

    for p in set.points() {
        assert_approx_eq!(lagrange.eval(p.x), p.y, 1e-9);
    }
    Ok(())
}

#[test]
fn reproduces_chebyshev_node_values() -> GridResult {
    let set = SampleSet::chebyshev(1.0, 6.0, 5, test_function)?;
    let lagrange = LagrangePolynomial::new(&set);

    for p in set.points() {
        assert_approx_eq!(lagrange.eval(p.x), p.y, 1e-9);
    }
    Ok(())
}

#[test]
fn exact_for_quadratic_data() -> GridResult {
    // degree-3 interpolant of quadratic data is the quadratic itself
    let set = SampleSet::uniform(0.0, 3.0, 3, |x| x * x)?;
    let lagrange = LagrangePolynomial::new(&set);

    for &x in &[0.37, 1.5, 2.85] {
        assert_approx_eq!(lagrange.eval(x), x * x, 1e-9);
    }
    Ok(())
}

#[test]
fn midpoint_error_is_small_on_smooth_function() -> GridResult {
    let set = SampleSet::uniform(1.0, 6.0, 5, test_function)?;
    let lagrange = LagrangePolynomial::new(&set);

    assert!((lagrange.eval(3.5) - test_function(3.5)).abs() < 1e-1);
    Ok(())
}

#[test]
fn extrapolation_is_permitted() -> GridResult {
    let set = SampleSet::uniform(1.0, 6.0, 5, test_function)?;
    let lagrange = LagrangePolynomial::new(&set);

    assert!(lagrange.eval(0.0).is_finite());
    assert!(lagrange.eval(7.5).is_finite());
    Ok(())
}

#[test]
fn chebyshev_nodes_tame_endpoint_error() -> GridResult {
    // |x| interpolated at 10 nodes: uniform nodes oscillate near the
    // endpoints, Chebyshev nodes keep that region an order quieter
    let f = |x: f64| x.abs();
    let uniform = SampleSet::uniform(-3.0, 3.0, 9, f)?;
    let chebyshev = SampleSet::chebyshev(-3.0, 3.0, 9, f)?;

    let lagrange_uni = LagrangePolynomial::new(&uniform);
    let lagrange_cheb = LagrangePolynomial::new(&chebyshev);

    let mut uniform_end: f64 = 0.0;
    let mut chebyshev_end: f64 = 0.0;
    for i in 0..=400 {
        let x = -3.0 + i as f64 * 6.0 / 400.0;
        if x.abs() > 2.4 {
            uniform_end = uniform_end.max((f(x) - lagrange_uni.eval(x)).abs());
            chebyshev_end = chebyshev_end.max((f(x) - lagrange_cheb.eval(x)).abs());
        }
    }

    assert!(uniform_end > 0.05, "expected endpoint oscillation, got {uniform_end}");
    assert!(chebyshev_end < uniform_end / 5.0);
    Ok(())
}

#[test]
fn report_metadata() -> GridResult {
    let set = SampleSet::uniform(1.0, 6.0, 5, test_function)?;
    let lagrange = LagrangePolynomial::new(&set);

    let rep = lagrange.report(&[2.0, 3.0, 4.0]);
    assert_eq!(rep.algorithm_name, "lagrange");
    assert_eq!(rep.n_provided, 6);
    assert_eq!(rep.n_evaluated, 3);
    assert_eq!(rep.evaluated.len(), 3);

    for (v, &x) in rep.evaluated.iter().zip(&[2.0, 3.0, 4.0]) {
        assert_approx_eq!(*v, lagrange.eval(x), 1e-12);
    }
    Ok(())
}
