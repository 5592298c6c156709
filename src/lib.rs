//! Sampled-grid function approximation.
//!
//! Builds sample grids over an interval (uniformly spaced or Chebyshev
//! nodes), interpolates them with a global Lagrange polynomial and a
//! natural cubic spline, and compares both against the true function with
//! pointwise and maximum errors.
//!
//! # Example
//! ```
//! use gridfit::grid::SampleSet;
//! use gridfit::interpolation::lagrange::LagrangePolynomial;
//! use gridfit::interpolation::spline::natural::NaturalSpline;
//! use gridfit::interpolation::Interpolator;
//!
//! let f = |x: f64| x * (x + 1.0).log10() - 1.0;
//! let set = SampleSet::uniform(1.0, 6.0, 5, f).unwrap();
//!
//! let lagrange = LagrangePolynomial::new(&set);
//! let spline = NaturalSpline::new(&set).unwrap();
//!
//! assert!((lagrange.eval(3.5) - f(3.5)).abs() < 1e-1);
//! assert!((spline.eval(3.5) - f(3.5)).abs() < 1e-1);
//! ```

pub mod compare;
pub mod grid;
pub mod interpolation;
pub mod linalg;
