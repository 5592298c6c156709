//! Defines the interpolation algorithm variants
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods.

/// Interpolation algorithm variants.
/// - [`Algorithm::Lagrange`]      global Lagrange polynomial
/// - [`Algorithm::NaturalSpline`] natural cubic spline
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Lagrange,
    NaturalSpline,
}

impl Algorithm {
    pub fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Lagrange => "lagrange",
            Algorithm::NaturalSpline => "natural cubic spline",
        }
    }
}
