//! Fixed-width console tables for the comparison output.

use crate::compare::report::ComparisonReport;
use crate::grid::SampleSet;

/// Renders the node table: one row per sample point.
#[must_use]
pub fn nodes(set: &SampleSet) -> String {
    let mut out = String::new();

    out.push_str(&format!("{:<10} {:<15}\n", "xi", "f(xi)"));
    out.push_str(&"-".repeat(25));
    out.push('\n');

    for p in set.points() {
        out.push_str(&format!("{:<10.4} {:<15.6}\n", p.x, p.y));
    }

    out
}

/// Renders the comparison table: one row per comparison sample.
#[must_use]
pub fn comparison(report: &ComparisonReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:<10} {:<15} {:<15} {:<15} {:<15} {:<15}\n",
        "x", "f(x)", "lagrange", "lagrange err", "spline", "spline err"
    ));
    out.push_str(&"-".repeat(90));
    out.push('\n');

    for row in &report.rows {
        out.push_str(&format!(
            "{:<10.4} {:<15.6} {:<15.6} {:<15.6} {:<15.6} {:<15.6}\n",
            row.x, row.exact, row.lagrange, row.lagrange_err, row.spline, row.spline_err
        ));
    }

    out
}
