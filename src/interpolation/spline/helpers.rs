use crate::grid::SamplePoint;

/// Segment widths `h_i = x_{i+1} - x_i` between adjacent nodes.
pub(crate) fn spacings(points: &[SamplePoint]) -> Vec<f64> {
    let n = points.len();
    let mut h = Vec::with_capacity(n - 1);

    for i in 0..n - 1 {
        h.push(points[i + 1].x - points[i].x);
    }

    h
}

/// Locates the segment index `i` with `x_i <= xq <= x_{i+1}`.
///
/// Queries below `x_0` resolve to segment 0 and queries above `x_n` to
/// segment `n - 1`; this is the out-of-range clamp the spline evaluator
/// relies on.
pub(crate) fn find_segment(points: &[SamplePoint], xq: f64) -> usize {
    let n = points.len();
    let mut lo = 0;
    let mut hi = n - 1;

    while lo + 1 < hi {
        let mid = (lo + hi) / 2;
        if points[mid].x <= xq {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    lo
}
