//! Piecewise-linear interpolation over an ascending abscissa.
//!
//! Values outside the covered range clamp to the boundary ordinates, which
//! is what both the vulnerability curves and the exceedance-frequency curve
//! queries rely on.

/// Linear interpolation of `x` over `(xs, ys)`, `xs` ascending.
///
/// Clamps to `ys[0]` below the range and to the last ordinate above it.
/// Returns 0.0 for an empty table.
pub(crate) fn linear(x: f64, xs: &[f64], ys: &[f64]) -> f64 {
    debug_assert_eq!(xs.len(), ys.len());
    if xs.is_empty() {
        return 0.0;
    }
    if x <= xs[0] {
        return ys[0];
    }
    if x >= xs[xs.len() - 1] {
        return ys[ys.len() - 1];
    }
    // partition_point gives the first index with xs[i] >= x; x is strictly
    // inside the range here, so 1 <= i <= len-1.
    let i = xs.partition_point(|&v| v < x);
    let (x0, x1) = (xs[i - 1], xs[i]);
    let (y0, y1) = (ys[i - 1], ys[i]);
    if x1 == x0 {
        return y0;
    }
    y0 + (y1 - y0) * (x - x0) / (x1 - x0)
}
