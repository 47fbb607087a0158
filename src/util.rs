//! Numeric helpers shared across the crate.

/// Distance along one axis from `k` to the interval `[min, max]`, zero inside it.
#[inline]
pub(crate) fn axis_dist(k: f64, min: f64, max: f64) -> f64 {
    if k < min {
        min - k
    } else if k <= max {
        0.
    } else {
        k - max
    }
}
