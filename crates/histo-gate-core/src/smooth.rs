//! Fixed-divisor moving-average smoothing.

/// Smooth bin counts with a centered moving average of width `window`.
///
/// Window positions outside the array contribute 0 to the sum while the
/// divisor stays the full window width, so edge bins come out smaller
/// than an edge-corrected average would give. This matches a zero-padded
/// convolution; the shape thresholds are tuned against this convention.
///
/// `window` is expected to be odd. Inputs no longer than the window are
/// returned unchanged (converted to `f64`).
pub fn moving_average(counts: &[u32], window: usize) -> Vec<f64> {
    let n = counts.len();
    if window == 0 || n <= window {
        return counts.iter().map(|&c| f64::from(c)).collect();
    }

    let half = window / 2;
    let divisor = window as f64;
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let lo = i.saturating_sub(half);
        let hi = (i + half + 1).min(n);
        let sum: u64 = counts[lo..hi].iter().map(|&c| u64::from(c)).sum();
        out.push(sum as f64 / divisor);
    }
    out
}
