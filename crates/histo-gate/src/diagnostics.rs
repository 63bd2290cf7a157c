//! Operator-facing capture statistics.
//!
//! The capture display shows a weighted mean and standard deviation that
//! are computed over *cleaned* counts: the final bin carries a hardware
//! sentinel and is zeroed, and bins below a noise floor are dropped.
//! This convention is intentionally different from the raw weighted
//! mean used for the low-light gate; the two must not be unified, since
//! the low-light threshold is calibrated against the uncorrected mean.

use serde::{Deserialize, Serialize};

/// Configuration for capture diagnostics.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct DiagnosticsParams {
    /// Bins with fewer counts than this are treated as noise and
    /// dropped from the statistics.
    pub noisy_bin_min: u32,
}

impl Default for DiagnosticsParams {
    fn default() -> Self {
        Self { noisy_bin_min: 100 }
    }
}

/// Cleaned weighted mean and standard deviation of one capture.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CaptureStats {
    pub mean: f64,
    pub std_dev: f64,
}

impl CaptureStats {
    const ZERO: Self = Self {
        mean: 0.0,
        std_dev: 0.0,
    };
}

/// Compute display statistics over cleaned bin counts.
///
/// The final (sentinel) bin and every bin below the noise floor are
/// zeroed before averaging. The variance is sample-corrected, unlike
/// the population moments used for shape classification. Histograms
/// with fewer than two remaining counts report (0.0, 0.0).
pub fn capture_stats(counts: &[u32], params: &DiagnosticsParams) -> CaptureStats {
    if counts.is_empty() {
        return CaptureStats::ZERO;
    }

    let mut cleaned = counts.to_vec();
    if let Some(last) = cleaned.last_mut() {
        *last = 0;
    }
    for c in &mut cleaned {
        if *c < params.noisy_bin_min {
            *c = 0;
        }
    }

    let total: u64 = cleaned.iter().map(|&c| u64::from(c)).sum();
    if total < 2 {
        return CaptureStats::ZERO;
    }
    let total = total as f64;

    let mut weighted = 0.0f64;
    let mut weighted_sq = 0.0f64;
    for (i, &c) in cleaned.iter().enumerate() {
        let bin = i as f64;
        let count = f64::from(c);
        weighted += bin * count;
        weighted_sq += bin * bin * count;
    }

    let mean = weighted / total;
    let variance = (weighted_sq - mean * mean * total) / (total - 1.0);
    let std_dev = if variance > 0.0 { variance.sqrt() } else { 0.0 };

    CaptureStats { mean, std_dev }
}
