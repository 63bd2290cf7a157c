use histo_gate_core::{moving_average, Moments};
use log::debug;

use super::hump::{argmax, find_secondary_hump};
use super::peaks::{find_peaks, PeakCriteria};
use super::{ShapeParams, ShapeVerdict};

/// Histogram shape classifier.
///
/// Stateless: every call is independent, deterministic, and safe to run
/// concurrently with any number of other calls.
pub struct ShapeClassifier {
    params: ShapeParams,
}

impl ShapeClassifier {
    /// Create a classifier with the given thresholds.
    pub fn new(params: ShapeParams) -> Self {
        Self { params }
    }

    /// Classifier parameters.
    #[inline]
    pub fn params(&self) -> &ShapeParams {
        &self.params
    }

    /// Check whether a histogram deviates from the expected single-peak
    /// shape.
    ///
    /// Four criteria contribute, in order: several well-separated peaks,
    /// high skewness, abnormal kurtosis, and a secondary hump opposite
    /// the main peak. Peaks and humps are searched on a smoothed copy of
    /// the counts; the moments always come from the raw counts.
    ///
    /// A histogram with no signal at all yields the all-normal verdict.
    pub fn check(&self, counts: &[u32]) -> ShapeVerdict {
        let p = &self.params;

        let smoothed = moving_average(counts, p.smooth_window);
        let max_value = smoothed.iter().copied().fold(0.0f64, f64::max);
        if max_value == 0.0 {
            return ShapeVerdict::empty_signal();
        }
        let main_peak = argmax(&smoothed).unwrap_or(0);

        let mut reasons: Vec<String> = Vec::new();

        let criteria = PeakCriteria {
            min_height: max_value * p.peak_min_height_frac,
            min_distance: p.peak_min_distance,
            min_prominence: max_value * p.peak_min_prominence_frac,
        };
        let peaks = find_peaks(&smoothed, &criteria);
        let mut peak_positions: Vec<usize> = peaks.iter().map(|pk| pk.position).collect();
        if peak_positions.len() >= 2 {
            reasons.push(format!("Multiple peaks ({})", peak_positions.len()));
        }

        let moments = Moments::from_counts(counts);
        if moments.skewness.abs() > p.skewness_threshold {
            reasons.push(format!("High skewness ({:.2})", moments.skewness));
        }
        if (moments.kurtosis - 3.0).abs() > p.excess_kurtosis_threshold {
            reasons.push(format!("Abnormal kurtosis ({:.2})", moments.kurtosis));
        }

        if let Some(hump) = find_secondary_hump(&smoothed, main_peak, p) {
            reasons.push("Secondary hump detected".to_string());
            if !peak_positions.contains(&hump) {
                peak_positions.push(hump);
                peak_positions.sort_unstable();
            }
        }

        let verdict = ShapeVerdict {
            is_non_normal: !reasons.is_empty(),
            peak_positions,
            reasons,
            skewness: moments.skewness,
            kurtosis: moments.kurtosis,
        };
        debug!(
            "shape verdict: non_normal={} peaks={:?} reasons={:?} skewness={:.3} kurtosis={:.3}",
            verdict.is_non_normal,
            verdict.peak_positions,
            verdict.reasons,
            verdict.skewness,
            verdict.kurtosis
        );
        verdict
    }
}
