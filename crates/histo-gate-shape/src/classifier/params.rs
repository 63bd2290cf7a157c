use serde::{Deserialize, Serialize};

/// Configuration for the histogram shape classifier.
///
/// Fractional thresholds are resolved against the maximum of the
/// smoothed signal at classification time, so the same parameter set
/// works across exposure levels.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShapeParams {
    /// Width of the moving-average smoothing window (odd).
    pub smooth_window: usize,

    /// Peaks below this fraction of the smoothed maximum are ignored.
    pub peak_min_height_frac: f64,

    /// Minimal separation between reported peaks, in bins.
    pub peak_min_distance: usize,

    /// Peaks whose prominence is below this fraction of the smoothed
    /// maximum are ignored.
    pub peak_min_prominence_frac: f64,

    /// |skewness| beyond this flags the capture.
    pub skewness_threshold: f64,

    /// |kurtosis - 3| beyond this flags the capture.
    pub excess_kurtosis_threshold: f64,

    /// A candidate hump must reach this fraction of the smoothed maximum.
    pub hump_elevation_frac: f64,

    /// The region around a candidate hump must average this fraction of
    /// the resolved elevation threshold, so a single noisy bin never
    /// counts as a hump.
    pub hump_region_avg_frac: f64,

    /// Minimal side length, in bins, before a hump search is attempted.
    pub hump_side_min_len: usize,

    /// Window radius, in bins, used to average around a candidate hump.
    pub hump_avg_half_width: usize,
}

impl Default for ShapeParams {
    fn default() -> Self {
        Self {
            smooth_window: 5,
            peak_min_height_frac: 0.05,
            peak_min_distance: 50,
            peak_min_prominence_frac: 0.08,
            skewness_threshold: 0.2,
            excess_kurtosis_threshold: 1.0,
            hump_elevation_frac: 0.15,
            hump_region_avg_frac: 0.7,
            hump_side_min_len: 50,
            hump_avg_half_width: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_round_trip_through_json() {
        let params = ShapeParams {
            peak_min_distance: 30,
            skewness_threshold: 0.35,
            ..ShapeParams::default()
        };
        let json = serde_json::to_string(&params).expect("serialize");
        let back: ShapeParams = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.peak_min_distance, 30);
        assert_eq!(back.skewness_threshold, 0.35);
        assert_eq!(back.smooth_window, params.smooth_window);
        assert_eq!(back.hump_avg_half_width, params.hump_avg_half_width);
    }
}
