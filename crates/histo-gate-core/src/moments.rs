//! Weighted population moments of a bin-count histogram.
//!
//! The bin index is the independent variable and the bin count is its
//! weight. All moments are population moments (no sample correction);
//! the classification thresholds are tuned against this convention and
//! must not be retuned independently of it.

use serde::{Deserialize, Serialize};

/// Weighted mean bin index of a histogram; 0.0 when there are no counts.
pub fn weighted_mean(counts: &[u32]) -> f64 {
    let total: u64 = counts.iter().map(|&c| u64::from(c)).sum();
    if total == 0 {
        return 0.0;
    }
    let weighted: f64 = counts
        .iter()
        .enumerate()
        .map(|(i, &c)| i as f64 * f64::from(c))
        .sum();
    weighted / total as f64
}

/// First four weighted population moments of a histogram.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Moments {
    /// Weighted mean bin index.
    pub mean: f64,
    /// Weighted population variance.
    pub variance: f64,
    /// Third standardized moment; 0.0 for a symmetric distribution.
    pub skewness: f64,
    /// Fourth standardized moment; 3.0 for a normal distribution.
    pub kurtosis: f64,
}

impl Moments {
    /// Compute the moments of raw (unsmoothed) bin counts.
    ///
    /// A histogram with no counts, or with all of its mass in a single
    /// bin (zero variance), reports skewness 0.0 and kurtosis 3.0: an
    /// empty or flat signal looks normal by convention rather than being
    /// an error.
    pub fn from_counts(counts: &[u32]) -> Self {
        let total: u64 = counts.iter().map(|&c| u64::from(c)).sum();
        if total == 0 {
            return Self {
                mean: 0.0,
                variance: 0.0,
                skewness: 0.0,
                kurtosis: 3.0,
            };
        }
        let total = total as f64;

        let mean = counts
            .iter()
            .enumerate()
            .map(|(i, &c)| i as f64 * f64::from(c))
            .sum::<f64>()
            / total;

        let variance = counts
            .iter()
            .enumerate()
            .map(|(i, &c)| f64::from(c) * (i as f64 - mean).powi(2))
            .sum::<f64>()
            / total;
        if variance == 0.0 {
            return Self {
                mean,
                variance,
                skewness: 0.0,
                kurtosis: 3.0,
            };
        }

        let std_dev = variance.sqrt();
        let mut third = 0.0f64;
        let mut fourth = 0.0f64;
        for (i, &c) in counts.iter().enumerate() {
            let z = (i as f64 - mean) / std_dev;
            let z3 = z * z * z;
            third += f64::from(c) * z3;
            fourth += f64::from(c) * z3 * z;
        }

        Self {
            mean,
            variance,
            skewness: third / total,
            kurtosis: fourth / total,
        }
    }

    /// Weighted population standard deviation.
    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn empty_histogram_defaults_to_normal_moments() {
        let m = Moments::from_counts(&[]);
        assert_eq!(m.mean, 0.0);
        assert_eq!(m.variance, 0.0);
        assert_eq!(m.skewness, 0.0);
        assert_eq!(m.kurtosis, 3.0);

        let zeros = Moments::from_counts(&[0; 256]);
        assert_eq!(zeros, m);
        assert_eq!(weighted_mean(&[0; 256]), 0.0);
    }

    #[test]
    fn single_loaded_bin_has_zero_variance() {
        let mut counts = [0u32; 64];
        counts[40] = 1000;
        let m = Moments::from_counts(&counts);
        assert_relative_eq!(m.mean, 40.0);
        assert_eq!(m.variance, 0.0);
        assert_eq!(m.skewness, 0.0);
        assert_eq!(m.kurtosis, 3.0);
    }

    #[test]
    fn two_equal_bins_give_known_moments() {
        let mut counts = [0u32; 32];
        counts[10] = 50;
        counts[20] = 50;
        let m = Moments::from_counts(&counts);
        assert_relative_eq!(m.mean, 15.0);
        assert_relative_eq!(m.variance, 25.0);
        assert_relative_eq!(m.std_dev(), 5.0);
        assert_relative_eq!(m.skewness, 0.0);
        // Two equal point masses: every |z| is 1, so the fourth moment is 1.
        assert_relative_eq!(m.kurtosis, 1.0);
    }

    #[test]
    fn weighted_mean_follows_the_mass() {
        assert_relative_eq!(weighted_mean(&[0, 0, 4]), 2.0);
        assert_relative_eq!(weighted_mean(&[1, 0, 1]), 1.0);
        assert_relative_eq!(weighted_mean(&[3, 1]), 0.25);
    }

    #[test]
    fn symmetric_distribution_has_zero_skewness() {
        let counts = [1, 3, 9, 3, 1];
        let m = Moments::from_counts(&counts);
        assert_relative_eq!(m.mean, 2.0);
        assert_relative_eq!(m.skewness, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn binned_gaussian_is_close_to_normal_moments() {
        let counts: Vec<u32> = (0..1024)
            .map(|i| {
                let d = i as f64 - 512.0;
                (10_000.0 * (-d * d / (2.0 * 80.0 * 80.0)).exp()).round() as u32
            })
            .collect();
        let m = Moments::from_counts(&counts);
        assert_relative_eq!(m.mean, 512.0, epsilon = 1e-6);
        assert!(m.skewness.abs() < 0.01, "skewness = {}", m.skewness);
        assert!((m.kurtosis - 3.0).abs() < 0.2, "kurtosis = {}", m.kurtosis);
    }
}
