use serde::{Deserialize, Serialize};

/// Structured verdict of one shape classification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShapeVerdict {
    /// True when at least one criterion flagged the histogram.
    pub is_non_normal: bool,

    /// Ascending, deduplicated bin indices of the detected peaks,
    /// including a confirmed secondary hump.
    pub peak_positions: Vec<usize>,

    /// Human-readable diagnostics; non-empty exactly when
    /// `is_non_normal`. Meant for display and records, not for machine
    /// parsing beyond presence/absence.
    pub reasons: Vec<String>,

    /// Third standardized moment of the raw histogram.
    pub skewness: f64,

    /// Fourth standardized moment of the raw histogram; 3.0 is the
    /// normal-distribution value.
    pub kurtosis: f64,
}

impl ShapeVerdict {
    /// Verdict for a histogram with no usable signal: everything normal
    /// by convention.
    pub(crate) fn empty_signal() -> Self {
        Self {
            is_non_normal: false,
            peak_positions: Vec::new(),
            reasons: Vec::new(),
            skewness: 0.0,
            kurtosis: 3.0,
        }
    }

    /// Number of detected peaks.
    pub fn num_peaks(&self) -> usize {
        self.peak_positions.len()
    }
}
