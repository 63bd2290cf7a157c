//! Local-maximum peak detection with height, distance, and prominence
//! filters.

/// One detected peak in a smoothed signal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Peak {
    /// Bin index of the peak.
    pub position: usize,
    /// Smoothed signal value at the peak.
    pub height: f64,
}

/// Absolute-unit selection criteria for [`find_peaks`].
///
/// Callers typically resolve these from fractions of the signal's own
/// maximum before calling.
#[derive(Clone, Copy, Debug)]
pub struct PeakCriteria {
    pub min_height: f64,
    pub min_distance: usize,
    pub min_prominence: f64,
}

/// Find local maxima that satisfy all three criteria, applied in order.
///
/// - A candidate is a *strict* local maximum; plateaus never qualify.
/// - Candidates below `min_height` are dropped.
/// - The distance filter is greedy left to right: the first surviving
///   candidate is always kept, and each later candidate only if it lies
///   at least `min_distance` bins after the last kept one. Earlier peaks
///   win regardless of height.
/// - Prominence is measured against the whole remainder of the signal on
///   each side, not just the nearest flanking valleys: the peak value
///   minus the larger of the left-side and right-side minima.
///
/// Survivors are returned in ascending position order with their signal
/// heights.
pub fn find_peaks(signal: &[f64], criteria: &PeakCriteria) -> Vec<Peak> {
    let n = signal.len();
    if n < 3 {
        return Vec::new();
    }

    let mut candidates: Vec<usize> = Vec::new();
    for i in 1..n - 1 {
        if signal[i] > signal[i - 1] && signal[i] > signal[i + 1] {
            candidates.push(i);
        }
    }

    candidates.retain(|&p| signal[p] >= criteria.min_height);

    let mut kept: Vec<usize> = Vec::new();
    for p in candidates {
        match kept.last() {
            Some(&last) if p - last < criteria.min_distance => {}
            _ => kept.push(p),
        }
    }

    kept.into_iter()
        .filter_map(|p| {
            let height = signal[p];
            let left_min = if p > 0 { min_of(&signal[..=p]) } else { height };
            let right_min = if p < n - 1 { min_of(&signal[p..]) } else { height };
            let prominence = height - left_min.max(right_min);
            (prominence >= criteria.min_prominence).then_some(Peak {
                position: p,
                height,
            })
        })
        .collect()
}

fn min_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}
