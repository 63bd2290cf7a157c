//! Secondary hump detection.
//!
//! A shoulder on the side of the distribution opposite the main peak
//! does not always register as a distinct local maximum; this searches
//! for a broad, moderately elevated region instead.

use super::ShapeParams;

/// Index of the first maximal value, or `None` for an empty slice.
pub(crate) fn argmax(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        if best.map_or(true, |(_, b)| v > b) {
            best = Some((i, v));
        }
    }
    best.map(|(i, _)| i)
}

/// Search a smoothed signal for a secondary hump opposite the main peak.
///
/// Each side longer than `hump_side_min_len` bins is split in half and
/// only the half *away* from the main peak is searched, so the skirt of
/// the peak itself cannot masquerade as a hump. A candidate is confirmed
/// when its value reaches the elevation threshold and a window of
/// `hump_avg_half_width` bins around it stays elevated on average. The
/// left side is checked before the right, and the first confirmed hump
/// wins.
///
/// Returns the hump position in absolute bin coordinates.
pub fn find_secondary_hump(
    smoothed: &[f64],
    main_peak: usize,
    params: &ShapeParams,
) -> Option<usize> {
    if main_peak >= smoothed.len() {
        return None;
    }
    let max_value = smoothed.iter().copied().fold(0.0f64, f64::max);
    if max_value == 0.0 {
        return None;
    }

    let elevation = max_value * params.hump_elevation_frac;
    let region_floor = elevation * params.hump_region_avg_frac;

    // Left of the main peak the far half is the first half.
    let left = &smoothed[..main_peak];
    if left.len() > params.hump_side_min_len {
        let half = &left[..left.len() / 2];
        if let Some(pos) = confirm_hump(half, elevation, region_floor, params.hump_avg_half_width)
        {
            return Some(pos);
        }
    }

    // Right of the main peak the far half is the second half.
    let right = &smoothed[main_peak + 1..];
    if right.len() > params.hump_side_min_len {
        let offset = right.len() / 2;
        let half = &right[offset..];
        if let Some(pos) = confirm_hump(half, elevation, region_floor, params.hump_avg_half_width)
        {
            return Some(main_peak + 1 + offset + pos);
        }
    }

    None
}

/// Check one sub-half for a sufficiently elevated, sufficiently broad
/// region. Returns the position of its maximum relative to the sub-half.
fn confirm_hump(
    half: &[f64],
    elevation: f64,
    region_floor: f64,
    avg_half_width: usize,
) -> Option<usize> {
    let idx = argmax(half)?;
    if half[idx] < elevation {
        return None;
    }

    // The averaging window is [idx - w, idx + w) clipped to the sub-half.
    let start = idx.saturating_sub(avg_half_width);
    let end = (idx + avg_half_width).min(half.len());
    let region = &half[start..end];
    if region.is_empty() {
        return None;
    }
    let region_avg = region.iter().sum::<f64>() / region.len() as f64;

    (region_avg >= region_floor).then_some(idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ShapeParams {
        ShapeParams::default()
    }

    fn flat_signal(len: usize) -> Vec<f64> {
        vec![0.0; len]
    }

    #[test]
    fn argmax_returns_first_occurrence_on_ties() {
        assert_eq!(argmax(&[1.0, 5.0, 5.0, 2.0]), Some(1));
        assert_eq!(argmax(&[]), None);
    }

    #[test]
    fn no_signal_means_no_hump() {
        assert_eq!(find_secondary_hump(&flat_signal(1024), 512, &params()), None);
        assert_eq!(find_secondary_hump(&[], 0, &params()), None);
    }

    #[test]
    fn broad_left_hump_is_reported_in_absolute_bins() {
        let mut signal = flat_signal(1024);
        signal[900] = 1000.0;
        for v in signal[100..200].iter_mut() {
            *v = 300.0;
        }
        // Elevation threshold is 150; the plateau reaches 300 and the
        // +/-20-bin region around bin 100 averages 150, above the floor
        // of 105.
        assert_eq!(find_secondary_hump(&signal, 900, &params()), Some(100));
    }

    #[test]
    fn broad_right_hump_is_reported_in_absolute_bins() {
        let mut signal = flat_signal(1024);
        signal[100] = 1000.0;
        for v in signal[700..800].iter_mut() {
            *v = 400.0;
        }
        assert_eq!(find_secondary_hump(&signal, 100, &params()), Some(700));
    }

    #[test]
    fn low_elevation_is_not_a_hump() {
        let mut signal = flat_signal(1024);
        signal[900] = 1000.0;
        for v in signal[100..200].iter_mut() {
            *v = 100.0;
        }
        assert_eq!(find_secondary_hump(&signal, 900, &params()), None);
    }

    #[test]
    fn single_elevated_bin_is_noise_not_a_hump() {
        let mut signal = flat_signal(1024);
        signal[100] = 1000.0;
        signal[700] = 400.0;
        assert_eq!(find_secondary_hump(&signal, 100, &params()), None);
    }

    #[test]
    fn short_sides_are_not_searched() {
        // Both sides stay at or below the minimum side length, so the
        // elevated regions are never examined.
        let mut signal = flat_signal(101);
        signal[50] = 1000.0;
        for v in signal[0..20].iter_mut() {
            *v = 900.0;
        }
        assert_eq!(find_secondary_hump(&signal, 50, &params()), None);
    }

    #[test]
    fn near_side_half_is_excluded() {
        // An elevated region in the half nearest the main peak is the
        // peak's own skirt and must not be reported.
        let mut signal = flat_signal(1024);
        signal[900] = 1000.0;
        for v in signal[500..600].iter_mut() {
            *v = 400.0;
        }
        assert_eq!(find_secondary_hump(&signal, 900, &params()), None);
    }
}
