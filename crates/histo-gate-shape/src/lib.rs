//! Histogram shape classification for optical sensor captures.
//!
//! Decides whether an intensity histogram looks like a single, roughly
//! symmetric, moderate-tailed peak (the expected shape for a focused and
//! properly illuminated capture) or carries evidence of a defective
//! optical path: several well-separated peaks, strong asymmetry,
//! abnormal tails, or a secondary shoulder opposite the main peak.
//!
//! Peak and hump searches run on a smoothed copy of the counts; the
//! statistical moments always come from the raw counts.

mod classifier;

pub use classifier::{
    find_peaks, find_secondary_hump, Peak, PeakCriteria, ShapeClassifier, ShapeParams,
    ShapeVerdict,
};
