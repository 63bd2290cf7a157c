//! Histogram shape classification pipeline.
//!
//! This module wires together smoothing, peak detection, moment
//! thresholds, and secondary-hump detection into one structured verdict.

mod hump;
mod params;
mod peaks;
mod pipeline;
mod result;

pub use hump::find_secondary_hump;
pub use params::ShapeParams;
pub use peaks::{find_peaks, Peak, PeakCriteria};
pub use pipeline::ShapeClassifier;
pub use result::ShapeVerdict;
