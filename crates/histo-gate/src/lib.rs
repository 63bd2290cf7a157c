//! High-level facade crate for the `histo-gate-*` workspace.
//!
//! This crate provides:
//! - stable re-exports of the underlying histogram crates
//! - the capture-level gate that turns one histogram plus a light/dark
//!   flag into a PASS / FAIL / LOW_LIGHT outcome
//! - operator-facing capture diagnostics (cleaned weighted mean and
//!   standard deviation)
//!
//! ## Quickstart
//!
//! ```
//! use histo_gate::{classify_capture, CaptureOutcome, GateParams};
//!
//! let counts: Vec<u32> = (0..1024)
//!     .map(|i| {
//!         let d = i as f64 - 512.0;
//!         (10_000.0 * (-d * d / (2.0 * 80.0 * 80.0)).exp()).round() as u32
//!     })
//!     .collect();
//!
//! let outcome = classify_capture(&counts, true, &GateParams::default()).unwrap();
//! assert_eq!(outcome, CaptureOutcome::Pass);
//! ```
//!
//! ## API map
//! - `histo_gate::core`: smoothing, weighted mean, population moments.
//! - `histo_gate::shape`: the shape classifier and its verdict.
//! - `histo_gate` (this crate): the capture gate and diagnostics.

pub use histo_gate_core as core;
pub use histo_gate_shape as shape;

mod diagnostics;
mod gate;

pub use diagnostics::{capture_stats, CaptureStats, DiagnosticsParams};
pub use gate::{
    classify_capture, classify_capture_detailed, CaptureOutcome, GateError, GateParams,
    GateReport,
};

pub use histo_gate_core::{
    init_from_env, init_with_level, moving_average, weighted_mean, Moments,
};
pub use histo_gate_shape::{ShapeClassifier, ShapeParams, ShapeVerdict};
