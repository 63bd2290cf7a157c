//! Capture-level gate: one histogram in, one outcome code out.

use std::fmt;

use histo_gate_core::weighted_mean;
use histo_gate_shape::{ShapeClassifier, ShapeParams, ShapeVerdict};
use log::debug;
use serde::{Deserialize, Serialize};

/// Errors produced by the capture gate.
#[derive(thiserror::Error, Debug)]
pub enum GateError {
    #[error("invalid histogram length (expected {expected} bins, got {got})")]
    InvalidBinCount { expected: usize, got: usize },
}

/// Configuration for the capture gate.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GateParams {
    /// Number of bins a capture is expected to deliver.
    pub expected_bins: usize,

    /// Light captures whose raw weighted mean falls below this are
    /// inconclusive: there is not enough signal to judge shape.
    pub low_light_mean_threshold: f64,

    /// Shape classification thresholds.
    pub shape: ShapeParams,
}

impl Default for GateParams {
    fn default() -> Self {
        Self {
            expected_bins: 1024,
            low_light_mean_threshold: 75.0,
            shape: ShapeParams::default(),
        }
    }
}

/// The externally meaningful result of gating one capture.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CaptureOutcome {
    Pass,
    Fail,
    LowLight,
}

impl CaptureOutcome {
    /// Whether the recording layer should persist this capture.
    ///
    /// Low-light captures are inconclusive rather than judged and are
    /// displayed without being saved.
    pub fn is_recordable(self) -> bool {
        !matches!(self, Self::LowLight)
    }
}

impl fmt::Display for CaptureOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
            Self::LowLight => "LOW_LIGHT",
        })
    }
}

/// Outcome of one gated capture, with the shape verdict when available.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GateReport {
    pub outcome: CaptureOutcome,

    /// `None` when the low-light gate short-circuited: shape
    /// classification never ran, so there is nothing to report.
    pub verdict: Option<ShapeVerdict>,
}

/// Gate one capture: PASS, FAIL, or LOW_LIGHT.
///
/// See [`classify_capture_detailed`] for the variant that also returns
/// the shape verdict for display and records.
pub fn classify_capture(
    counts: &[u32],
    is_light: bool,
    params: &GateParams,
) -> Result<CaptureOutcome, GateError> {
    Ok(classify_capture_detailed(counts, is_light, params)?.outcome)
}

/// Gate one capture, keeping the full shape verdict.
///
/// Dark (reference) captures are judged on shape alone. Light captures
/// are first checked for sufficient illumination: a raw weighted mean
/// below `low_light_mean_threshold` short-circuits to `LowLight`
/// without running the shape classifier. The mean here is deliberately
/// the plain, uncorrected one; the cleaned diagnostics mean
/// ([`capture_stats`](crate::capture_stats)) follows a different
/// convention and must not be substituted for it.
pub fn classify_capture_detailed(
    counts: &[u32],
    is_light: bool,
    params: &GateParams,
) -> Result<GateReport, GateError> {
    if counts.len() != params.expected_bins {
        return Err(GateError::InvalidBinCount {
            expected: params.expected_bins,
            got: counts.len(),
        });
    }

    if is_light {
        let mean = weighted_mean(counts);
        if mean < params.low_light_mean_threshold {
            debug!("low light capture: weighted mean {mean:.2}");
            return Ok(GateReport {
                outcome: CaptureOutcome::LowLight,
                verdict: None,
            });
        }
    }

    let verdict = ShapeClassifier::new(params.shape.clone()).check(counts);
    let outcome = if verdict.is_non_normal {
        CaptureOutcome::Fail
    } else {
        CaptureOutcome::Pass
    };
    Ok(GateReport {
        outcome,
        verdict: Some(verdict),
    })
}
