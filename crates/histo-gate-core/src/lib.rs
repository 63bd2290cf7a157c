//! Bin-count histogram primitives for optical sensor capture gating.
//!
//! This crate is intentionally small and purely numeric. It does *not*
//! depend on any concrete capture source, hardware SDK, or presentation
//! layer.

mod logger;
mod moments;
mod smooth;

pub use logger::{init_from_env, init_with_level};
pub use moments::{weighted_mean, Moments};
pub use smooth::moving_average;
