//! Inter-job delay policy.
//!
//! [`compute_delay`] maps a timing mode to a single delay duration. The
//! random mode uses stratified sampling to emulate bursty human-like
//! submission patterns rather than a flat uniform distribution. The
//! function is pure: all randomness comes from the caller's [`Rng`], so
//! tests seed it and assert on the drawn stratum.

use std::time::Duration;

use rand::Rng;
use serde::Deserialize;

/// Delay returned for any unrecognized timing mode.
pub const DEFAULT_DELAY_SECS: f64 = 1.0;

/// Slice used by callers that poll a cancel flag while waiting out a delay.
pub const CANCEL_POLL_SLICE: Duration = Duration::from_millis(500);

/// Burst stratum bounds (probability 0.5).
const BURST_RANGE: (f64, f64) = (0.5, 3.0);

/// Moderate-gap stratum bounds (probability 0.3).
const MODERATE_RANGE: (f64, f64) = (3.0, 30.0);

/// Long-gap stratum lower bound (probability 0.2); the upper bound is
/// `max_delay` clamped to [30, 180] seconds.
const LONG_GAP_MIN: f64 = 30.0;
const LONG_GAP_CAP: f64 = 180.0;

/// How the delay between consecutive jobs is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimingMode {
    /// Always wait `fixed_delay` seconds.
    #[default]
    Fixed,
    /// Stratified random gaps (burst / moderate / long).
    Random,
    /// Any unrecognized wire value; yields [`DEFAULT_DELAY_SECS`].
    #[serde(other)]
    Unspecified,
}

/// Delay policy parameters, resolved once at session creation.
///
/// `min_delay` is carried for interface fidelity with the submission form
/// but does not bound the random strata, whose ranges are fixed.
#[derive(Debug, Clone, Copy)]
pub struct DelayConfig {
    pub mode: TimingMode,
    pub fixed_delay: f64,
    pub min_delay: f64,
    pub max_delay: f64,
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self {
            mode: TimingMode::Fixed,
            fixed_delay: DEFAULT_DELAY_SECS,
            min_delay: 0.5,
            max_delay: LONG_GAP_CAP,
        }
    }
}

/// Choose the delay to wait before the next job.
pub fn compute_delay<R: Rng + ?Sized>(config: &DelayConfig, rng: &mut R) -> Duration {
    let secs = match config.mode {
        TimingMode::Fixed => config.fixed_delay.max(0.0),
        TimingMode::Random => random_delay_secs(config.max_delay, rng),
        TimingMode::Unspecified => DEFAULT_DELAY_SECS,
    };
    Duration::from_secs_f64(secs)
}

/// Stratified sample: 50% burst, 30% moderate gap, 20% long gap.
fn random_delay_secs<R: Rng + ?Sized>(max_delay: f64, rng: &mut R) -> f64 {
    let p: f64 = rng.random();
    if p < 0.5 {
        rng.random_range(BURST_RANGE.0..=BURST_RANGE.1)
    } else if p < 0.8 {
        rng.random_range(MODERATE_RANGE.0..=MODERATE_RANGE.1)
    } else {
        let upper = max_delay.min(LONG_GAP_CAP).max(LONG_GAP_MIN);
        rng.random_range(LONG_GAP_MIN..=upper)
    }
}
