//! Respiratory Channel Constants
//!
//! Window size, phase-band geometry and breath-interval validity bounds for
//! the three-state breath detector.

/// Respiratory ring buffer capacity (samples).
///
/// 32 samples at 50ms is a 1.6s window, long enough for the baseline and
/// deviation estimate to straddle both halves of a breath at any valid rate.
pub const RESP_WINDOW_SIZE: usize = 32;

/// Phase band half-width in standard deviations.
///
/// `inhale = baseline + 0.5 sigma`, `exhale = baseline - 0.5 sigma`. Samples
/// inside the band classify as Hold, which absorbs sensor noise around the
/// baseline instead of chattering between phases.
pub const BREATH_BAND_SIGMA: f32 = 0.5;

/// Minimum plausible breath interval (ms). 1500ms = 40 breaths/min.
pub const BREATH_MIN_MS: u32 = 1_500;

/// Maximum plausible breath interval (ms). 10000ms = 6 breaths/min.
pub const BREATH_MAX_MS: u32 = 10_000;

/// Number of validated breath intervals averaged for the rate output.
///
/// Four cycles: breathing is slow, so a longer average would take most of a
/// minute to react to exercise onset.
pub const BREATH_AVERAGING_WINDOW: usize = 4;
