//! GSR Channel Constants
//!
//! Smoothing window, calibration length, classification boundaries and the
//! slow baseline-adaptation parameters.

/// GSR ring buffer capacity (samples).
///
/// 8 samples at 200ms is a 1.6s moving average — the full-window mean is
/// cheap enough to recompute on every sample at this size.
pub const GSR_WINDOW_SIZE: usize = 8;

/// Samples accumulated before the baseline locks in.
///
/// 50 samples at 200ms = 10 seconds of rest, enough for electrode gel to
/// settle and the smoothed value to stabilize on the wearer's dry skin level.
pub const GSR_CALIBRATION_SAMPLES: u32 = 50;

/// Smoothed-minus-baseline delta (raw ADC counts) below which skin reads Dry.
pub const SWEAT_LOW_DELTA: f32 = 10.0;

/// Delta (raw ADC counts) below which sweat level is Low.
pub const SWEAT_MED_DELTA: f32 = 30.0;

/// Delta (raw ADC counts) below which sweat level is Med; at or above, High.
pub const SWEAT_HIGH_DELTA: f32 = 60.0;

/// Wall-time period between baseline adaptation steps (ms).
///
/// Once per minute the baseline drifts toward the current smoothed value,
/// modelling slow physiological change (hydration, temperature) without
/// letting a transient sweat event move the reference.
pub const GSR_BASELINE_ADAPT_PERIOD_MS: u64 = 60_000;

/// Weight of the old baseline in the adaptation step.
///
/// `baseline = 0.99 * baseline + 0.01 * smoothed` — a 99:1 average; a
/// sustained shift takes several minutes to be absorbed.
pub const GSR_BASELINE_ADAPT_WEIGHT: f32 = 0.99;
