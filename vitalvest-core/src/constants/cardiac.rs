//! Cardiac Channel Constants
//!
//! Window sizes, threshold geometry and RR-interval validity bounds for the
//! peak detector.

/// ECG ring buffer capacity (samples).
///
/// 256 samples at 3ms is a ~768ms window — covering at least one full beat at
/// any plausible heart rate, so the min/max tracked across one window always
/// spans a QRS peak. Power of 2 so the ring cursor wrap is a bit mask.
pub const ECG_WINDOW_SIZE: usize = 256;

/// Peak threshold position within the observed signal range.
///
/// `threshold = min + 0.6 * (max - min)`: above the T-wave, below the
/// R-peak for typical single-lead amplitudes.
pub const PEAK_THRESHOLD_FRACTION: f32 = 0.6;

/// Width of the hysteresis band used to re-seed min/max after a recompute,
/// as a fraction of the previous window's range.
///
/// Re-seeding with an 80%-width band centered on the new threshold prevents
/// the threshold collapsing on a quiet signal and prevents unbounded drift on
/// a noisy one.
pub const PEAK_HYSTERESIS_FRACTION: f32 = 0.8;

/// Minimum plausible RR interval (ms). 300ms = 200 bpm.
pub const RR_MIN_MS: u32 = 300;

/// Maximum plausible RR interval (ms). 2000ms = 30 bpm.
pub const RR_MAX_MS: u32 = 2_000;

/// Number of validated RR intervals averaged for the heart-rate output.
///
/// Eight beats smooths respiratory sinus arrhythmia without making the
/// display lag a real rate change by more than a few seconds.
pub const RR_AVERAGING_WINDOW: usize = 8;
