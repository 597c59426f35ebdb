//! Constants for VitalVest Core
//!
//! Centralized, documented constants for every tunable in the system. All
//! numeric values live here with their purpose and rationale; the extractors
//! and the scheduler never embed untyped literals.
//!
//! ## Organization
//!
//! Constants are grouped by domain:
//! - **Sampling**: task periods for the multi-rate scheduler
//! - **Cardiac**: ECG window, threshold fractions, RR validity bounds
//! - **Respiratory**: breath window, band widths, breath validity bounds
//! - **Gsr**: smoothing window, calibration, classification boundaries
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. When adding new constants, document purpose and source
//! 3. Use descriptive names that include units

/// Task periods for the multi-rate scheduler.
pub mod sampling;

/// Cardiac channel windows, thresholds and validity bounds.
pub mod cardiac;

/// Respiratory channel windows, bands and validity bounds.
pub mod respiratory;

/// GSR channel smoothing, calibration and classification boundaries.
pub mod gsr;

// Re-export commonly used constants for convenience
pub use sampling::{
    CARDIAC_PERIOD_MS, RESPIRATORY_PERIOD_MS, GSR_PERIOD_MS,
    DISPLAY_PERIOD_MS, RECORD_PERIOD_MS, MS_PER_MINUTE,
};

pub use cardiac::{
    ECG_WINDOW_SIZE, PEAK_THRESHOLD_FRACTION, PEAK_HYSTERESIS_FRACTION,
    RR_MIN_MS, RR_MAX_MS, RR_AVERAGING_WINDOW,
};

pub use respiratory::{
    RESP_WINDOW_SIZE, BREATH_BAND_SIGMA, BREATH_MIN_MS, BREATH_MAX_MS,
    BREATH_AVERAGING_WINDOW,
};

pub use gsr::{
    GSR_WINDOW_SIZE, GSR_CALIBRATION_SAMPLES,
    SWEAT_LOW_DELTA, SWEAT_MED_DELTA, SWEAT_HIGH_DELTA,
    GSR_BASELINE_ADAPT_PERIOD_MS, GSR_BASELINE_ADAPT_WEIGHT,
};
