//! Multi-Rate Scheduler Periods
//!
//! Each task in the monitor loop fires at its own fixed cadence from a single
//! monotonic clock. Periods are chosen per channel bandwidth, not per
//! convenience: the ECG front-end needs sub-5ms sampling to resolve the QRS
//! complex, while sweat response evolves over seconds.

/// Milliseconds per minute, used for rate conversions (60000 / mean interval).
pub const MS_PER_MINUTE: u32 = 60_000;

/// Cardiac sampling period (ms).
///
/// ~333 Hz. The QRS complex lasts 80-120ms; sampling every 3ms gives
/// 25+ samples across it, enough for edge-based peak detection without
/// interpolation.
pub const CARDIAC_PERIOD_MS: u32 = 3;

/// Respiratory sampling period (ms).
///
/// 20 Hz. Breathing tops out around 40 breaths/min (1.5s per cycle);
/// 50ms sampling leaves 30 samples per fastest cycle.
pub const RESPIRATORY_PERIOD_MS: u32 = 50;

/// GSR sampling period (ms).
///
/// 5 Hz. Electrodermal response has a rise time of ~1s; faster sampling
/// only adds noise to the moving average.
pub const GSR_PERIOD_MS: u32 = 200;

/// Display refresh period (ms).
///
/// 1 Hz matches human reading speed on a character display and keeps the
/// slowest task well clear of the sampling cadences.
pub const DISPLAY_PERIOD_MS: u32 = 1_000;

/// Persistence flush period (ms).
///
/// One record row per second. The record sink consumes the same snapshot the
/// display does, in the same tick, after all extractors have updated.
pub const RECORD_PERIOD_MS: u32 = 1_000;

/// Default worst-case execution budget per task (ms).
///
/// Validated against the fastest period at startup: any single task must
/// complete inside one cardiac period or the scheduler cannot keep up.
pub const DEFAULT_TASK_BUDGET_MS: u32 = 1;
