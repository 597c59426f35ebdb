//! GSR smoothing, calibration and sweat-level classification
//!
//! Galvanic skin response is slow and noisy, so the raw stream is reduced to
//! a full-window moving average before anything else looks at it. The
//! classifier is relative, not absolute: skin conductance varies wildly
//! between wearers, so the level is the *delta* between the smoothed value
//! and a per-session baseline captured during a one-shot calibration phase.
//!
//! After calibration the baseline is not frozen: once per minute of wall time
//! it drifts toward the current smoothed value with a 99:1 weighted average,
//! absorbing slow physiological change (hydration, skin temperature) while
//! staying immune to transient sweat events.

use crate::{
    buffer::RingBuffer,
    constants::gsr::{
        GSR_BASELINE_ADAPT_PERIOD_MS, GSR_BASELINE_ADAPT_WEIGHT, GSR_CALIBRATION_SAMPLES,
        GSR_WINDOW_SIZE, SWEAT_HIGH_DELTA, SWEAT_LOW_DELTA, SWEAT_MED_DELTA,
    },
    metrics::{GsrMetrics, SweatLevel},
    time::Timestamp,
};

/// GSR feature extractor
///
/// `W` is the smoothing window. Construct once at startup; call
/// [`process`](Self::process) once per GSR sample.
#[derive(Clone)]
pub struct GsrExtractor<const W: usize = { GSR_WINDOW_SIZE }> {
    window: RingBuffer<u16, W>,
    smoothed: f32,
    baseline: f32,

    /// Permanently true once the calibration count is reached
    calibrated: bool,

    /// Samples required before the baseline locks in
    calibration_samples: u32,

    /// Samples observed during the calibration phase
    samples_seen: u32,

    /// Withheld (`None`) until calibration completes
    level: Option<SweatLevel>,

    /// Wall time of the last baseline adaptation step
    last_adapt_at: Option<Timestamp>,

    /// Period between adaptation steps (ms)
    adapt_period_ms: u64,
}

impl<const W: usize> GsrExtractor<W> {
    /// Creates an extractor with the default calibration length and
    /// adaptation period
    pub const fn new() -> Self {
        Self {
            window: RingBuffer::new(),
            smoothed: 0.0,
            baseline: 0.0,
            calibrated: false,
            calibration_samples: GSR_CALIBRATION_SAMPLES,
            samples_seen: 0,
            level: None,
            last_adapt_at: None,
            adapt_period_ms: GSR_BASELINE_ADAPT_PERIOD_MS,
        }
    }

    /// Overrides the calibration sample count (tests, short demos)
    pub const fn with_calibration_samples(mut self, samples: u32) -> Self {
        self.calibration_samples = samples;
        self
    }

    /// Overrides the baseline adaptation period (tests, short demos)
    pub const fn with_adapt_period(mut self, period_ms: u64) -> Self {
        self.adapt_period_ms = period_ms;
        self
    }

    /// Maps a smoothed-minus-baseline delta to a sweat level
    ///
    /// Band edges are half-open: a delta exactly on a boundary belongs to
    /// the higher band (10 is Low, 30 is Med, 60 is High).
    pub fn classify_delta(delta: f32) -> SweatLevel {
        if delta < SWEAT_LOW_DELTA {
            SweatLevel::Dry
        } else if delta < SWEAT_MED_DELTA {
            SweatLevel::Low
        } else if delta < SWEAT_HIGH_DELTA {
            SweatLevel::Med
        } else {
            SweatLevel::High
        }
    }

    /// Processes one GSR sample
    ///
    /// The full-window moving average is recomputed on every sample — cheap
    /// at this window size and always current for the classifier.
    pub fn process(&mut self, raw: u16, now: Timestamp) {
        self.window.push(raw);

        let sum: f32 = self.window.iter().map(|&s| s as f32).sum();
        self.smoothed = sum / self.window.len() as f32;

        if !self.calibrated {
            self.samples_seen += 1;
            if self.samples_seen >= self.calibration_samples {
                // One-shot transition: the reference is the smoothed value
                // at the moment calibration completes
                self.baseline = self.smoothed;
                self.calibrated = true;
                self.last_adapt_at = Some(now);
                self.level = Some(Self::classify_delta(0.0));
            }
            return;
        }

        if let Some(last) = self.last_adapt_at {
            if now.saturating_sub(last) >= self.adapt_period_ms {
                self.baseline = GSR_BASELINE_ADAPT_WEIGHT * self.baseline
                    + (1.0 - GSR_BASELINE_ADAPT_WEIGHT) * self.smoothed;
                self.last_adapt_at = Some(now);
            }
        }

        self.level = Some(Self::classify_delta(self.smoothed - self.baseline));
    }

    /// Current baseline (meaningful once calibrated)
    pub fn baseline(&self) -> f32 {
        self.baseline
    }

    /// Current metric snapshot
    pub fn metrics(&self) -> GsrMetrics {
        GsrMetrics {
            sweat_level: self.level,
            smoothed: self.smoothed,
            raw_sample: self.window.latest().copied().unwrap_or(0),
            calibrated: self.calibrated,
        }
    }
}

impl<const W: usize> Default for GsrExtractor<W> {
    fn default() -> Self {
        Self::new()
    }
}
