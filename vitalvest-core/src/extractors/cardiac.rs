//! Cardiac peak detector and heart-rate estimator
//!
//! Edge-based QRS detection against an adaptive threshold:
//! - the threshold floats at a fixed fraction of the signal range, recomputed
//!   once per window-fill with hysteresis re-seeding
//! - a peak is the excursion between the rising crossing and the falling
//!   crossing of that threshold
//! - the time between consecutive falling crossings is the RR interval,
//!   admitted to the averager only when physiologically plausible
//!
//! Lead-off (either electrode losing skin contact) degrades the output to
//! the unknown sentinel without touching detection history, so the rate
//! recovers immediately on reconnection.

use crate::{
    buffer::RingBuffer,
    constants::cardiac::{
        ECG_WINDOW_SIZE, PEAK_HYSTERESIS_FRACTION, PEAK_THRESHOLD_FRACTION,
        RR_AVERAGING_WINDOW, RR_MAX_MS, RR_MIN_MS,
    },
    intervals::IntervalAverager,
    metrics::CardiacMetrics,
    threshold::PeakThreshold,
    time::Timestamp,
};

/// Cardiac feature extractor
///
/// `W` is the ECG window (threshold recompute cadence), `K` the RR averaging
/// window. Construct once at startup; call [`process`](Self::process) once
/// per cardiac sample.
#[derive(Clone)]
pub struct CardiacExtractor<const W: usize = { ECG_WINDOW_SIZE }, const K: usize = { RR_AVERAGING_WINDOW }> {
    window: RingBuffer<u16, W>,
    threshold: PeakThreshold,
    intervals: IntervalAverager<K>,

    /// Timestamp of the previous peak exit (falling crossing)
    last_peak_at: Option<Timestamp>,

    /// True between the rising and falling threshold crossings
    in_peak: bool,

    /// Running maximum of the current peak excursion
    peak_value: f32,

    lead_off: bool,
}

impl<const W: usize, const K: usize> CardiacExtractor<W, K> {
    /// Creates an extractor with the default threshold geometry and RR bounds
    pub const fn new() -> Self {
        Self {
            window: RingBuffer::new(),
            threshold: PeakThreshold::new(PEAK_THRESHOLD_FRACTION, PEAK_HYSTERESIS_FRACTION),
            intervals: IntervalAverager::new(RR_MIN_MS, RR_MAX_MS),
            last_peak_at: None,
            in_peak: false,
            peak_value: 0.0,
            lead_off: false,
        }
    }

    /// Processes one cardiac sample
    ///
    /// `lead_p_off` / `lead_n_off` are the electrode contact-loss signals
    /// from the analog front-end. While either is asserted the sample is
    /// discarded and the rate output reads unknown; all history is preserved
    /// so detection resumes cleanly on reconnection.
    pub fn process(&mut self, raw: u16, lead_p_off: bool, lead_n_off: bool, now: Timestamp) {
        if lead_p_off || lead_n_off {
            self.lead_off = true;
            return;
        }
        self.lead_off = false;

        let window_filled = self.window.push(raw);
        let sample = raw as f32;
        self.threshold.observe(sample);

        if window_filled {
            self.threshold.recompute();
        }

        // No detection until the first window has established a threshold
        let Some(threshold) = self.threshold.threshold() else {
            return;
        };

        if !self.in_peak {
            if sample > threshold {
                self.in_peak = true;
                self.peak_value = sample;
            }
        } else if sample > threshold {
            if sample > self.peak_value {
                self.peak_value = sample;
            }
        } else {
            // Falling crossing: the peak is complete and its exit time marks
            // the RR boundary
            self.in_peak = false;

            if let Some(previous) = self.last_peak_at {
                let candidate = now.saturating_sub(previous).min(u32::MAX as u64) as u32;
                self.intervals.offer(candidate);
            }
            self.last_peak_at = Some(now);
        }
    }

    /// Current metric snapshot
    ///
    /// Heart rate is 0 (unknown) while lead-off is asserted or before the
    /// first validated RR interval.
    pub fn metrics(&self) -> CardiacMetrics {
        let heart_rate_bpm = if self.lead_off {
            0
        } else {
            self.intervals.rate_per_minute().unwrap_or(0)
        };

        CardiacMetrics {
            heart_rate_bpm,
            lead_off: self.lead_off,
            raw_sample: self.window.latest().copied().unwrap_or(0),
        }
    }
}

impl<const W: usize, const K: usize> Default for CardiacExtractor<W, K> {
    fn default() -> Self {
        Self::new()
    }
}
