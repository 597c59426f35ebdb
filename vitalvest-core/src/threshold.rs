//! Adaptive Threshold Tracking
//!
//! ## Overview
//!
//! Physiological signal amplitudes drift with electrode contact, skin
//! condition and motion, so fixed detection thresholds fail within minutes of
//! wear. This module provides the two adaptive estimators the extractors
//! recompute at window-fill cadence:
//!
//! - [`PeakThreshold`]: a rolling min/max range tracker whose threshold sits
//!   at a fixed fraction of the observed range. Used by the cardiac peak
//!   detector.
//! - [`WindowStats`]: mean and standard deviation over one full window
//!   traversal. Used by the respiratory detector to place its inhale/exhale
//!   bands.
//!
//! ## Epoch Discipline
//!
//! A recompute must never reuse raw extrema from a previous epoch: after each
//! recompute the min/max are re-seeded to a hysteresis band centered on the
//! new threshold. The band is the *deliberate* carry-over — wide enough that
//! a quiet window cannot collapse the range to zero, narrow enough that a
//! noisy window cannot ratchet it outward forever.

/// Rolling min/max tracker deriving a fractional-range threshold
///
/// Per-sample cost is two comparisons; the O(1) recompute runs only at
/// window-fill.
#[derive(Debug, Clone)]
pub struct PeakThreshold {
    min: f32,
    max: f32,
    threshold: Option<f32>,

    /// Threshold position within the range, e.g. 0.6
    fraction: f32,

    /// Re-seed band width as a fraction of the range, e.g. 0.8
    hysteresis: f32,
}

impl PeakThreshold {
    /// Creates a tracker with the given threshold fraction and hysteresis
    /// band width
    pub const fn new(fraction: f32, hysteresis: f32) -> Self {
        Self {
            min: f32::MAX,
            max: f32::MIN,
            threshold: None,
            fraction,
            hysteresis,
        }
    }

    /// Folds one sample into the running extrema
    pub fn observe(&mut self, sample: f32) {
        if sample < self.min {
            self.min = sample;
        }
        if sample > self.max {
            self.max = sample;
        }
    }

    /// Recomputes the threshold from the current epoch's extrema and
    /// re-seeds them for the next epoch
    ///
    /// Call exactly once per window-fill event. Returns the new threshold.
    pub fn recompute(&mut self) -> f32 {
        let range = self.max - self.min;
        let threshold = self.min + self.fraction * range;

        // Hysteresis band centered on the new threshold replaces the raw
        // extrema for the next epoch
        let half_band = self.hysteresis * range * 0.5;
        self.min = threshold - half_band;
        self.max = threshold + half_band;

        self.threshold = Some(threshold);
        threshold
    }

    /// Current threshold; `None` until the first recompute
    pub fn threshold(&self) -> Option<f32> {
        self.threshold
    }
}

/// Mean and standard deviation over one full window traversal
///
/// O(N) in the window size; computed only at window-fill cadence, never per
/// sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowStats {
    /// Arithmetic mean of the window
    pub mean: f32,

    /// Population standard deviation of the window
    pub std_dev: f32,
}

impl WindowStats {
    /// Computes stats from an iterator over the window's samples
    ///
    /// Returns `None` for an empty window.
    pub fn from_samples<I>(samples: I) -> Option<Self>
    where
        I: Iterator<Item = f32> + Clone,
    {
        let mut count = 0u32;
        let mut sum = 0.0f32;
        for s in samples.clone() {
            sum += s;
            count += 1;
        }

        if count == 0 {
            return None;
        }

        let mean = sum / count as f32;

        let mut sq_sum = 0.0f32;
        for s in samples {
            let d = s - mean;
            sq_sum += d * d;
        }
        let std_dev = libm::sqrtf(sq_sum / count as f32);

        Some(Self { mean, std_dev })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_fraction_of_range() {
        let mut tracker = PeakThreshold::new(0.6, 0.8);
        assert!(tracker.threshold().is_none());

        tracker.observe(300.0);
        tracker.observe(700.0);

        // min + 0.6 * (max - min) = 300 + 240
        assert_eq!(tracker.recompute(), 540.0);
        assert_eq!(tracker.threshold(), Some(540.0));
    }

    #[test]
    fn hysteresis_reseed_centers_on_threshold() {
        let mut tracker = PeakThreshold::new(0.6, 0.8);
        tracker.observe(300.0);
        tracker.observe(700.0);
        tracker.recompute(); // threshold 540, band 320 -> extrema [380, 700]

        // A quiet next window adds nothing outside the band; the threshold
        // stays put instead of collapsing
        tracker.observe(540.0);
        assert_eq!(tracker.recompute(), 380.0 + 0.6 * 320.0);
    }

    #[test]
    fn quiet_signal_does_not_collapse_threshold() {
        let mut tracker = PeakThreshold::new(0.6, 0.8);
        tracker.observe(300.0);
        tracker.observe(700.0);
        let first = tracker.recompute();

        // Several epochs of flat signal at the threshold: the band keeps the
        // range non-degenerate
        for _ in 0..5 {
            tracker.observe(first);
            tracker.recompute();
        }

        let (min, max) = (tracker.min, tracker.max);
        assert!(max > min);
    }

    #[test]
    fn window_stats_mean_and_deviation() {
        let samples = [2.0f32, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let stats = WindowStats::from_samples(samples.iter().copied()).unwrap();

        assert_eq!(stats.mean, 5.0);
        assert!((stats.std_dev - 2.0).abs() < 1e-6);
    }

    #[test]
    fn window_stats_empty() {
        let stats = WindowStats::from_samples(core::iter::empty::<f32>());
        assert!(stats.is_none());
    }
}
