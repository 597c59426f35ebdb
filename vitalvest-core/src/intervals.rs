//! Validated Interval Averaging
//!
//! ## Overview
//!
//! Both rate outputs in the system (heart rate, breath rate) are derived the
//! same way: measure the time between two detected physiological events,
//! admit the interval only if it is physiologically plausible, and average
//! the last K admitted intervals. This module owns that shared mechanism.
//!
//! ## Why Validate at Admission?
//!
//! Detection edges are noisy. A motion artifact can fire two peak exits 100ms
//! apart; an electrode lifting can stretch a breath interval past a minute.
//! Rejecting implausible intervals *before* they enter the average keeps a
//! single artifact from dragging the reported rate — rejection is a normal
//! filtering outcome, not an error.
//!
//! ## Cold Start
//!
//! The mean is computed over populated slots only, so a valid rate is
//! available after the first admitted interval and sharpens as the ring
//! fills.

use crate::buffer::RingBuffer;

/// Ring of the last K validated event-to-event intervals
///
/// `K` is the averaging window; intervals are milliseconds. Admission bounds
/// are fixed at construction from the channel's physiological limits.
#[derive(Clone)]
pub struct IntervalAverager<const K: usize> {
    intervals: RingBuffer<u32, K>,

    /// Inclusive lower admission bound (ms)
    min_ms: u32,

    /// Inclusive upper admission bound (ms)
    max_ms: u32,
}

impl<const K: usize> IntervalAverager<K> {
    /// Creates an averager admitting intervals in `[min_ms, max_ms]`
    pub const fn new(min_ms: u32, max_ms: u32) -> Self {
        Self {
            intervals: RingBuffer::new(),
            min_ms,
            max_ms,
        }
    }

    /// Offers a candidate interval; admits it only if within bounds
    ///
    /// Returns whether the interval was admitted. An out-of-range candidate
    /// leaves the average untouched.
    pub fn offer(&mut self, interval_ms: u32) -> bool {
        if interval_ms < self.min_ms || interval_ms > self.max_ms {
            return false;
        }

        self.intervals.push(interval_ms);
        true
    }

    /// Mean of admitted intervals (ms), `None` until one is admitted
    pub fn mean_ms(&self) -> Option<u32> {
        if self.intervals.is_empty() {
            return None;
        }

        let sum: u64 = self.intervals.iter().map(|&i| i as u64).sum();
        Some((sum / self.intervals.len() as u64) as u32)
    }

    /// Events per minute from the current mean, `None` until one interval
    /// is admitted
    pub fn rate_per_minute(&self) -> Option<u16> {
        self.mean_ms().map(|mean| {
            if mean == 0 {
                0
            } else {
                (crate::constants::MS_PER_MINUTE / mean) as u16
            }
        })
    }

    /// Number of admitted intervals currently in the ring
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// True until the first interval is admitted
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range() {
        let mut avg: IntervalAverager<4> = IntervalAverager::new(300, 2000);

        assert!(!avg.offer(100)); // too fast
        assert!(!avg.offer(2500)); // too slow
        assert!(avg.is_empty());
        assert!(avg.mean_ms().is_none());
        assert!(avg.rate_per_minute().is_none());
    }

    #[test]
    fn cold_start_averages_populated_slots() {
        let mut avg: IntervalAverager<4> = IntervalAverager::new(300, 2000);

        avg.offer(800);
        assert_eq!(avg.mean_ms(), Some(800));

        avg.offer(1000);
        assert_eq!(avg.len(), 2);
        assert_eq!(avg.mean_ms(), Some(900));
    }

    #[test]
    fn rate_from_mean() {
        let mut avg: IntervalAverager<4> = IntervalAverager::new(300, 2000);

        for _ in 0..4 {
            avg.offer(800);
        }

        // 60000 / 800 = 75
        assert_eq!(avg.rate_per_minute(), Some(75));
    }

    #[test]
    fn spurious_interval_does_not_perturb_rate() {
        let mut avg: IntervalAverager<4> = IntervalAverager::new(300, 2000);

        for _ in 0..4 {
            avg.offer(800);
        }
        let before = avg.rate_per_minute();

        // 100ms is outside [300, 2000]: must be invisible
        assert!(!avg.offer(100));
        assert_eq!(avg.rate_per_minute(), before);
    }

    #[test]
    fn window_keeps_last_k() {
        let mut avg: IntervalAverager<2> = IntervalAverager::new(300, 2000);

        avg.offer(400);
        avg.offer(600);
        avg.offer(800); // evicts 400

        assert_eq!(avg.mean_ms(), Some(700));
    }
}
