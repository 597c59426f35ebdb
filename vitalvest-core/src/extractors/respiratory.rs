//! Respiratory breath-state detector and rate estimator
//!
//! The respiration signal oscillates around a drifting baseline. Once per
//! window-fill the extractor recomputes the baseline (window mean) and a
//! deviation-scaled threshold pair; every sample then classifies into one of
//! three phases:
//!
//! ```text
//!         sample > inhale threshold   -> Inhale
//!         sample < exhale threshold   -> Exhale
//!         otherwise                   -> Hold
//! ```
//!
//! A completed breath is counted only on the exact Exhale→Inhale transition —
//! one full respiratory cycle boundary. Any Hold-mediated path between the
//! two phases is not a cycle boundary and does not count.

use crate::{
    buffer::RingBuffer,
    constants::respiratory::{
        BREATH_AVERAGING_WINDOW, BREATH_BAND_SIGMA, BREATH_MAX_MS, BREATH_MIN_MS,
        RESP_WINDOW_SIZE,
    },
    intervals::IntervalAverager,
    metrics::{BreathPhase, RespiratoryMetrics},
    threshold::WindowStats,
    time::Timestamp,
};

/// Threshold pair computed from one window's statistics
#[derive(Debug, Clone, Copy)]
struct BreathBands {
    inhale: f32,
    exhale: f32,
}

/// Respiratory feature extractor
///
/// `W` is the statistics window (recompute cadence), `K` the breath-interval
/// averaging window. Construct once at startup; call
/// [`process`](Self::process) once per respiratory sample.
#[derive(Clone)]
pub struct RespiratoryExtractor<const W: usize = { RESP_WINDOW_SIZE }, const K: usize = { BREATH_AVERAGING_WINDOW }> {
    window: RingBuffer<u16, W>,
    bands: Option<BreathBands>,
    phase: BreathPhase,
    previous_phase: BreathPhase,

    /// Timestamp of the previous counted Exhale→Inhale transition
    last_breath_at: Option<Timestamp>,

    intervals: IntervalAverager<K>,

    /// Completed breath cycles since startup
    breaths: u32,
}

impl<const W: usize, const K: usize> RespiratoryExtractor<W, K> {
    /// Creates an extractor with the default band geometry and breath bounds
    pub const fn new() -> Self {
        Self {
            window: RingBuffer::new(),
            bands: None,
            phase: BreathPhase::Hold,
            previous_phase: BreathPhase::Hold,
            last_breath_at: None,
            intervals: IntervalAverager::new(BREATH_MIN_MS, BREATH_MAX_MS),
            breaths: 0,
        }
    }

    /// Processes one respiratory sample
    ///
    /// Classification is a pure function of the sample and the most recently
    /// computed threshold pair, so identical input sequences from a reset
    /// state produce identical phase and rate sequences.
    pub fn process(&mut self, raw: u16, now: Timestamp) {
        let window_filled = self.window.push(raw);

        if window_filled {
            if let Some(stats) = WindowStats::from_samples(self.window.iter().map(|&s| s as f32)) {
                let half_band = BREATH_BAND_SIGMA * stats.std_dev;
                self.bands = Some(BreathBands {
                    inhale: stats.mean + half_band,
                    exhale: stats.mean - half_band,
                });
            }
        }

        // Phase stays Hold until the first window has established bands
        let Some(bands) = self.bands else {
            return;
        };

        let sample = raw as f32;
        self.previous_phase = self.phase;
        self.phase = if sample > bands.inhale {
            BreathPhase::Inhale
        } else if sample < bands.exhale {
            BreathPhase::Exhale
        } else {
            BreathPhase::Hold
        };

        // A breath completes only on the exact Exhale->Inhale edge
        if self.previous_phase == BreathPhase::Exhale && self.phase == BreathPhase::Inhale {
            self.breaths += 1;

            if let Some(previous) = self.last_breath_at {
                let candidate = now.saturating_sub(previous).min(u32::MAX as u64) as u32;
                self.intervals.offer(candidate);
            }
            self.last_breath_at = Some(now);
        }
    }

    /// Completed breath cycles since startup
    pub fn breath_count(&self) -> u32 {
        self.breaths
    }

    /// Current metric snapshot
    ///
    /// Breath rate is 0 before the first validated interval.
    pub fn metrics(&self) -> RespiratoryMetrics {
        RespiratoryMetrics {
            breath_rate_bpm: self.intervals.rate_per_minute().unwrap_or(0),
            phase: self.phase,
            raw_sample: self.window.latest().copied().unwrap_or(0),
        }
    }
}

impl<const W: usize, const K: usize> Default for RespiratoryExtractor<W, K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Establish bands around mean 500: feeding [400, 600, 400, 600] into a
    /// W=4 extractor gives baseline 500, sigma 100, inhale 550, exhale 450.
    fn primed() -> RespiratoryExtractor<4, 4> {
        let mut resp: RespiratoryExtractor<4, 4> = RespiratoryExtractor::new();
        for (i, raw) in [400u16, 600, 400, 600].iter().enumerate() {
            resp.process(*raw, i as u64 * 50);
        }
        resp
    }

    #[test]
    fn hold_before_first_window_fill() {
        let mut resp: RespiratoryExtractor<4, 4> = RespiratoryExtractor::new();
        resp.process(999, 0);
        resp.process(0, 50);

        // No bands yet: phase withheld as Hold, no breath edges possible
        assert_eq!(resp.metrics().phase, BreathPhase::Hold);
        assert_eq!(resp.breath_count(), 0);
    }

    #[test]
    fn phase_classification_against_bands() {
        let mut resp = primed();

        resp.process(600, 200);
        assert_eq!(resp.metrics().phase, BreathPhase::Inhale);

        resp.process(400, 250);
        assert_eq!(resp.metrics().phase, BreathPhase::Exhale);

        resp.process(500, 300);
        assert_eq!(resp.metrics().phase, BreathPhase::Hold);
    }

    #[test]
    fn breath_counted_only_on_exhale_to_inhale_edge() {
        let mut resp = primed();

        // Exhale followed immediately by Inhale: one breath
        resp.process(400, 200);
        resp.process(600, 250);
        assert_eq!(resp.breath_count(), 1);

        // Exhale -> Hold -> Inhale: NOT a breath
        resp.process(400, 300);
        resp.process(500, 350);
        resp.process(600, 400);
        assert_eq!(resp.breath_count(), 1);

        // Inhale -> Exhale carries no count either
        resp.process(400, 450);
        assert_eq!(resp.breath_count(), 1);
    }

    #[test]
    fn breath_rate_from_validated_intervals() {
        let mut resp = primed();

        // Exhale->Inhale edges 4000ms apart: 15 breaths/min
        let mut now = 200;
        for _ in 0..5 {
            resp.process(400, now);
            resp.process(600, now + 50);
            now += 4000;
        }

        assert_eq!(resp.metrics().breath_rate_bpm, 15);
    }

    #[test]
    fn implausible_breath_interval_rejected() {
        let mut resp = primed();

        // Two edges 500ms apart: below the 1500ms bound, no rate yet
        resp.process(400, 200);
        resp.process(600, 250);
        resp.process(400, 650);
        resp.process(600, 700);

        assert_eq!(resp.breath_count(), 2);
        assert_eq!(resp.metrics().breath_rate_bpm, 0);
    }

    #[test]
    fn identical_input_yields_identical_output() {
        // Same sequence from reset state twice: phases and rates must match
        // sample for sample
        let sequence: Vec<(u16, u64)> = (0..200)
            .map(|i| {
                let phase = (i as f32) * 0.15;
                let raw = (500.0 + 80.0 * libm::sinf(phase)) as u16;
                (raw, i as u64 * 50)
            })
            .collect();

        let mut first: RespiratoryExtractor<8, 4> = RespiratoryExtractor::new();
        let mut second: RespiratoryExtractor<8, 4> = RespiratoryExtractor::new();

        for &(raw, at) in &sequence {
            first.process(raw, at);
            second.process(raw, at);
            assert_eq!(first.metrics(), second.metrics());
        }
        assert_eq!(first.breath_count(), second.breath_count());
    }
}
