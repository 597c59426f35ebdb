//! Synthetic Exercise Session Example
//!
//! This example runs the full monitor loop against synthetic waveforms:
//! a rectangular ECG at 75 bpm, a square respiration trace at 15 breaths/min
//! and a GSR trace that steps up after calibration, simulating the onset of
//! sweating.
//!
//! ## What You'll Learn
//!
//! - Plugging a `SampleSource`, `DisplaySink` and `RecordSink` into the
//!   monitor
//! - Driving `tick()` with explicit synthetic time (no real delays)
//! - Reading the per-second snapshots the display collaborator receives
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_synthetic_session
//! ```

use vitalvest_core::{
    BreathPhase, CardiacSample, DisplaySink, FixedTime, RecordSink, SampleSource,
    SchedulerConfig, SinkError, TimeSource, VitalsMonitor, VitalsRecord, VitalsSnapshot,
};

/// Generates the three synthetic waveforms from per-channel read indices
struct SyntheticVest {
    cardiac_reads: u64,
    resp_reads: u64,
    gsr_reads: u64,
}

impl SampleSource for SyntheticVest {
    fn read_cardiac(&mut self) -> CardiacSample {
        let t = self.cardiac_reads * 3; // sampled every 3ms
        self.cardiac_reads += 1;

        // 800ms beat with a 30ms QRS-like plateau
        let raw = if t % 800 < 30 { 700 } else { 300 };
        CardiacSample { raw, lead_p_off: false, lead_n_off: false }
    }

    fn read_respiratory(&mut self) -> u16 {
        let t = self.resp_reads * 125; // sampled every 125ms
        self.resp_reads += 1;

        // 4000ms breath cycle, steep inspiration onset
        if t % 4000 < 2000 {
            400
        } else {
            600
        }
    }

    fn read_gsr(&mut self) -> u16 {
        let reads = self.gsr_reads;
        self.gsr_reads += 1;

        // Dry through the 10s calibration, then a sweat step
        if reads < 60 {
            300
        } else {
            340
        }
    }
}

/// Prints one status line per display tick, like the character display would
struct ConsoleDisplay;

impl DisplaySink for ConsoleDisplay {
    fn render(&mut self, snapshot: &VitalsSnapshot) {
        let hr = match snapshot.cardiac.heart_rate_bpm {
            0 => "---".to_string(),
            bpm => format!("{bpm:3}"),
        };
        let phase = match snapshot.respiratory.phase {
            BreathPhase::Inhale => "inhale",
            BreathPhase::Exhale => "exhale",
            BreathPhase::Hold => "hold  ",
        };
        let sweat = match snapshot.gsr.sweat_level {
            None => "calibrating".to_string(),
            Some(level) => format!("{level:?}"),
        };

        println!(
            "t={:5}ms  HR {} bpm  RR {:2} /min ({})  sweat: {}",
            snapshot.timestamp_ms,
            hr,
            snapshot.respiratory.breath_rate_bpm,
            phase,
            sweat,
        );
    }
}

/// Collects rows the way the SD-card logger would
struct MemoryLog {
    rows: Vec<VitalsRecord>,
}

impl RecordSink for MemoryLog {
    fn append(&mut self, record: &VitalsRecord) -> Result<(), SinkError> {
        self.rows.push(*record);
        Ok(())
    }
}

fn main() {
    println!("VitalVest Synthetic Session");
    println!("===========================\n");

    let config = SchedulerConfig {
        respiratory_period_ms: 125,
        ..SchedulerConfig::default()
    };

    let mut monitor = VitalsMonitor::new(
        config,
        SyntheticVest { cardiac_reads: 0, resp_reads: 0, gsr_reads: 0 },
        ConsoleDisplay,
        MemoryLog { rows: Vec::new() },
    )
    .expect("valid configuration");

    // 30 seconds of synthetic time, 1ms tick granularity, no real delays
    let mut clock = FixedTime::new(0);
    while clock.now() <= 30_000 {
        monitor.tick(clock.now());
        clock.advance(1);
    }

    let last = monitor.record().rows.last().expect("rows were logged");
    println!("\nLogged {} rows; final: {:?}", monitor.record().rows.len(), last);
    println!("Rows lost to sink failures: {}", monitor.lost_records());
}
