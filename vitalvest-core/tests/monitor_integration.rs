//! End-to-end monitor loop tests
//!
//! Drives a full `VitalsMonitor` with synthetic waveforms on a deterministic
//! clock: a rectangular ECG at 75 bpm, a square respiration trace at
//! 15 breaths/min (inspiration onset is steep, as in real breathing, so the
//! Exhale→Inhale edge lands in one sample step) and a GSR step that crosses
//! one classification boundary after calibration.

use vitalvest_core::{
    BreathPhase, CardiacSample, DisplaySink, RecordSink, SampleSource, SchedulerConfig,
    SinkError, SweatLevel, VitalsMonitor, VitalsRecord, VitalsSnapshot,
};

/// Synthetic analog front-end
///
/// Each channel generates its waveform from its own read index; the
/// scheduler reads every channel exactly on its period, so index * period is
/// the sample's timestamp.
struct SyntheticVest {
    cardiac_reads: u64,
    resp_reads: u64,
    gsr_reads: u64,
    cardiac_period_ms: u64,
    resp_period_ms: u64,
}

impl SyntheticVest {
    fn new(config: &SchedulerConfig) -> Self {
        Self {
            cardiac_reads: 0,
            resp_reads: 0,
            gsr_reads: 0,
            cardiac_period_ms: config.cardiac_period_ms as u64,
            resp_period_ms: config.respiratory_period_ms as u64,
        }
    }
}

impl SampleSource for SyntheticVest {
    fn read_cardiac(&mut self) -> CardiacSample {
        let t = self.cardiac_reads * self.cardiac_period_ms;
        self.cardiac_reads += 1;

        // 800ms beat: 30ms QRS-like plateau at 700, baseline 300
        let raw = if t % 800 < 30 { 700 } else { 300 };
        CardiacSample { raw, lead_p_off: false, lead_n_off: false }
    }

    fn read_respiratory(&mut self) -> u16 {
        let t = self.resp_reads * self.resp_period_ms;
        self.resp_reads += 1;

        // 4000ms cycle: exhaled half at 400, inhaled half at 600
        if t % 4000 < 2000 {
            400
        } else {
            600
        }
    }

    fn read_gsr(&mut self) -> u16 {
        let reads = self.gsr_reads;
        self.gsr_reads += 1;

        // Dry skin through calibration (50 samples), then a sweat step
        if reads < 60 {
            300
        } else {
            340
        }
    }
}

struct CapturingDisplay {
    snapshots: Vec<VitalsSnapshot>,
}

impl DisplaySink for CapturingDisplay {
    fn render(&mut self, snapshot: &VitalsSnapshot) {
        self.snapshots.push(*snapshot);
    }
}

struct MemorySink {
    rows: Vec<VitalsRecord>,
}

impl RecordSink for MemorySink {
    fn append(&mut self, record: &VitalsRecord) -> Result<(), SinkError> {
        self.rows.push(*record);
        Ok(())
    }
}

struct BrokenSink;

impl RecordSink for BrokenSink {
    fn append(&mut self, _record: &VitalsRecord) -> Result<(), SinkError> {
        Err(SinkError { reason: "sd init failed" })
    }
}

/// Config with the respiratory window spanning one full synthetic breath
/// cycle (32 samples x 125ms = 4000ms), keeping the baseline estimate stable
fn session_config() -> SchedulerConfig {
    SchedulerConfig {
        respiratory_period_ms: 125,
        ..SchedulerConfig::default()
    }
}

/// Runs the monitor over `duration_ms` of synthetic time at 1ms tick
/// granularity
fn run_session(duration_ms: u64) -> VitalsMonitor<SyntheticVest, CapturingDisplay, MemorySink> {
    let config = session_config();
    let mut monitor = VitalsMonitor::new(
        config,
        SyntheticVest::new(&config),
        CapturingDisplay { snapshots: Vec::new() },
        MemorySink { rows: Vec::new() },
    )
    .expect("valid configuration");

    for now in 0..=duration_ms {
        monitor.tick(now);
    }
    monitor
}

#[test]
fn heart_rate_converges_on_synthetic_beats() {
    let monitor = run_session(30_000);

    // 800ms spacing = 75 bpm; the 3ms sampling grid does not divide 800, so
    // individual RR measurements land on 798/801 and the mean rounds within 1
    let cardiac = monitor.snapshot(30_000).cardiac;
    assert!(
        (74..=76).contains(&cardiac.heart_rate_bpm),
        "heart rate {} not near 75",
        cardiac.heart_rate_bpm
    );
    assert!(!cardiac.lead_off);
}

#[test]
fn breath_rate_converges_on_synthetic_cycle() {
    let monitor = run_session(30_000);

    assert_eq!(monitor.snapshot(30_000).respiratory.breath_rate_bpm, 15);

    // Both active phases show up across the per-second display snapshots
    let phases: Vec<BreathPhase> = monitor
        .display()
        .snapshots
        .iter()
        .map(|s| s.respiratory.phase)
        .collect();
    assert!(phases.contains(&BreathPhase::Inhale));
    assert!(phases.contains(&BreathPhase::Exhale));
}

#[test]
fn gsr_calibrates_then_classifies_the_step() {
    let monitor = run_session(30_000);

    let gsr = monitor.snapshot(30_000).gsr;
    assert!(gsr.calibrated);
    // Step of +40 raw units over the locked baseline lands in the Med band
    assert_eq!(gsr.sweat_level, Some(SweatLevel::Med));

    // Before the step the level was already reported, as Dry
    let early = monitor
        .display()
        .snapshots
        .iter()
        .find(|s| s.timestamp_ms == 11_000)
        .expect("snapshot at 11s");
    assert_eq!(early.gsr.sweat_level, Some(SweatLevel::Dry));
}

#[test]
fn records_flow_once_per_second_with_fresh_values() {
    let monitor = run_session(30_000);

    // Record task fires at t=0 and every 1000ms after: 31 rows
    assert_eq!(monitor.lost_records(), 0);
    let rows = &monitor.record().rows;
    assert_eq!(rows.len(), 31);

    // Field contract sanity on a row past the convergence transient
    let row = rows[20];
    assert_eq!(row.timestamp_ms, 20_000);
    assert!((74..=76).contains(&row.heart_rate_bpm));
    assert_eq!(row.breath_rate_bpm, 15);
    assert_eq!(row.sweat_level, SweatLevel::Med.ordinal());
    assert!(row.ecg_raw == 300 || row.ecg_raw == 700);
}

#[test]
fn display_snapshots_match_record_rows() {
    let monitor = run_session(10_000);

    // Display and record share the cadence; within each tick the display
    // fires first and nothing mutates extractor state in between, so every
    // rendered snapshot must agree with the row persisted in the same tick
    let snapshots = &monitor.display().snapshots;
    let rows = &monitor.record().rows;
    assert_eq!(snapshots.len(), rows.len());

    for (snapshot, row) in snapshots.iter().zip(rows.iter()) {
        assert_eq!(&VitalsRecord::from(snapshot), row);
    }
}

#[test]
fn storage_failure_does_not_interrupt_signal_processing() {
    let config = session_config();
    let mut monitor = VitalsMonitor::new(
        config,
        SyntheticVest::new(&config),
        CapturingDisplay { snapshots: Vec::new() },
        BrokenSink,
    )
    .expect("valid configuration");

    for now in 0..=30_000u64 {
        monitor.tick(now);
    }

    // Every row was lost, yet metrics kept flowing
    assert_eq!(monitor.lost_records(), 31);
    let hr = monitor.snapshot(30_000).cardiac.heart_rate_bpm;
    assert!((74..=76).contains(&hr));
}
