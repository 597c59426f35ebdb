//! Multi-Rate Monitor Loop
//!
//! ## Overview
//!
//! A single cooperative control loop drives every component at its own fixed
//! cadence from one monotonic clock. There is exactly one execution context:
//! each task runs to completion before control returns, so no state is ever
//! observed half-updated and no locking exists anywhere in the core.
//!
//! ## Timing Contract
//!
//! [`VitalsMonitor::tick`] is called as often as possible (busy-poll or
//! cooperative yield). For each task with period `P` and last-fire time `T`:
//! if `now − T ≥ P`, the task executes exactly once and `T` is set to `now` —
//! not `T += P`. This accepts minor jitter in exchange for simplicity and
//! immunity to missed-tick pileup: a long stall costs at most one firing per
//! task, never a burst of catch-up firings.
//!
//! ## Ordering
//!
//! Within one tick, tasks fire in fixed priority order:
//!
//! ```text
//! cardiac > respiratory > gsr > display > record
//! ```
//!
//! Extractor updates strictly precede consumer reads, so the display and the
//! record sink always observe the freshest metrics computed in that same
//! tick.
//!
//! ## Failure Semantics
//!
//! A task whose declared worst-case execution exceeds the fastest period is a
//! configuration error reported by the constructor, never recovered at
//! runtime. A failing record sink is reported once, counted, and survived —
//! persistence trouble must not interrupt signal processing.

use heapless::Vec;

use crate::{
    errors::{ConfigError, ConfigResult, SinkError},
    extractors::{CardiacExtractor, GsrExtractor, RespiratoryExtractor},
    metrics::{VitalsRecord, VitalsSnapshot},
    time::Timestamp,
};

use crate::constants::sampling::{
    CARDIAC_PERIOD_MS, DEFAULT_TASK_BUDGET_MS, DISPLAY_PERIOD_MS, GSR_PERIOD_MS,
    RECORD_PERIOD_MS, RESPIRATORY_PERIOD_MS,
};

/// Fixed task-table capacity; five tasks today, headroom for future channels
const MAX_TASKS: usize = 8;

/// Identity of a scheduled task, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskId {
    /// Cardiac sampling (highest priority)
    Cardiac,
    /// Respiratory sampling
    Respiratory,
    /// GSR sampling
    Gsr,
    /// Display refresh
    Display,
    /// Persistence flush (lowest priority)
    Record,
}

/// One cardiac sampling event: raw amplitude plus the two electrode
/// contact-loss signals from the analog front-end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardiacSample {
    /// Raw ADC amplitude
    pub raw: u16,
    /// Positive electrode lost skin contact
    pub lead_p_off: bool,
    /// Negative electrode lost skin contact
    pub lead_n_off: bool,
}

/// One physical sampling event, routed to the matching extractor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    /// Cardiac channel (carries the lead-contact aux signals)
    Cardiac(CardiacSample),
    /// Respiratory channel
    Respiratory(u16),
    /// GSR channel
    Gsr(u16),
}

/// Source of raw samples, one read per sampling-task firing
///
/// Implemented over the ADC on hardware and over scripted waveforms in tests
/// and demos.
pub trait SampleSource {
    /// Read the cardiac channel (amplitude + lead-contact signals)
    fn read_cardiac(&mut self) -> CardiacSample;

    /// Read the respiratory channel
    fn read_respiratory(&mut self) -> u16;

    /// Read the GSR channel
    fn read_gsr(&mut self) -> u16;
}

/// Display collaborator: receives one snapshot per display tick
///
/// Rendering and all string formatting live behind this trait, outside the
/// core.
pub trait DisplaySink {
    /// Present the snapshot to the wearer
    fn render(&mut self, snapshot: &VitalsSnapshot);
}

/// Persistence collaborator: receives one record row per record tick
pub trait RecordSink {
    /// Append one row; failures are counted by the monitor, never fatal
    fn append(&mut self, record: &VitalsRecord) -> Result<(), SinkError>;
}

/// Task periods and the declared worst-case execution budget
///
/// Defaults come from [`crate::constants::sampling`]; every period is
/// overridable for non-default hardware.
#[derive(Debug, Clone, Copy)]
pub struct SchedulerConfig {
    /// Cardiac sampling period (ms)
    pub cardiac_period_ms: u32,
    /// Respiratory sampling period (ms)
    pub respiratory_period_ms: u32,
    /// GSR sampling period (ms)
    pub gsr_period_ms: u32,
    /// Display refresh period (ms)
    pub display_period_ms: u32,
    /// Persistence flush period (ms)
    pub record_period_ms: u32,
    /// Declared worst-case execution time of any single task (ms)
    pub task_budget_ms: u32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            cardiac_period_ms: CARDIAC_PERIOD_MS,
            respiratory_period_ms: RESPIRATORY_PERIOD_MS,
            gsr_period_ms: GSR_PERIOD_MS,
            display_period_ms: DISPLAY_PERIOD_MS,
            record_period_ms: RECORD_PERIOD_MS,
            task_budget_ms: DEFAULT_TASK_BUDGET_MS,
        }
    }
}

impl SchedulerConfig {
    /// Tasks with their periods, in firing priority order
    fn tasks(&self) -> [(TaskId, u32); 5] {
        [
            (TaskId::Cardiac, self.cardiac_period_ms),
            (TaskId::Respiratory, self.respiratory_period_ms),
            (TaskId::Gsr, self.gsr_period_ms),
            (TaskId::Display, self.display_period_ms),
            (TaskId::Record, self.record_period_ms),
        ]
    }

    /// Startup validation: zero periods and budget overruns are
    /// configuration defects
    pub fn validate(&self) -> ConfigResult<()> {
        let mut fastest = u32::MAX;

        for (task, period_ms) in self.tasks() {
            if period_ms == 0 {
                return Err(ConfigError::ZeroPeriod { task });
            }
            if period_ms < fastest {
                fastest = period_ms;
            }
        }

        if self.task_budget_ms > fastest {
            return Err(ConfigError::BudgetExceedsFastestPeriod {
                budget_ms: self.task_budget_ms,
                fastest_period_ms: fastest,
            });
        }

        Ok(())
    }
}

/// Per-task timer state
struct TaskSlot {
    id: TaskId,
    period_ms: u32,

    /// `None` until the first firing; a fresh monitor fires every task on
    /// its first tick
    last_fire: Option<Timestamp>,
}

/// The monitor loop: owns the three extractors and drives them plus the two
/// external consumers at their configured cadences
///
/// Generic over the sample source `S`, display sink `D` and record sink `R`
/// so hardware, tests and demos plug in without trait objects on the hot
/// path.
pub struct VitalsMonitor<S, D, R>
where
    S: SampleSource,
    D: DisplaySink,
    R: RecordSink,
{
    source: S,
    display: D,
    record: R,

    cardiac: CardiacExtractor,
    respiratory: RespiratoryExtractor,
    gsr: GsrExtractor,

    tasks: Vec<TaskSlot, MAX_TASKS>,

    /// Rows lost to record-sink failures since startup
    lost_records: u32,

    /// First sink failure has been reported
    sink_fault_reported: bool,
}

impl<S, D, R> VitalsMonitor<S, D, R>
where
    S: SampleSource,
    D: DisplaySink,
    R: RecordSink,
{
    /// Creates a monitor, validating the configuration
    ///
    /// Returns a [`ConfigError`] for zero periods or a task budget exceeding
    /// the fastest period.
    pub fn new(config: SchedulerConfig, source: S, display: D, record: R) -> ConfigResult<Self> {
        config.validate()?;

        let mut tasks = Vec::new();
        for (id, period_ms) in config.tasks() {
            // Capacity is MAX_TASKS >= 5; push cannot fail
            let _ = tasks.push(TaskSlot {
                id,
                period_ms,
                last_fire: None,
            });
        }

        Ok(Self {
            source,
            display,
            record,
            cardiac: CardiacExtractor::new(),
            respiratory: RespiratoryExtractor::new(),
            gsr: GsrExtractor::new(),
            tasks,
            lost_records: 0,
            sink_fault_reported: false,
        })
    }

    /// Advances the loop to `now`, firing every due task once in priority
    /// order
    ///
    /// Call as frequently as possible. `now` must come from a monotonic
    /// source; time is an explicit parameter so tests drive synthetic clocks.
    pub fn tick(&mut self, now: Timestamp) {
        for i in 0..self.tasks.len() {
            let due = match self.tasks[i].last_fire {
                None => true,
                Some(last) => now.saturating_sub(last) >= self.tasks[i].period_ms as u64,
            };

            if due {
                // T = now, not T += P: jitter over pileup
                self.tasks[i].last_fire = Some(now);
                let id = self.tasks[i].id;
                self.run_task(id, now);
            }
        }
    }

    /// Routes one sampling event to its extractor
    ///
    /// This is the only mutation path into extractor state; `tick` uses it
    /// internally after reading the source, and external callers may push
    /// samples directly when the hardware delivers them by interrupt.
    pub fn on_sample(&mut self, sample: Sample, now: Timestamp) {
        match sample {
            Sample::Cardiac(s) => self.cardiac.process(s.raw, s.lead_p_off, s.lead_n_off, now),
            Sample::Respiratory(raw) => self.respiratory.process(raw, now),
            Sample::Gsr(raw) => self.gsr.process(raw, now),
        }
    }

    /// Combined snapshot of all three channels at `now`
    pub fn snapshot(&self, now: Timestamp) -> VitalsSnapshot {
        VitalsSnapshot {
            timestamp_ms: now,
            cardiac: self.cardiac.metrics(),
            respiratory: self.respiratory.metrics(),
            gsr: self.gsr.metrics(),
        }
    }

    /// Rows lost to record-sink failures since startup
    pub fn lost_records(&self) -> u32 {
        self.lost_records
    }

    /// Read access to the cardiac extractor
    pub fn cardiac(&self) -> &CardiacExtractor {
        &self.cardiac
    }

    /// Read access to the respiratory extractor
    pub fn respiratory(&self) -> &RespiratoryExtractor {
        &self.respiratory
    }

    /// Read access to the GSR extractor
    pub fn gsr(&self) -> &GsrExtractor {
        &self.gsr
    }

    /// Read access to the sample source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Read access to the display sink
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Read access to the record sink
    pub fn record(&self) -> &R {
        &self.record
    }

    fn run_task(&mut self, id: TaskId, now: Timestamp) {
        match id {
            TaskId::Cardiac => {
                let sample = self.source.read_cardiac();
                self.on_sample(Sample::Cardiac(sample), now);
            }
            TaskId::Respiratory => {
                let raw = self.source.read_respiratory();
                self.on_sample(Sample::Respiratory(raw), now);
            }
            TaskId::Gsr => {
                let raw = self.source.read_gsr();
                self.on_sample(Sample::Gsr(raw), now);
            }
            TaskId::Display => {
                let snapshot = self.snapshot(now);
                self.display.render(&snapshot);
            }
            TaskId::Record => {
                let record = VitalsRecord::from(&self.snapshot(now));
                if let Err(_err) = self.record.append(&record) {
                    self.lost_records += 1;
                    if !self.sink_fault_reported {
                        self.sink_fault_reported = true;
                        #[cfg(feature = "log")]
                        log::warn!("record sink failed ({}); dropping rows, counting losses", _err);
                    }
                }
            }
        }
    }
}
