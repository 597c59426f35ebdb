//! Error Types for the Monitor Core
//!
//! ## Design Philosophy
//!
//! The error system follows the same embedded constraints as the rest of the
//! crate:
//!
//! 1. **Small Size**: every variant is a few bytes; errors may cross the
//!    scheduler hot path and must be cheap to return.
//!
//! 2. **No Heap Allocation**: only inline data and `&'static str` messages,
//!    so memory usage is deterministic.
//!
//! 3. **Copy Semantics**: errors implement `Copy` for friction-free returns.
//!
//! ## What Is NOT an Error
//!
//! Most abnormal conditions in this system are defined states, not faults:
//!
//! - *Lead-off* degrades the heart-rate output to the unknown sentinel and is
//!   reported through the metric flag, never through `Result`.
//! - *Out-of-range intervals* (implausible RR or breath timings) are a normal
//!   filtering outcome and are silently rejected.
//! - *Calibration-not-yet-complete* on the GSR channel withholds the sweat
//!   level via `Option`; it is an intermediate state.
//!
//! What remains is genuinely exceptional: invalid scheduler configuration
//! caught at startup, and record-sink append failures, which the monitor
//! counts and survives.

use thiserror_no_std::Error;

use crate::scheduler::TaskId;

/// Result type for startup configuration validation
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration faults detected at startup
///
/// These are programming or deployment mistakes. They are reported once from
/// the monitor constructor and never recovered at runtime.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A task was registered with a zero period
    #[error("task {task:?} has zero period")]
    ZeroPeriod {
        /// The offending task
        task: TaskId,
    },

    /// Declared worst-case task execution exceeds the fastest period
    ///
    /// A task that can outlast the fastest sampling period would starve the
    /// cardiac channel; this is a configuration defect, not a runtime
    /// condition.
    #[error("task budget {budget_ms}ms exceeds fastest period {fastest_period_ms}ms")]
    BudgetExceedsFastestPeriod {
        /// Declared worst-case execution time per task (ms)
        budget_ms: u32,
        /// Shortest registered period (ms)
        fastest_period_ms: u32,
    },
}

/// Record sink append failure
///
/// Returned by [`RecordSink::append`](crate::scheduler::RecordSink). The
/// monitor reports the first failure, counts the lost row, and keeps
/// processing — persistence trouble must never halt signal processing.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("record sink failed: {reason}")]
pub struct SinkError {
    /// Static description of the failure (e.g. "sd card not present")
    pub reason: &'static str,
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::ZeroPeriod { task } =>
                defmt::write!(fmt, "zero period for task {}", *task as u8),
            Self::BudgetExceedsFastestPeriod { budget_ms, fastest_period_ms } =>
                defmt::write!(fmt, "budget {}ms > fastest period {}ms", budget_ms, fastest_period_ms),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SinkError {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "record sink failed: {}", self.reason);
    }
}
