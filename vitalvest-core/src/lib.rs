//! Core signal engine for VitalVest
//!
//! Converts three raw physiological sample streams (cardiac, respiratory,
//! galvanic skin response) into real-time metrics on a single
//! resource-constrained controller.
//!
//! Key constraints:
//! - Fixed memory: every buffer is sized at compile time, no heap in the
//!   hot path
//! - Single-threaded cooperative scheduling, one monotonic clock
//! - Extractors are pure state machines: time arrives as a parameter, so
//!   tests run on synthetic clocks
//!
//! ```no_run
//! use vitalvest_core::{
//!     SchedulerConfig, VitalsMonitor,
//!     scheduler::{CardiacSample, DisplaySink, RecordSink, SampleSource},
//!     metrics::{VitalsRecord, VitalsSnapshot},
//!     errors::SinkError,
//!     time::{SystemTime, TimeSource},
//! };
//!
//! struct Adc; // hardware front-end
//! # impl SampleSource for Adc {
//! #     fn read_cardiac(&mut self) -> CardiacSample {
//! #         CardiacSample { raw: 0, lead_p_off: false, lead_n_off: false }
//! #     }
//! #     fn read_respiratory(&mut self) -> u16 { 0 }
//! #     fn read_gsr(&mut self) -> u16 { 0 }
//! # }
//! struct Lcd;
//! # impl DisplaySink for Lcd {
//! #     fn render(&mut self, _snapshot: &VitalsSnapshot) {}
//! # }
//! struct SdCard;
//! # impl RecordSink for SdCard {
//! #     fn append(&mut self, _record: &VitalsRecord) -> Result<(), SinkError> { Ok(()) }
//! # }
//!
//! let mut monitor = VitalsMonitor::new(
//!     SchedulerConfig::default(),
//!     Adc, Lcd, SdCard,
//! ).expect("valid configuration");
//!
//! let clock = SystemTime;
//! loop {
//!     monitor.tick(clock.now());
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod buffer;
pub mod constants;
pub mod errors;
pub mod extractors;
pub mod intervals;
pub mod metrics;
pub mod scheduler;
pub mod threshold;
pub mod time;

// Public API
pub use errors::{ConfigError, ConfigResult, SinkError};
pub use extractors::{CardiacExtractor, GsrExtractor, RespiratoryExtractor};
pub use metrics::{
    BreathPhase, CardiacMetrics, GsrMetrics, RespiratoryMetrics, SweatLevel, VitalsRecord,
    VitalsSnapshot,
};
pub use scheduler::{
    CardiacSample, DisplaySink, RecordSink, Sample, SampleSource, SchedulerConfig, TaskId,
    VitalsMonitor,
};
pub use time::{FixedTime, TimeSource, Timestamp};

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
