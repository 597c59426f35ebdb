//! Per-Signal Feature Extractors
//!
//! ## Overview
//!
//! One extractor per physiological channel, each converting a raw sample
//! stream into a meaningful metric:
//!
//! - [`CardiacExtractor`]: adaptive-threshold peak detection over the ECG
//!   stream, RR-interval validation and averaging → heart rate (bpm) plus a
//!   lead-off flag.
//! - [`RespiratoryExtractor`]: baseline/deviation bands and a three-state
//!   breath machine → breath rate (breaths/min) plus the current phase.
//! - [`GsrExtractor`]: moving-average smoothing, one-shot calibration and
//!   delta classification → ordinal sweat level.
//!
//! ## Contract
//!
//! Every extractor is an owned state object with a single per-sample entry
//! point, `process(...)`, and a snapshot accessor, `metrics()`. Time arrives
//! as an explicit parameter — extractors never read a clock — so the same
//! sample sequence always produces the same output sequence. The scheduler
//! is the only caller of `process`.
//!
//! Window sizes and averaging windows are const generics defaulting to the
//! values in [`crate::constants`]; tests shrink them to exercise window-fill
//! behavior without thousands of samples.

mod cardiac;
mod respiratory;
mod gsr;

pub use cardiac::CardiacExtractor;
pub use respiratory::RespiratoryExtractor;
pub use gsr::GsrExtractor;
