//! Metric Snapshot Types
//!
//! ## Overview
//!
//! The extractors expose their outputs as small `Copy` snapshot types, pulled
//! once per display/record tick. Extractors return typed and ordinal values
//! only — every string label lives in the (out-of-scope) display collaborator,
//! never here.
//!
//! ## Unknown vs Zero
//!
//! An unknown metric must never masquerade as a plausible physiological zero:
//!
//! - heart rate uses the documented `0 = unknown` sentinel *and* carries the
//!   `lead_off` flag, so "unknown because the electrode lifted" is
//!   distinguishable from "no validated interval yet"
//! - the GSR sweat level is `Option<SweatLevel>` and stays `None` until
//!   calibration completes

use crate::time::Timestamp;

/// Respiratory phase as classified against the current threshold pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BreathPhase {
    /// Sample above the inhale threshold
    Inhale,
    /// Sample below the exhale threshold
    Exhale,
    /// Sample inside the band (or thresholds not yet computed)
    Hold,
}

/// Ordinal sweat level from the GSR delta classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SweatLevel {
    /// Delta below the Low boundary
    Dry = 0,
    /// Delta in the Low band
    Low = 1,
    /// Delta in the Med band
    Med = 2,
    /// Delta at or above the High boundary
    High = 3,
}

impl SweatLevel {
    /// Ordinal value 0..=3 for the record contract
    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

/// Cardiac channel snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardiacMetrics {
    /// Heart rate in beats/min; 0 means unknown (lead off or no validated
    /// interval yet)
    pub heart_rate_bpm: u16,

    /// True while either electrode reports loss of skin contact
    pub lead_off: bool,

    /// Most recent raw ADC sample
    pub raw_sample: u16,
}

/// Respiratory channel snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RespiratoryMetrics {
    /// Breath rate in breaths/min; 0 means no validated interval yet
    pub breath_rate_bpm: u16,

    /// Current phase against the latest threshold pair
    pub phase: BreathPhase,

    /// Most recent raw ADC sample
    pub raw_sample: u16,
}

/// GSR channel snapshot
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GsrMetrics {
    /// Classified sweat level; `None` until calibration completes
    pub sweat_level: Option<SweatLevel>,

    /// Full-window moving average of the raw signal
    pub smoothed: f32,

    /// Most recent raw ADC sample
    pub raw_sample: u16,

    /// True once the calibration sample count has been reached
    pub calibrated: bool,
}

/// Combined snapshot handed to the display and record sinks
///
/// Built by the monitor after all extractor updates in the same tick, so
/// consumers always observe that tick's freshest values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VitalsSnapshot {
    /// Monotonic timestamp of the tick that produced this snapshot (ms)
    pub timestamp_ms: Timestamp,

    /// Cardiac channel
    pub cardiac: CardiacMetrics,

    /// Respiratory channel
    pub respiratory: RespiratoryMetrics,

    /// GSR channel
    pub gsr: GsrMetrics,
}

/// One persisted row for the external log collaborator
///
/// Field order matters: downstream tooling reads these rows positionally.
/// Keep in sync with the documented contract:
/// `timestamp_ms, heart_rate_bpm, breath_rate_bpm, sweat_level, ecg_raw,
/// resp_raw, gsr_raw`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VitalsRecord {
    /// Tick timestamp (ms)
    pub timestamp_ms: Timestamp,
    /// Heart rate (bpm, 0 = unknown)
    pub heart_rate_bpm: u16,
    /// Breath rate (breaths/min, 0 = none yet)
    pub breath_rate_bpm: u16,
    /// Sweat level ordinal 0..=3; 0 before calibration (the snapshot's
    /// `calibrated` flag is the validity signal)
    pub sweat_level: u8,
    /// Latest raw cardiac sample
    pub ecg_raw: u16,
    /// Latest raw respiratory sample
    pub resp_raw: u16,
    /// Latest raw GSR sample
    pub gsr_raw: u16,
}

impl From<&VitalsSnapshot> for VitalsRecord {
    fn from(snapshot: &VitalsSnapshot) -> Self {
        Self {
            timestamp_ms: snapshot.timestamp_ms,
            heart_rate_bpm: snapshot.cardiac.heart_rate_bpm,
            breath_rate_bpm: snapshot.respiratory.breath_rate_bpm,
            sweat_level: snapshot
                .gsr
                .sweat_level
                .map(SweatLevel::ordinal)
                .unwrap_or(0),
            ecg_raw: snapshot.cardiac.raw_sample,
            resp_raw: snapshot.respiratory.raw_sample,
            gsr_raw: snapshot.gsr.raw_sample,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for VitalsRecord {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "{},{},{},{},{},{},{}",
            self.timestamp_ms,
            self.heart_rate_bpm,
            self.breath_rate_bpm,
            self.sweat_level,
            self.ecg_raw,
            self.resp_raw,
            self.gsr_raw,
        );
    }
}
