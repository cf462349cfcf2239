//! Component Risk Scorers
//!
//! ## Overview
//!
//! One scorer per tracked component, each owning its hard safe/critical
//! bounds the way a deployment would configure them. Scorers operate on
//! the *latest* [`BaselineRecord`](crate::baseline::BaselineRecord) for
//! their metric and combine three independent signals:
//!
//! 1. **Deviation** — how far the current value sits from its rolling
//!    baseline, in floored standard deviations. Catches "abnormal for
//!    this vehicle" even when the absolute value looks fine.
//! 2. **Trend** — short-horizon percent change. Catches rapid movement
//!    before it reaches an absolute limit.
//! 3. **Hard threshold** — a linear ramp between the component's safe and
//!    critical bounds. Catches "abnormal for any vehicle" regardless of
//!    what this vehicle's history looks like.
//!
//! The combination is `max(0.7 * deviation + 0.3 * trend, threshold)`:
//! the hard-limit signal can always override the statistical blend, but
//! never drags a statistically quiet component upward on its own while the
//! value is on the safe side of its ramp.
//!
//! All risks are clamped to [0, 1]. Whenever a signal crosses its
//! configured threshold the scorer also emits an [`Evidence`] tag, so an
//! elevated score is always traceable to the signal that raised it.
//!
//! Cumulative distance has no baseline path — wear-out is monotonic by
//! nature — and gets the threshold-only [`TyreWearScorer`].

mod battery;
mod brakes;
mod engine;
mod tyres;
mod utils;

pub use battery::BatteryScorer;
pub use brakes::BrakeWearScorer;
pub use engine::EngineTempScorer;
pub use tyres::TyreWearScorer;

use alloc::vec::Vec;
use core::fmt;

use crate::baseline::BaselineRecord;
use crate::constants::{PCT_CHANGE_THRESHOLD, Z_SCORE_THRESHOLD};

/// Statistical detection thresholds shared by all baseline-backed scorers
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionParams {
    /// Z-score above which the deviation tag fires; the deviation
    /// sub-score saturates at twice this
    pub z_threshold: f32,

    /// Percent change above which the trend tag fires; the trend
    /// sub-score saturates at twice this
    pub pct_threshold: f32,
}

impl Default for DetectionParams {
    fn default() -> Self {
        Self {
            z_threshold: Z_SCORE_THRESHOLD,
            pct_threshold: PCT_CHANGE_THRESHOLD,
        }
    }
}

/// Symbolic tag explaining why a component risk is elevated
///
/// Tags are stable identifiers meant for downstream audit trails; the
/// string forms are part of the output contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evidence {
    /// Engine coolant temperature crossed the critical bound
    EngineAboveCritical,
    /// Engine temperature deviates abnormally from its rolling baseline
    EngineHighTempSpike,
    /// Engine temperature rising rapidly over the trend horizon
    EngineTempRapidIncrease,
    /// Battery voltage crossed below the critical bound
    BatteryBelowCritical,
    /// Battery voltage deviates abnormally from its rolling baseline
    BatteryVoltageAbnormal,
    /// Battery voltage moving rapidly over the trend horizon
    BatteryVoltageDrop,
    /// Brake wear crossed the critical bound
    BrakeWearCritical,
    /// Brake wear deviates abnormally from its rolling baseline
    BrakeWearAbnormal,
    /// Brake wear accelerating over the trend horizon
    BrakeWearAccelerating,
    /// Cumulative distance passed the tyre-replacement notice point
    HighMileageTyreReplacementDue,
    /// Explicit empty-state sentinel: no tag fired
    AllSystemsNormal,
}

impl Evidence {
    /// Stable string form of the tag
    pub const fn as_str(&self) -> &'static str {
        match self {
            Evidence::EngineAboveCritical => "engine_above_critical",
            Evidence::EngineHighTempSpike => "engine_high_temp_spike",
            Evidence::EngineTempRapidIncrease => "engine_temp_rapid_increase",
            Evidence::BatteryBelowCritical => "battery_below_critical",
            Evidence::BatteryVoltageAbnormal => "battery_voltage_abnormal",
            Evidence::BatteryVoltageDrop => "battery_voltage_drop",
            Evidence::BrakeWearCritical => "brake_wear_critical",
            Evidence::BrakeWearAbnormal => "brake_wear_abnormal",
            Evidence::BrakeWearAccelerating => "brake_wear_accelerating",
            Evidence::HighMileageTyreReplacementDue => "high_mileage_tyre_replacement_due",
            Evidence::AllSystemsNormal => "All systems normal",
        }
    }
}

impl fmt::Display for Evidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Evidence {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One component's scored output: bounded risk plus supporting evidence
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentScore {
    /// Combined risk in [0, 1]
    pub risk: f32,
    /// Tags for every signal that crossed its threshold (may be empty)
    pub evidence: Vec<Evidence>,
}

/// Hard bounds a scorer ramps between
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdBounds {
    /// Value at which the threshold score leaves 0
    pub safe: f32,
    /// Value at which the threshold score saturates at 1
    pub critical: f32,
}

/// Core scorer trait — implement for each baseline-backed component
pub trait ComponentScorer {
    /// Score the latest baseline record for this component
    fn score(&self, latest: &BaselineRecord, params: &DetectionParams) -> ComponentScore;

    /// The hard bounds this scorer ramps between
    fn bounds(&self) -> ThresholdBounds;
}
