//! Constants for FleetGuard Core
//!
//! Centralized, documented constants used throughout the risk-scoring
//! engine. All numeric values are defined here with their purpose and
//! rationale; components default to these values but accept overrides
//! through their config structs.
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. When adding new constants, include documentation and a source
//! 3. Use descriptive names that include units

use crate::time::{hours_to_ms, Timestamp};

// ===== HARD COMPONENT BOUNDS (industry operating limits) =====

/// Engine coolant temperature above which risk begins to accumulate (°C).
///
/// Typical passenger/light-commercial coolant systems run 80-90°C under
/// normal load; sustained readings above this mark warrant attention.
pub const ENGINE_SAFE_C: f32 = 85.0;

/// Engine coolant temperature treated as critical overheating (°C).
///
/// Above this bound head-gasket and warping damage becomes likely; the
/// threshold score saturates at 1.0 here.
pub const ENGINE_CRITICAL_C: f32 = 95.0;

/// Battery voltage below which risk begins to accumulate (V).
///
/// A healthy 12 V lead-acid system at rest reads 12.6-13.2 V. Lower
/// voltage is worse, so the battery ramp is inverted.
pub const BATTERY_SAFE_V: f32 = 13.0;

/// Battery voltage treated as critically discharged or failing (V).
pub const BATTERY_CRITICAL_V: f32 = 12.0;

/// Brake pad wear fraction where replacement planning should start.
pub const BRAKE_WEAR_SAFE: f32 = 0.5;

/// Brake pad wear fraction treated as critical.
pub const BRAKE_WEAR_CRITICAL: f32 = 0.7;

/// Cumulative distance at which tyre wear-out risk saturates (km).
pub const TYRE_WEAR_OUT_KM: f32 = 50_000.0;

/// Cumulative distance above which a replacement-due tag fires (km).
pub const TYRE_NOTICE_KM: f32 = 40_000.0;

// ===== DETECTION PARAMETERS =====

/// Trailing window for rolling mean/std baselines.
///
/// Six hours of history is long enough to absorb duty-cycle variation
/// (city vs highway) while still tracking genuine drift.
pub const ROLLING_WINDOW_MS: Timestamp = hours_to_ms(6);

/// Span for exponentially-weighted smoothing (samples).
///
/// `alpha = 2 / (span + 1)`, so span 7 gives alpha 0.25.
pub const EWMA_SPAN: u32 = 7;

/// Number of samples the short-horizon trend looks back.
pub const TREND_LAG: usize = 3;

/// Z-score above which a deviation evidence tag fires.
///
/// Two standard deviations from the rolling baseline; the deviation
/// sub-score saturates at twice this value.
pub const Z_SCORE_THRESHOLD: f32 = 2.0;

/// Percent change (over [`TREND_LAG`] samples) above which a trend
/// evidence tag fires. The trend sub-score saturates at twice this value.
pub const PCT_CHANGE_THRESHOLD: f32 = 10.0;

// ===== SCORE COMBINATION =====

/// Weight of the statistical-deviation sub-score in the combined risk.
pub const STAT_DEVIATION_WEIGHT: f32 = 0.7;

/// Weight of the short-term-trend sub-score in the combined risk.
pub const STAT_TREND_WEIGHT: f32 = 0.3;

// ===== SEVERITY AGGREGATION =====

/// Battery share of the weighted overall risk.
pub const WEIGHT_BATTERY: f32 = 0.35;

/// Engine share of the weighted overall risk.
pub const WEIGHT_ENGINE: f32 = 0.35;

/// Brake share of the weighted overall risk.
pub const WEIGHT_BRAKES: f32 = 0.20;

/// Tyre (distance wear-out) share of the weighted overall risk.
pub const WEIGHT_TYRES: f32 = 0.10;

/// Any single stat-tracked component above this risk forces Critical.
pub const COMPONENT_CRITICAL_OVERRIDE: f32 = 0.85;

/// Overall risk at or above this is Critical.
pub const OVERALL_CRITICAL: f32 = 0.70;

/// Overall risk at or above this (and below critical) is Moderate.
pub const OVERALL_MODERATE: f32 = 0.30;

// ===== TEMPORAL SMOOTHING =====

/// Consecutive evaluation windows required before severity smoothing
/// applies (hysteresis buffer capacity).
pub const HYSTERESIS_WINDOW: usize = 2;

// ===== INPUT POLICY =====

/// Minimum readings an entity needs before it is scored at all.
///
/// Below this, rolling statistics are meaningless and the entity is
/// silently skipped rather than scored on noise.
pub const MIN_READINGS: usize = 3;
