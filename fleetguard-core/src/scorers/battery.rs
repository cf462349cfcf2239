//! Battery voltage scorer
//!
//! The one inverted component: lower voltage is worse, so the threshold
//! ramp runs downward from the safe bound (13 V) to the critical bound
//! (12 V). Deviation and trend are sign-agnostic, same as the other
//! scorers — a voltage jumping *up* abnormally is still abnormal.

use alloc::vec::Vec;

use crate::baseline::BaselineRecord;
use crate::constants::{BATTERY_CRITICAL_V, BATTERY_SAFE_V};

use super::utils;
use super::{ComponentScore, ComponentScorer, DetectionParams, Evidence, ThresholdBounds};

/// Scorer for battery voltage in volts
#[derive(Debug, Clone)]
pub struct BatteryScorer {
    /// Voltage where the threshold score leaves 0 (higher is healthier)
    safe_v: f32,

    /// Voltage treated as critically discharged
    critical_v: f32,
}

impl Default for BatteryScorer {
    fn default() -> Self {
        Self {
            safe_v: BATTERY_SAFE_V,
            critical_v: BATTERY_CRITICAL_V,
        }
    }
}

impl BatteryScorer {
    /// Create scorer with custom bounds
    pub fn new_with_limits(safe_v: f32, critical_v: f32) -> Self {
        // Inverted metric: the safe bound must sit above the critical bound
        let (critical_v, safe_v) = if critical_v > safe_v {
            (safe_v, critical_v)
        } else {
            (critical_v, safe_v)
        };

        Self { safe_v, critical_v }
    }
}

impl ComponentScorer for BatteryScorer {
    fn score(&self, latest: &BaselineRecord, params: &DetectionParams) -> ComponentScore {
        let deviation = utils::deviation_score(latest.zscore, params.z_threshold);
        let trend = utils::trend_score(latest.pct_change, params.pct_threshold);
        let threshold = utils::ramp_down(latest.value, self.safe_v, self.critical_v);

        let mut evidence = Vec::new();
        if latest.value < self.critical_v {
            evidence.push(Evidence::BatteryBelowCritical);
        }
        if utils::abs(latest.zscore) > params.z_threshold {
            evidence.push(Evidence::BatteryVoltageAbnormal);
        }
        if utils::abs(latest.pct_change) > params.pct_threshold {
            evidence.push(Evidence::BatteryVoltageDrop);
        }

        ComponentScore {
            risk: utils::combine(deviation, trend, threshold),
            evidence,
        }
    }

    fn bounds(&self) -> ThresholdBounds {
        ThresholdBounds {
            safe: self.safe_v,
            critical: self.critical_v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(value: f32, zscore: f32, pct_change: f32) -> BaselineRecord {
        BaselineRecord {
            timestamp: 0,
            value,
            rolling_mean: value,
            rolling_std: 1.0,
            ewma: value,
            zscore,
            pct_change,
        }
    }

    #[test]
    fn healthy_voltage_is_zero_risk() {
        let scorer = BatteryScorer::default();
        let score = scorer.score(&record(13.4, 0.0, 0.0), &DetectionParams::default());

        assert_eq!(score.risk, 0.0);
        assert!(score.evidence.is_empty());
    }

    #[test]
    fn ramp_runs_downward() {
        let scorer = BatteryScorer::default();
        let params = DetectionParams::default();

        let mid = scorer.score(&record(12.5, 0.0, 0.0), &params);
        assert!((mid.risk - 0.5).abs() < 1e-6);

        let low = scorer.score(&record(11.5, 0.0, 0.0), &params);
        assert_eq!(low.risk, 1.0);
        assert_eq!(low.evidence, alloc::vec![Evidence::BatteryBelowCritical]);
    }

    #[test]
    fn exactly_critical_has_no_tag() {
        // 12.0 V scores 1.0 on the ramp but has not crossed *below* critical
        let scorer = BatteryScorer::default();
        let score = scorer.score(&record(12.0, 0.0, 0.0), &DetectionParams::default());

        assert_eq!(score.risk, 1.0);
        assert!(score.evidence.is_empty());
    }

    #[test]
    fn abnormal_and_dropping_tags() {
        let scorer = BatteryScorer::default();
        let score = scorer.score(&record(13.2, -2.5, -12.0), &DetectionParams::default());

        assert!(score.evidence.contains(&Evidence::BatteryVoltageAbnormal));
        assert!(score.evidence.contains(&Evidence::BatteryVoltageDrop));
    }
}
