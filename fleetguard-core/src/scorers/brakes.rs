//! Brake wear scorer
//!
//! Wear fraction in [0, 1]; higher is worse, ramping from 0.5 (plan
//! replacement) to 0.7 (critical). Wear normally creeps — a strong trend
//! or baseline deviation usually means dragging calipers or data trouble,
//! both worth a tag.

use alloc::vec::Vec;

use crate::baseline::BaselineRecord;
use crate::constants::{BRAKE_WEAR_CRITICAL, BRAKE_WEAR_SAFE};

use super::utils;
use super::{ComponentScore, ComponentScorer, DetectionParams, Evidence, ThresholdBounds};

/// Scorer for brake pad wear fraction
#[derive(Debug, Clone)]
pub struct BrakeWearScorer {
    /// Wear fraction where the threshold score leaves 0
    safe: f32,

    /// Wear fraction treated as critical
    critical: f32,
}

impl Default for BrakeWearScorer {
    fn default() -> Self {
        Self {
            safe: BRAKE_WEAR_SAFE,
            critical: BRAKE_WEAR_CRITICAL,
        }
    }
}

impl BrakeWearScorer {
    /// Create scorer with custom bounds
    pub fn new_with_limits(safe: f32, critical: f32) -> Self {
        let (safe, critical) = if safe > critical {
            (critical, safe)
        } else {
            (safe, critical)
        };

        Self { safe, critical }
    }
}

impl ComponentScorer for BrakeWearScorer {
    fn score(&self, latest: &BaselineRecord, params: &DetectionParams) -> ComponentScore {
        let deviation = utils::deviation_score(latest.zscore, params.z_threshold);
        let trend = utils::trend_score(latest.pct_change, params.pct_threshold);
        let threshold = utils::ramp_up(latest.value, self.safe, self.critical);

        let mut evidence = Vec::new();
        if latest.value > self.critical {
            evidence.push(Evidence::BrakeWearCritical);
        }
        if utils::abs(latest.zscore) > params.z_threshold {
            evidence.push(Evidence::BrakeWearAbnormal);
        }
        if utils::abs(latest.pct_change) > params.pct_threshold {
            evidence.push(Evidence::BrakeWearAccelerating);
        }

        ComponentScore {
            risk: utils::combine(deviation, trend, threshold),
            evidence,
        }
    }

    fn bounds(&self) -> ThresholdBounds {
        ThresholdBounds {
            safe: self.safe,
            critical: self.critical,
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
    fn fresh_pads_are_zero_risk() {
        let scorer = BrakeWearScorer::default();
        let score = scorer.score(&record(0.2, 0.0, 0.0), &DetectionParams::default());

        assert_eq!(score.risk, 0.0);
        assert!(score.evidence.is_empty());
    }

    #[test]
    fn ramp_and_critical_tag() {
        let scorer = BrakeWearScorer::default();
        let params = DetectionParams::default();

        let mid = scorer.score(&record(0.6, 0.0, 0.0), &params);
        assert!((mid.risk - 0.5).abs() < 1e-5);

        let worn = scorer.score(&record(0.75, 0.0, 0.0), &params);
        assert_eq!(worn.risk, 1.0);
        assert_eq!(worn.evidence, alloc::vec![Evidence::BrakeWearCritical]);
    }

    #[test]
    fn accelerating_wear_tag() {
        let scorer = BrakeWearScorer::default();
        let score = scorer.score(&record(0.3, 0.0, 14.0), &DetectionParams::default());

        assert_eq!(score.evidence, alloc::vec![Evidence::BrakeWearAccelerating]);
    }
}
