//! Engine coolant temperature scorer
//!
//! Higher is worse: risk ramps from the safe bound (85°C) to the critical
//! bound (95°C). Deviation and trend signals catch a vehicle running hot
//! *for itself* before it crosses any absolute limit.

use alloc::vec::Vec;

use crate::baseline::BaselineRecord;
use crate::constants::{ENGINE_CRITICAL_C, ENGINE_SAFE_C};

use super::utils;
use super::{ComponentScore, ComponentScorer, DetectionParams, Evidence, ThresholdBounds};

/// Scorer for engine coolant temperature in °C
#[derive(Debug, Clone)]
pub struct EngineTempScorer {
    /// Temperature where the threshold score leaves 0
    safe_c: f32,

    /// Temperature treated as critical overheating
    critical_c: f32,
}

impl Default for EngineTempScorer {
    fn default() -> Self {
        Self {
            safe_c: ENGINE_SAFE_C,
            critical_c: ENGINE_CRITICAL_C,
        }
    }
}

impl EngineTempScorer {
    /// Create scorer with custom bounds
    pub fn new_with_limits(safe_c: f32, critical_c: f32) -> Self {
        // Sanity check: the critical bound must sit above the safe bound
        let (safe_c, critical_c) = if safe_c > critical_c {
            (critical_c, safe_c)
        } else {
            (safe_c, critical_c)
        };

        Self { safe_c, critical_c }
    }
}

impl ComponentScorer for EngineTempScorer {
    fn score(&self, latest: &BaselineRecord, params: &DetectionParams) -> ComponentScore {
        let deviation = utils::deviation_score(latest.zscore, params.z_threshold);
        let trend = utils::trend_score(latest.pct_change, params.pct_threshold);
        let threshold = utils::ramp_up(latest.value, self.safe_c, self.critical_c);

        let mut evidence = Vec::new();
        if latest.value > self.critical_c {
            evidence.push(Evidence::EngineAboveCritical);
        }
        if utils::abs(latest.zscore) > params.z_threshold {
            evidence.push(Evidence::EngineHighTempSpike);
        }
        if utils::abs(latest.pct_change) > params.pct_threshold {
            evidence.push(Evidence::EngineTempRapidIncrease);
        }

        ComponentScore {
            risk: utils::combine(deviation, trend, threshold),
            evidence,
        }
    }

    fn bounds(&self) -> ThresholdBounds {
        ThresholdBounds {
            safe: self.safe_c,
            critical: self.critical_c,
        }
    }
}
