//! Tyre wear-out scorer (cumulative distance)
//!
//! Unlike the other components this has no statistical path: distance is
//! monotonic, so "abnormal deviation from baseline" is meaningless. Risk
//! is a pure clamp of distance accumulated since the entity was first
//! observed against a wear-out ceiling, with a replacement-due tag firing
//! before the ceiling is reached.

use alloc::vec::Vec;

use crate::constants::{TYRE_NOTICE_KM, TYRE_WEAR_OUT_KM};

use super::{ComponentScore, Evidence};

/// Scorer for cumulative-distance tyre wear
#[derive(Debug, Clone)]
pub struct TyreWearScorer {
    /// Distance at which wear-out risk saturates (km)
    wear_out_km: f32,

    /// Distance above which the replacement-due tag fires (km)
    notice_km: f32,
}

impl Default for TyreWearScorer {
    fn default() -> Self {
        Self {
            wear_out_km: TYRE_WEAR_OUT_KM,
            notice_km: TYRE_NOTICE_KM,
        }
    }
}

impl TyreWearScorer {
    /// Create scorer with custom distances
    pub fn new_with_limits(wear_out_km: f32, notice_km: f32) -> Self {
        Self {
            wear_out_km,
            notice_km,
        }
    }

    /// Score distance accumulated since the entity's first reading
    pub fn score_distance(&self, total_km: f32) -> ComponentScore {
        let risk = if self.wear_out_km > 0.0 {
            (total_km / self.wear_out_km).clamp(0.0, 1.0)
        } else {
            0.0
        };

        let mut evidence = Vec::new();
        if total_km > self.notice_km {
            evidence.push(Evidence::HighMileageTyreReplacementDue);
        }

        ComponentScore { risk, evidence }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_mileage() {
        let scorer = TyreWearScorer::default();
        let score = scorer.score_distance(20_000.0);

        assert!((score.risk - 0.4).abs() < 1e-6);
        assert!(score.evidence.is_empty());
    }

    #[test]
    fn past_wear_out_clamps_and_tags() {
        let scorer = TyreWearScorer::default();
        let score = scorer.score_distance(52_000.0);

        assert_eq!(score.risk, 1.0);
        assert_eq!(
            score.evidence,
            alloc::vec![Evidence::HighMileageTyreReplacementDue]
        );
    }

    #[test]
    fn notice_fires_before_saturation() {
        let scorer = TyreWearScorer::default();
        let score = scorer.score_distance(45_000.0);

        assert!(score.risk < 1.0);
        assert!(score
            .evidence
            .contains(&Evidence::HighMileageTyreReplacementDue));
    }

    #[test]
    fn zero_distance() {
        let scorer = TyreWearScorer::default();
        let score = scorer.score_distance(0.0);
        assert_eq!(score.risk, 0.0);
        assert!(score.evidence.is_empty());
    }
}
