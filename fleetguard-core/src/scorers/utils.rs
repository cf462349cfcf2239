//! Shared scoring arithmetic
//!
//! Pure helpers used by every component scorer: sub-score normalization,
//! the safe→critical ramps, and the statistical/threshold combination.
//! All outputs are clamped to [0, 1]; all functions are total.

use crate::constants::{STAT_DEVIATION_WEIGHT, STAT_TREND_WEIGHT};

#[cfg(feature = "std")]
pub(super) fn abs(x: f32) -> f32 {
    x.abs()
}

#[cfg(not(feature = "std"))]
pub(super) fn abs(x: f32) -> f32 {
    libm::fabsf(x)
}

/// Clamp to the unit interval
pub(super) fn clamp01(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// Normalize |zscore| so the score saturates at twice the alert threshold
pub(super) fn deviation_score(zscore: f32, z_threshold: f32) -> f32 {
    clamp01(abs(zscore) / (2.0 * z_threshold))
}

/// Normalize |pct_change| so the score saturates at twice the alert threshold
pub(super) fn trend_score(pct_change: f32, pct_threshold: f32) -> f32 {
    clamp01(abs(pct_change) / (2.0 * pct_threshold))
}

/// Linear ramp for metrics where higher is worse
///
/// 0 at or below `safe`, 1 at or above `critical`, linear in between.
pub(super) fn ramp_up(value: f32, safe: f32, critical: f32) -> f32 {
    if critical <= safe {
        // Degenerate bounds: treat as a step at the safe value
        return if value > safe { 1.0 } else { 0.0 };
    }
    clamp01((value - safe) / (critical - safe))
}

/// Linear ramp for metrics where lower is worse (battery voltage)
pub(super) fn ramp_down(value: f32, safe: f32, critical: f32) -> f32 {
    if safe <= critical {
        return if value < safe { 1.0 } else { 0.0 };
    }
    clamp01((safe - value) / (safe - critical))
}

/// Combine the statistical blend with the hard-threshold override
pub(super) fn combine(deviation: f32, trend: f32, threshold: f32) -> f32 {
    (STAT_DEVIATION_WEIGHT * deviation + STAT_TREND_WEIGHT * trend).max(threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramps() {
        assert_eq!(ramp_up(80.0, 85.0, 95.0), 0.0);
        assert_eq!(ramp_up(90.0, 85.0, 95.0), 0.5);
        assert_eq!(ramp_up(100.0, 85.0, 95.0), 1.0);

        assert_eq!(ramp_down(13.5, 13.0, 12.0), 0.0);
        assert_eq!(ramp_down(12.5, 13.0, 12.0), 0.5);
        assert_eq!(ramp_down(11.0, 13.0, 12.0), 1.0);
    }

    #[test]
    fn sub_scores_saturate() {
        // Saturates at 2x the threshold
        assert_eq!(deviation_score(4.0, 2.0), 1.0);
        assert_eq!(deviation_score(2.0, 2.0), 0.5);
        assert_eq!(deviation_score(-2.0, 2.0), 0.5);

        assert_eq!(trend_score(20.0, 10.0), 1.0);
        assert_eq!(trend_score(-5.0, 10.0), 0.25);
    }

    #[test]
    fn threshold_overrides_statistics() {
        // Quiet statistics, hot value
        assert_eq!(combine(0.0, 0.0, 0.9), 0.9);
        // Loud statistics, safe value
        assert!((combine(1.0, 1.0, 0.0) - 1.0).abs() < 1e-6);
        assert!((combine(0.5, 0.0, 0.0) - 0.35).abs() < 1e-6);
    }
}
