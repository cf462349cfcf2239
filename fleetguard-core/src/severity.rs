//! Severity Aggregator
//!
//! Folds the four component risks into one overall risk value and a raw
//! severity tier. The weighting reflects roadside-failure impact: battery
//! and engine dominate (strandings), brakes follow (safety), tyre wear-out
//! contributes least (schedulable maintenance).
//!
//! A critical override sits above the weighted average: any single
//! stat-tracked component past the override threshold forces `Critical`
//! outright and floors the reported overall risk, so a lone failing
//! component can never be averaged away by three healthy ones.
//!
//! The tier produced here is the *raw* severity; temporal smoothing is the
//! hysteresis filter's job.

use core::fmt;

use crate::constants::{
    COMPONENT_CRITICAL_OVERRIDE, OVERALL_CRITICAL, OVERALL_MODERATE, WEIGHT_BATTERY,
    WEIGHT_BRAKES, WEIGHT_ENGINE, WEIGHT_TYRES,
};

/// Reportable health verdict, ordered from best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Severity {
    /// Within normal operating envelope
    Routine,
    /// Elevated risk, inspection advised
    Moderate,
    /// Sustained or hard-limit risk, immediate attention
    Critical,
}

impl Severity {
    /// Get human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            Severity::Routine => "Routine",
            Severity::Moderate => "Moderate",
            Severity::Critical => "Critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-component risk values in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ComponentRisks {
    /// Engine temperature component
    pub engine: f32,
    /// Battery voltage component
    pub battery: f32,
    /// Brake wear component
    pub brakes: f32,
    /// Tyre (distance wear-out) component
    pub tyres: f32,
}

/// Component shares of the weighted overall risk
#[derive(Debug, Clone, PartialEq)]
pub struct SeverityWeights {
    /// Battery share
    pub battery: f32,
    /// Engine share
    pub engine: f32,
    /// Brake share
    pub brakes: f32,
    /// Tyre share
    pub tyres: f32,
}

impl Default for SeverityWeights {
    fn default() -> Self {
        Self {
            battery: WEIGHT_BATTERY,
            engine: WEIGHT_ENGINE,
            brakes: WEIGHT_BRAKES,
            tyres: WEIGHT_TYRES,
        }
    }
}

/// Tier cut-offs and the single-component override threshold
#[derive(Debug, Clone, PartialEq)]
pub struct SeverityCutoffs {
    /// Overall risk at or above this is Critical
    pub critical: f32,
    /// Overall risk at or above this (below critical) is Moderate
    pub moderate: f32,
    /// Any stat-tracked component above this forces Critical and floors
    /// the reported overall risk
    pub component_override: f32,
}

impl Default for SeverityCutoffs {
    fn default() -> Self {
        Self {
            critical: OVERALL_CRITICAL,
            moderate: OVERALL_MODERATE,
            component_override: COMPONENT_CRITICAL_OVERRIDE,
        }
    }
}

/// Combine component risks into overall risk and a raw severity tier
///
/// The returned overall risk is clamped to [0, 1] and never lowered by the
/// override rule, only raised.
pub fn aggregate(
    risks: &ComponentRisks,
    weights: &SeverityWeights,
    cutoffs: &SeverityCutoffs,
) -> (f32, Severity) {
    let weighted = risks.battery * weights.battery
        + risks.engine * weights.engine
        + risks.brakes * weights.brakes
        + risks.tyres * weights.tyres;
    let mut overall = weighted.clamp(0.0, 1.0);

    // Tyre wear-out is schedulable and deliberately excluded from the
    // instant-critical rule.
    let any_component_critical = risks.battery > cutoffs.component_override
        || risks.engine > cutoffs.component_override
        || risks.brakes > cutoffs.component_override;

    let severity = if any_component_critical {
        overall = overall.max(cutoffs.component_override);
        Severity::Critical
    } else if overall >= cutoffs.critical {
        Severity::Critical
    } else if overall >= cutoffs.moderate {
        Severity::Moderate
    } else {
        Severity::Routine
    };

    (overall, severity)
}
