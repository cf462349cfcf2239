//! Risk Profile Assembler
//!
//! Packages one evaluation pass's verdict per entity and orders the batch
//! for downstream consumers (reporting, prioritization — out of scope
//! here). Profiles are derived values: created fresh on every pass,
//! superseded by the next, never mutated.
//!
//! The evidence list is never empty — [`Evidence::AllSystemsNormal`] is
//! the explicit sentinel for "no signal fired", so a consumer can always
//! print *why* a verdict was reached.

use alloc::vec::Vec;

use crate::reading::EntityId;
use crate::scorers::Evidence;
use crate::severity::{ComponentRisks, Severity};

/// Latest raw values for display alongside a verdict
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MetricsSnapshot {
    /// Latest engine coolant temperature (°C)
    pub engine_temp_c: f32,
    /// Latest battery voltage (V)
    pub battery_voltage_v: f32,
    /// Latest brake wear fraction
    pub brake_wear: f32,
    /// Distance accumulated since the entity's first observed reading (km)
    pub total_km: f32,
}

/// One entity's health verdict for one evaluation pass
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RiskProfile {
    /// Vehicle this profile describes
    pub entity: EntityId,
    /// Weighted overall risk in [0, 1]
    pub overall_risk: f32,
    /// Per-component risks in [0, 1]
    pub components: ComponentRisks,
    /// Final, hysteresis-filtered severity
    pub severity: Severity,
    /// Why — never empty; the sentinel iff no tag fired
    pub evidence: Vec<Evidence>,
    /// Latest raw metric values
    pub metrics: MetricsSnapshot,
}

impl RiskProfile {
    /// True iff no evidence tag fired for this pass
    pub fn is_nominal(&self) -> bool {
        self.evidence.as_slice() == [Evidence::AllSystemsNormal]
    }
}

/// Substitute the explicit empty-state sentinel for a fired-nothing pass
pub(crate) fn evidence_or_normal(evidence: Vec<Evidence>) -> Vec<Evidence> {
    if evidence.is_empty() {
        alloc::vec![Evidence::AllSystemsNormal]
    } else {
        evidence
    }
}

/// Order profiles by descending overall risk
///
/// Ties break on entity id so the ordering is total and deterministic.
pub fn rank_by_risk(profiles: &mut [RiskProfile]) {
    profiles.sort_by(|a, b| {
        b.overall_risk
            .total_cmp(&a.overall_risk)
            .then_with(|| a.entity.cmp(&b.entity))
    });
}
