//! Risk Engine Orchestrator
//!
//! ## Overview
//!
//! Ties the stages together, strictly in order per entity:
//!
//! ```text
//! readings → baselines → component scores → aggregate → hysteresis → profile
//! ```
//!
//! Entities are mutually independent — every piece of state (baseline
//! windows, hysteresis history) is scoped per entity — so a caller may
//! shard a batch by entity and evaluate shards in parallel with no
//! locking, as long as each entity's readings stay in timestamp order.
//!
//! ## Re-entrancy
//!
//! [`RiskEngine::evaluate`] takes `&self`; the engine owns configuration
//! only. Carried state is the caller's [`HysteresisState`]: pass the same
//! state object across successive evaluation passes for severity
//! continuity, or a fresh one for a from-scratch run. Baselines are
//! recomputed from the supplied sequence each pass, so component risks
//! and evidence depend only on the readings themselves. There is no
//! randomness anywhere: identical input and state produce identical
//! profiles.
//!
//! ## Input policy
//!
//! A malformed batch (backwards timestamps within an entity, non-finite
//! values) is rejected whole before any profile is produced. An entity
//! with fewer than [`EngineConfig::min_readings`] readings is skipped
//! silently — too little history for meaningful statistics is a data
//! condition, not an error.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use log::debug;

use crate::baseline::{BaselineConfig, BaselineRecord, BaselineTracker};
use crate::constants::MIN_READINGS;
use crate::errors::{EngineError, EngineResult};
use crate::hysteresis::{HysteresisFilter, HysteresisState};
use crate::profile::{evidence_or_normal, rank_by_risk, MetricsSnapshot, RiskProfile};
use crate::reading::{EntityId, Metric, Reading};
use crate::scorers::{
    BatteryScorer, BrakeWearScorer, ComponentScorer, DetectionParams, EngineTempScorer,
    TyreWearScorer,
};
use crate::severity::{aggregate, ComponentRisks, SeverityCutoffs, SeverityWeights};

/// Full configuration for one engine instance
///
/// Every field defaults to the documented constants; override the pieces
/// a deployment needs and leave the rest.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Rolling-baseline parameters (window, EWMA span, trend lag)
    pub baseline: BaselineConfig,
    /// Statistical detection thresholds
    pub detection: DetectionParams,
    /// Engine temperature bounds
    pub engine_temp: EngineTempScorer,
    /// Battery voltage bounds
    pub battery: BatteryScorer,
    /// Brake wear bounds
    pub brakes: BrakeWearScorer,
    /// Tyre wear-out distances
    pub tyres: TyreWearScorer,
    /// Component shares of the overall risk
    pub weights: SeverityWeights,
    /// Severity tier cut-offs and the critical override
    pub cutoffs: SeverityCutoffs,
    /// Severity smoothing across evaluation passes
    pub hysteresis: HysteresisFilter,
    /// Minimum readings before an entity is scored at all
    pub min_readings: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            baseline: BaselineConfig::default(),
            detection: DetectionParams::default(),
            engine_temp: EngineTempScorer::default(),
            battery: BatteryScorer::default(),
            brakes: BrakeWearScorer::default(),
            tyres: TyreWearScorer::default(),
            weights: SeverityWeights::default(),
            cutoffs: SeverityCutoffs::default(),
            hysteresis: HysteresisFilter::default(),
            min_readings: MIN_READINGS,
        }
    }
}

impl EngineConfig {
    /// Default configuration (all constants from [`crate::constants`])
    pub fn new() -> Self {
        Self::default()
    }
}

/// The telematics risk-scoring engine
///
/// Stateless apart from configuration; see the module docs for the
/// state-continuity contract.
#[derive(Debug, Clone, Default)]
pub struct RiskEngine {
    config: EngineConfig,
}

impl RiskEngine {
    /// Create an engine with the given configuration
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Access the active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run one evaluation pass over a batch of readings
    ///
    /// Returns one profile per entity with enough history, sorted by
    /// descending overall risk. `state` carries severity history across
    /// passes and is updated in place.
    pub fn evaluate(
        &self,
        readings: &[Reading],
        state: &mut HysteresisState,
    ) -> EngineResult<Vec<RiskProfile>> {
        let grouped = group_by_entity(readings)?;

        let min = self.config.min_readings.max(1);
        let mut profiles = Vec::new();
        for (entity, series) in &grouped {
            if series.len() < min {
                debug!(
                    "skipping {}: {} readings, need {}",
                    entity,
                    series.len(),
                    min
                );
                continue;
            }
            if let Some(profile) = self.evaluate_entity(*entity, series, state) {
                profiles.push(profile);
            }
        }

        rank_by_risk(&mut profiles);
        Ok(profiles)
    }

    /// Score one entity's ordered, validated series
    fn evaluate_entity(
        &self,
        entity: EntityId,
        series: &[Reading],
        state: &mut HysteresisState,
    ) -> Option<RiskProfile> {
        let (first, _) = series.split_first()?;
        let last = series.last()?;

        let engine_rec = self.latest_baseline(series, Metric::EngineTemp);
        let battery_rec = self.latest_baseline(series, Metric::BatteryVoltage);
        let brake_rec = self.latest_baseline(series, Metric::BrakeWear);

        let detection = &self.config.detection;
        let engine_score = self.config.engine_temp.score(&engine_rec?, detection);
        let battery_score = self.config.battery.score(&battery_rec?, detection);
        let brake_score = self.config.brakes.score(&brake_rec?, detection);

        let total_km = last.odometer_km - first.odometer_km;
        let tyre_score = self.config.tyres.score_distance(total_km);

        let risks = ComponentRisks {
            engine: engine_score.risk,
            battery: battery_score.risk,
            brakes: brake_score.risk,
            tyres: tyre_score.risk,
        };
        let (overall, raw) = aggregate(&risks, &self.config.weights, &self.config.cutoffs);

        let severity = self.config.hysteresis.apply(state, entity, raw);
        if severity != raw {
            debug!("{}: raw severity {} smoothed to {}", entity, raw, severity);
        }

        let mut evidence = engine_score.evidence;
        evidence.extend(battery_score.evidence);
        evidence.extend(brake_score.evidence);
        evidence.extend(tyre_score.evidence);

        Some(RiskProfile {
            entity,
            overall_risk: overall,
            components: risks,
            severity,
            evidence: evidence_or_normal(evidence),
            metrics: MetricsSnapshot {
                engine_temp_c: last.engine_temp_c,
                battery_voltage_v: last.battery_voltage_v,
                brake_wear: last.brake_wear,
                total_km,
            },
        })
    }

    /// Feed a whole series through a fresh tracker, keep the last record
    fn latest_baseline(&self, series: &[Reading], metric: Metric) -> Option<BaselineRecord> {
        let mut tracker = BaselineTracker::new(self.config.baseline.clone());
        let mut latest = None;
        for reading in series {
            latest = Some(tracker.push(reading.timestamp, reading.metric(metric)));
        }
        latest
    }
}

/// Group a batch per entity, enforcing the input contract
///
/// Rejects the whole batch on the first non-finite value or backwards
/// timestamp; relative order within each entity is preserved.
fn group_by_entity(readings: &[Reading]) -> EngineResult<BTreeMap<EntityId, Vec<Reading>>> {
    let mut grouped: BTreeMap<EntityId, Vec<Reading>> = BTreeMap::new();

    for reading in readings {
        for metric in Metric::ALL {
            if !reading.metric(metric).is_finite() {
                return Err(EngineError::InvalidValue {
                    entity: reading.entity,
                    metric,
                });
            }
        }

        let series = grouped.entry(reading.entity).or_default();
        if let Some(prev) = series.last() {
            if reading.timestamp < prev.timestamp {
                return Err(EngineError::NonMonotonicTimestamps {
                    entity: reading.entity,
                    prev: prev.timestamp,
                    next: reading.timestamp,
                });
            }
        }
        series.push(*reading);
    }

    Ok(grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(id: &str, timestamp: u64, engine_temp_c: f32) -> Reading {
        Reading {
            entity: EntityId::new(id).unwrap(),
            timestamp,
            engine_temp_c,
            battery_voltage_v: 13.2,
            brake_wear: 0.3,
            odometer_km: 10_000.0 + timestamp as f32 / 60_000.0,
        }
    }

    #[test]
    fn groups_preserve_order() {
        let batch = [
            reading("VH-2", 0, 82.0),
            reading("VH-1", 0, 82.0),
            reading("VH-2", 1000, 83.0),
        ];
        let grouped = group_by_entity(&batch).unwrap();

        assert_eq!(grouped.len(), 2);
        let vh2 = &grouped[&EntityId::new("VH-2").unwrap()];
        assert_eq!(vh2.len(), 2);
        assert!(vh2[0].timestamp <= vh2[1].timestamp);
    }

    #[test]
    fn backwards_timestamps_reject_batch() {
        let batch = [reading("VH-1", 2000, 82.0), reading("VH-1", 1000, 82.0)];
        let err = group_by_entity(&batch).unwrap_err();
        assert!(matches!(err, EngineError::NonMonotonicTimestamps { .. }));
    }

    #[test]
    fn interleaved_entities_are_not_backwards() {
        // Different entities may interleave arbitrary timestamps
        let batch = [reading("VH-1", 5000, 82.0), reading("VH-2", 1000, 82.0)];
        assert!(group_by_entity(&batch).is_ok());
    }

    #[test]
    fn non_finite_value_rejects_batch() {
        let mut bad = reading("VH-1", 0, 82.0);
        bad.brake_wear = f32::INFINITY;
        let err = group_by_entity(&[bad]).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidValue {
                entity: EntityId::new("VH-1").unwrap(),
                metric: Metric::BrakeWear,
            }
        );
    }

    #[test]
    fn skip_rule_two_vs_three_readings() {
        let engine = RiskEngine::default();
        let mut state = HysteresisState::new();

        let batch = [
            reading("VH-A", 0, 82.0),
            reading("VH-A", 1000, 82.0),
            reading("VH-B", 0, 82.0),
            reading("VH-B", 1000, 82.0),
            reading("VH-B", 2000, 82.0),
        ];
        let profiles = engine.evaluate(&batch, &mut state).unwrap();

        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].entity.as_str(), "VH-B");
        // Skipped entities accumulate no hysteresis history
        assert_eq!(state.entity_count(), 1);
    }

    #[test]
    fn empty_batch_is_empty_output() {
        let engine = RiskEngine::default();
        let mut state = HysteresisState::new();
        assert!(engine.evaluate(&[], &mut state).unwrap().is_empty());
    }
}
