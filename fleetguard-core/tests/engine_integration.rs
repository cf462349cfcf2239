//! End-to-end pipeline tests
//!
//! Exercises the full readings → baselines → scorers → aggregation →
//! hysteresis path through the public API only.

use fleetguard_core::{
    EntityId, Evidence, HysteresisState, Reading, RiskEngine, Severity,
};

const HOUR_MS: u64 = 3_600_000;

fn reading(id: &str, hour: u64, temp: f32, volts: f32, wear: f32, odo: f32) -> Reading {
    Reading {
        entity: EntityId::new(id).unwrap(),
        timestamp: hour * HOUR_MS,
        engine_temp_c: temp,
        battery_voltage_v: volts,
        brake_wear: wear,
        odometer_km: odo,
    }
}

/// Four hourly readings of a vehicle running steady and healthy
fn healthy_series(id: &str, start_hour: u64) -> Vec<Reading> {
    (0..4)
        .map(|h| {
            let hour = start_hour + h;
            reading(id, hour, 82.0, 13.2, 0.25, 18_000.0 + h as f32 * 60.0)
        })
        .collect()
}

#[test]
fn healthy_fleet_is_routine_and_nominal() {
    let mut batch = healthy_series("VH-0001", 0);
    batch.extend(healthy_series("VH-0002", 0));
    batch.extend(healthy_series("VH-0003", 0));

    let engine = RiskEngine::default();
    let mut state = HysteresisState::new();
    let profiles = engine.evaluate(&batch, &mut state).unwrap();

    assert_eq!(profiles.len(), 3);
    for profile in &profiles {
        assert_eq!(profile.severity, Severity::Routine);
        assert!(profile.overall_risk < 0.05);
        assert!(profile.is_nominal());
        assert_eq!(profile.evidence, [Evidence::AllSystemsNormal]);
    }
}

#[test]
fn overheating_vehicle_is_critical_and_ranked_first() {
    // Last sample sits past the 95 °C critical bound
    let mut batch = healthy_series("VH-0001", 0);
    for (h, temp) in [88.0, 91.0, 94.0, 97.0].into_iter().enumerate() {
        batch.push(reading("VH-HOT", h as u64, temp, 13.2, 0.25, 18_000.0));
    }

    let engine = RiskEngine::default();
    let mut state = HysteresisState::new();
    let profiles = engine.evaluate(&batch, &mut state).unwrap();

    assert_eq!(profiles.len(), 2);
    let hot = &profiles[0];
    assert_eq!(hot.entity.as_str(), "VH-HOT");
    assert_eq!(hot.severity, Severity::Critical);
    assert!(hot.overall_risk >= 0.85);
    assert_eq!(hot.components.engine, 1.0);
    assert!(hot.evidence.contains(&Evidence::EngineAboveCritical));

    assert_eq!(profiles[1].severity, Severity::Routine);
}

#[test]
fn high_mileage_saturates_tyres_but_stays_routine() {
    // 52 000 km accumulated across the batch
    let batch: Vec<Reading> = (0..4)
        .map(|h| {
            reading(
                "VH-0001",
                h,
                82.0,
                13.2,
                0.25,
                10_000.0 + h as f32 * 17_333.4,
            )
        })
        .collect();

    let engine = RiskEngine::default();
    let mut state = HysteresisState::new();
    let profiles = engine.evaluate(&batch, &mut state).unwrap();

    assert_eq!(profiles.len(), 1);
    let profile = &profiles[0];
    assert_eq!(profile.components.tyres, 1.0);
    assert!(profile
        .evidence
        .contains(&Evidence::HighMileageTyreReplacementDue));

    // Distance wear-out alone carries a 0.10 weight
    assert!((profile.overall_risk - 0.10).abs() < 1e-3);
    assert_eq!(profile.severity, Severity::Routine);
}

#[test]
fn flat_battery_is_critical() {
    let batch: Vec<Reading> = (0..4)
        .map(|h| reading("VH-0001", h, 82.0, 11.8, 0.25, 18_000.0))
        .collect();

    let engine = RiskEngine::default();
    let mut state = HysteresisState::new();
    let profiles = engine.evaluate(&batch, &mut state).unwrap();

    assert_eq!(profiles[0].severity, Severity::Critical);
    assert_eq!(profiles[0].components.battery, 1.0);
    assert!(profiles[0]
        .evidence
        .contains(&Evidence::BatteryBelowCritical));
}

#[test]
fn spike_is_absorbed_once_history_exists() {
    let engine = RiskEngine::default();
    let mut state = HysteresisState::new();

    // Pass 1: overheating past the critical bound
    let hot: Vec<Reading> = (0..4)
        .map(|h| reading("VH-0001", h, 97.0, 13.2, 0.25, 18_000.0))
        .collect();
    let profiles = engine.evaluate(&hot, &mut state).unwrap();
    assert_eq!(profiles[0].severity, Severity::Critical);

    // Pass 2: recovered, but one Critical is still in the buffer
    let profiles = engine
        .evaluate(&healthy_series("VH-0001", 4), &mut state)
        .unwrap();
    assert_eq!(profiles[0].severity, Severity::Critical);

    // Pass 3: recovery is sustained across the whole window
    let profiles = engine
        .evaluate(&healthy_series("VH-0001", 8), &mut state)
        .unwrap();
    assert_eq!(profiles[0].severity, Severity::Routine);
}

#[test]
fn entities_below_minimum_history_are_skipped() {
    let mut batch = healthy_series("VH-0001", 0);
    batch.push(reading("VH-0002", 0, 82.0, 13.2, 0.25, 18_000.0));
    batch.push(reading("VH-0002", 1, 82.0, 13.2, 0.25, 18_060.0));

    let engine = RiskEngine::default();
    let mut state = HysteresisState::new();
    let profiles = engine.evaluate(&batch, &mut state).unwrap();

    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].entity.as_str(), "VH-0001");
    assert_eq!(state.entity_count(), 1);
}

#[test]
fn identical_input_produces_identical_output() {
    let mut batch = healthy_series("VH-0002", 0);
    batch.extend(healthy_series("VH-0001", 0));
    for (h, temp) in [88.0, 91.0, 94.0, 97.0].into_iter().enumerate() {
        batch.push(reading("VH-HOT", h as u64, temp, 13.2, 0.25, 18_000.0));
    }

    let engine = RiskEngine::default();

    let mut state_a = HysteresisState::new();
    let run_a = engine.evaluate(&batch, &mut state_a).unwrap();
    let mut state_b = HysteresisState::new();
    let run_b = engine.evaluate(&batch, &mut state_b).unwrap();

    assert_eq!(run_a, run_b);
}

#[test]
fn carried_state_changes_severity_only() {
    // Risks and evidence are recomputed from the readings alone; carried
    // state feeds nothing but the severity filter.
    let engine = RiskEngine::default();
    let follow_up = healthy_series("VH-0001", 4);

    let mut carried = HysteresisState::new();
    engine
        .evaluate(&healthy_series("VH-0001", 0), &mut carried)
        .unwrap();
    let incremental = engine.evaluate(&follow_up, &mut carried).unwrap();

    let mut fresh = HysteresisState::new();
    let standalone = engine.evaluate(&follow_up, &mut fresh).unwrap();

    assert_eq!(incremental[0].overall_risk, standalone[0].overall_risk);
    assert_eq!(incremental[0].components, standalone[0].components);
    assert_eq!(incremental[0].evidence, standalone[0].evidence);
    assert_eq!(incremental[0].severity, standalone[0].severity);
}

#[cfg(feature = "serde")]
#[test]
fn profiles_serialize_for_backends() {
    let engine = RiskEngine::default();
    let mut state = HysteresisState::new();
    let profiles = engine
        .evaluate(&healthy_series("VH-0001", 0), &mut state)
        .unwrap();

    let json = serde_json::to_value(&profiles[0]).unwrap();
    assert_eq!(json["entity"], "VH-0001");
    assert_eq!(json["severity"], "Routine");
    assert_eq!(json["evidence"][0], "All systems normal");
    assert!(json["overall_risk"].as_f64().unwrap() < 0.05);
}
