//! FleetGuard Core - Telematics Risk Scoring
//!
//! ## Overview
//!
//! FleetGuard Core turns raw vehicle telemetry (engine temperature,
//! battery voltage, brake wear, odometer) into per-vehicle risk profiles
//! with physics-aware statistical baselines:
//!
//! - **Rolling baselines**: 6-hour window mean/std, EWMA trend line, and
//!   per-metric z-scores computed incrementally per vehicle
//! - **Component scorers**: statistical deviation blended with hard
//!   physical limits for engine, battery, and brakes; cumulative-distance
//!   wear-out for tyres
//! - **Severity aggregation**: weighted overall risk with a
//!   single-component critical override
//! - **Hysteresis**: a sustained-severity filter so one noisy window
//!   cannot flip a vehicle's reported verdict
//!
//! The crate is `no_std` compatible (with `alloc`) for embedded telematics
//! gateways; the default `std` feature enables serde output for fleet
//! backends.
//!
//! ## Quick Start
//!
//! ```rust
//! use fleetguard_core::{EntityId, HysteresisState, Reading, RiskEngine, Severity};
//!
//! let vehicle = EntityId::new("VH-0001").unwrap();
//! let readings: Vec<Reading> = (0..4)
//!     .map(|hour| Reading {
//!         entity: vehicle,
//!         timestamp: hour * 3_600_000,
//!         engine_temp_c: 82.0,
//!         battery_voltage_v: 13.2,
//!         brake_wear: 0.25,
//!         odometer_km: 18_000.0 + hour as f32 * 60.0,
//!     })
//!     .collect();
//!
//! let engine = RiskEngine::default();
//! let mut state = HysteresisState::new();
//! let profiles = engine.evaluate(&readings, &mut state)?;
//!
//! assert_eq!(profiles.len(), 1);
//! assert_eq!(profiles[0].severity, Severity::Routine);
//! assert!(profiles[0].is_nominal());
//! # Ok::<(), fleetguard_core::EngineError>(())
//! ```
//!
//! ## Design Principles
//!
//! 1. **Determinism**: identical readings and carried state produce
//!    identical profiles; output ordering is total
//! 2. **Explicit state**: severity history lives in a caller-owned
//!    [`HysteresisState`], never in globals
//! 3. **Per-entity isolation**: vehicles share nothing, so evaluation
//!    shards trivially
//! 4. **Bounded memory**: rolling windows and severity buffers are capped
//!    by configuration, independent of batch size

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

pub mod baseline;
pub mod constants;
pub mod errors;
pub mod hysteresis;
pub mod pipeline;
pub mod profile;
pub mod reading;
pub mod scorers;
pub mod severity;
pub mod time;

pub use baseline::{BaselineConfig, BaselineRecord, BaselineTracker};
pub use errors::{EngineError, EngineResult};
pub use hysteresis::{ColdStartPolicy, HysteresisFilter, HysteresisState};
pub use pipeline::{EngineConfig, RiskEngine};
pub use profile::{rank_by_risk, MetricsSnapshot, RiskProfile};
pub use reading::{EntityId, Metric, Reading};
pub use scorers::{
    BatteryScorer, BrakeWearScorer, ComponentScore, ComponentScorer, DetectionParams,
    EngineTempScorer, Evidence, ThresholdBounds, TyreWearScorer,
};
pub use severity::{aggregate, ComponentRisks, Severity, SeverityCutoffs, SeverityWeights};
pub use time::Timestamp;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
