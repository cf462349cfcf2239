//! Input Types for the Risk-Scoring Engine
//!
//! ## Overview
//!
//! This module defines the engine's entire input contract: a stable entity
//! identifier, the fixed set of tracked metrics, and the immutable
//! [`Reading`] record the ingestion layer produces for every sample.
//!
//! ## Input contract
//!
//! The engine consumes an already-parsed, already-ordered sequence of
//! readings. Per entity, timestamps must be non-decreasing and every metric
//! field must be a finite number — the loader owns parsing and range
//! validation, but the engine still rejects a batch that violates this
//! contract rather than silently skewing its baselines (see
//! [`crate::errors::EngineError`]).
//!
//! ## Memory model
//!
//! `Reading` is a small `Copy` record (~40 bytes) and `EntityId` stores its
//! identifier inline, so batches can be grouped and re-sliced without any
//! per-reading allocation.

use core::fmt;

use crate::time::Timestamp;

/// Maximum length for inline entity identifiers
///
/// Fleet vehicle ids ("VH-10422", VINs truncated to unit codes) fit well
/// within this; longer ids must be shortened by the ingestion layer.
pub const MAX_ENTITY_ID: usize = 15;

/// Stable identifier for one monitored vehicle
///
/// Stored inline to keep readings `Copy` and allocation-free. Ordered and
/// hashable so it can key per-entity state maps.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId {
    len: u8,
    data: [u8; MAX_ENTITY_ID],
}

impl EntityId {
    /// Create from a string slice; `None` if it exceeds [`MAX_ENTITY_ID`] bytes
    pub fn new(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() > MAX_ENTITY_ID {
            return None;
        }

        let mut data = [0u8; MAX_ENTITY_ID];
        data[..bytes.len()].copy_from_slice(bytes);

        Some(Self {
            len: bytes.len() as u8,
            data,
        })
    }

    /// Get as string slice
    pub fn as_str(&self) -> &str {
        // Only valid UTF-8 enters through new(), so this cannot fail
        core::str::from_utf8(&self.data[..self.len as usize]).unwrap_or("")
    }
}

impl PartialOrd for EntityId {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EntityId {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for EntityId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for EntityId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor;

        impl serde::de::Visitor<'_> for IdVisitor {
            type Value = EntityId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "an entity id of at most {} bytes", MAX_ENTITY_ID)
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<EntityId, E> {
                EntityId::new(v)
                    .ok_or_else(|| E::invalid_length(v.len(), &self))
            }
        }

        deserializer.deserialize_str(IdVisitor)
    }
}

/// Tracked metric enumeration
///
/// Maps to specific component scorers and hard bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Metric {
    /// Engine coolant temperature
    EngineTemp = 0,
    /// Battery voltage at the main bus
    BatteryVoltage = 1,
    /// Brake pad wear fraction
    BrakeWear = 2,
    /// Cumulative odometer distance
    Odometer = 3,
}

impl Metric {
    /// All tracked metrics, in reading-field order
    pub const ALL: [Metric; 4] = [
        Metric::EngineTemp,
        Metric::BatteryVoltage,
        Metric::BrakeWear,
        Metric::Odometer,
    ];

    /// Metrics with a rolling statistical baseline (odometer is monotonic
    /// and threshold-only by nature)
    pub const STATISTICAL: [Metric; 3] = [
        Metric::EngineTemp,
        Metric::BatteryVoltage,
        Metric::BrakeWear,
    ];

    /// Get human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            Metric::EngineTemp => "engine_temp",
            Metric::BatteryVoltage => "battery_voltage",
            Metric::BrakeWear => "brake_wear",
            Metric::Odometer => "odometer",
        }
    }

    /// Get expected unit of measurement
    pub const fn unit(&self) -> &'static str {
        match self {
            Metric::EngineTemp => "°C",
            Metric::BatteryVoltage => "V",
            Metric::BrakeWear => "fraction",
            Metric::Odometer => "km",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One timestamped multi-metric sample for an entity
///
/// Immutable once produced; the engine never mutates or reorders readings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reading {
    /// Vehicle this sample belongs to
    pub entity: EntityId,
    /// Sample time in milliseconds, non-decreasing within an entity
    pub timestamp: Timestamp,
    /// Engine coolant temperature (°C)
    pub engine_temp_c: f32,
    /// Battery voltage (V)
    pub battery_voltage_v: f32,
    /// Brake pad wear fraction in [0, 1]
    pub brake_wear: f32,
    /// Cumulative odometer distance (km)
    pub odometer_km: f32,
}

impl Reading {
    /// Access one metric field by enum
    pub fn metric(&self, metric: Metric) -> f32 {
        match metric {
            Metric::EngineTemp => self.engine_temp_c,
            Metric::BatteryVoltage => self.battery_voltage_v,
            Metric::BrakeWear => self.brake_wear,
            Metric::Odometer => self.odometer_km,
        }
    }

    /// Check that every metric field is a finite number
    pub fn is_valid(&self) -> bool {
        self.engine_temp_c.is_finite()
            && self.battery_voltage_v.is_finite()
            && self.brake_wear.is_finite()
            && self.odometer_km.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_id_roundtrip() {
        let id = EntityId::new("VH-0042").unwrap();
        assert_eq!(id.as_str(), "VH-0042");

        // Too long
        assert!(EntityId::new("a_very_long_vehicle_identifier").is_none());
    }

    #[test]
    fn entity_id_ordering() {
        let a = EntityId::new("VH-0001").unwrap();
        let b = EntityId::new("VH-0002").unwrap();
        assert!(a < b);
        assert_eq!(a, EntityId::new("VH-0001").unwrap());
    }

    #[test]
    fn metric_names_and_units() {
        assert_eq!(Metric::EngineTemp.name(), "engine_temp");
        assert_eq!(Metric::BatteryVoltage.unit(), "V");
        assert_eq!(Metric::ALL.len(), 4);
        assert_eq!(Metric::STATISTICAL.len(), 3);
    }

    #[test]
    fn reading_validity() {
        let mut reading = Reading {
            entity: EntityId::new("VH-1").unwrap(),
            timestamp: 1000,
            engine_temp_c: 82.0,
            battery_voltage_v: 13.1,
            brake_wear: 0.3,
            odometer_km: 12_000.0,
        };
        assert!(reading.is_valid());
        assert_eq!(reading.metric(Metric::BrakeWear), 0.3);

        reading.battery_voltage_v = f32::NAN;
        assert!(!reading.is_valid());
    }
}
