//! Hysteresis Filter
//!
//! ## Overview
//!
//! A single noisy evaluation window must not flip a vehicle's reported
//! verdict. The filter keeps, per entity, a bounded FIFO of the most
//! recent *raw* severities (capacity = hysteresis window, default 2) and
//! only reports an elevated tier once it is sustained across the whole
//! buffer:
//!
//! - `Critical` only if every buffered entry is `Critical`;
//! - else `Moderate` if every entry is `Critical` or `Moderate`;
//! - else `Routine`.
//!
//! ## Cold start
//!
//! While an entity has fewer lifetime observations than the window, no
//! smoothing is possible yet. What to report in that gap is a policy
//! choice ([`ColdStartPolicy`]):
//!
//! - [`HoldWorst`](ColdStartPolicy::HoldWorst) (default): the worst
//!   severity still in the buffer. A fresh spike is reported at face
//!   value and keeps being reported until enough history exists to judge
//!   it noise.
//! - [`PassThrough`](ColdStartPolicy::PassThrough): the raw severity
//!   as-is, which lets a spike-then-recover drop out immediately.
//! - [`Routine`](ColdStartPolicy::Routine): conservative — report nothing
//!   elevated until the window fills.
//!
//! ## State ownership
//!
//! History lives in an explicit [`HysteresisState`] keyed by entity id,
//! passed into every evaluation by the caller. No global mutable state:
//! the caller decides how long an entity's monitoring session lives and
//! when its history is discarded. Entities never share history, so
//! evaluation across entities stays trivially parallelizable.

use alloc::collections::{BTreeMap, VecDeque};

use crate::constants::HYSTERESIS_WINDOW;
use crate::reading::EntityId;
use crate::severity::Severity;

/// What to report while an entity has less history than the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColdStartPolicy {
    /// Worst severity currently buffered
    #[default]
    HoldWorst,
    /// The raw severity, unsmoothed
    PassThrough,
    /// Routine until the window fills
    Routine,
}

/// Severity smoothing configuration
#[derive(Debug, Clone, PartialEq)]
pub struct HysteresisFilter {
    /// Buffer capacity: consecutive windows an elevated tier must span.
    /// 0 disables smoothing entirely.
    pub window: usize,

    /// Cold-start reporting policy
    pub cold_start: ColdStartPolicy,
}

impl Default for HysteresisFilter {
    fn default() -> Self {
        Self {
            window: HYSTERESIS_WINDOW,
            cold_start: ColdStartPolicy::default(),
        }
    }
}

/// Raw-severity history for one entity
#[derive(Debug, Clone, Default)]
struct EntityHistory {
    /// Last `window` raw severities, oldest first
    raw: VecDeque<Severity>,
    /// Lifetime observation count for this entity
    seen: u64,
}

/// Explicit per-entity hysteresis state
///
/// Create once per monitoring session and pass into every evaluation.
/// A `BTreeMap` keeps iteration (and therefore any state inspection)
/// deterministic.
#[derive(Debug, Clone, Default)]
pub struct HysteresisState {
    entities: BTreeMap<EntityId, EntityHistory>,
}

impl HysteresisState {
    /// Empty state: every entity starts cold
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entities with recorded history
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Whether any history has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Drop one entity's history (monitoring-session expiry is the
    /// caller's policy)
    pub fn forget(&mut self, entity: &EntityId) {
        self.entities.remove(entity);
    }
}

impl HysteresisFilter {
    /// Record a raw severity for an entity and return the reportable one
    pub fn apply(&self, state: &mut HysteresisState, entity: EntityId, raw: Severity) -> Severity {
        let history = state.entities.entry(entity).or_default();
        history.raw.push_back(raw);
        while history.raw.len() > self.window {
            history.raw.pop_front();
        }
        history.seen = history.seen.saturating_add(1);

        if self.window == 0 {
            return raw;
        }

        if history.seen <= self.window as u64 {
            return match self.cold_start {
                ColdStartPolicy::HoldWorst => {
                    history.raw.iter().copied().max().unwrap_or(raw)
                }
                ColdStartPolicy::PassThrough => raw,
                ColdStartPolicy::Routine => Severity::Routine,
            };
        }

        if history.raw.iter().all(|s| *s == Severity::Critical) {
            Severity::Critical
        } else if history.raw.iter().all(|s| *s >= Severity::Moderate) {
            Severity::Moderate
        } else {
            Severity::Routine
        }
    }
}
