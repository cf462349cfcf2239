//! Rolling Baseline Calculator
//!
//! ## Overview
//!
//! For each (entity, metric) pair the engine keeps a trailing statistical
//! picture of "normal", recomputed incrementally as each reading arrives
//! and using only data at or before that reading:
//!
//! - **Rolling mean / std** over a trailing *time* window (default 6 h) —
//!   the window is bounded by duration, not sample count, so sparse and
//!   dense feeds get the same semantics.
//! - **EWMA** smoothing with decay implied by a sample span (default 7),
//!   seeded with the first value; no forward-looking data.
//! - **Z-score** of the current value against the rolling baseline, with
//!   the standard deviation floored at 1.0 so near-constant history can
//!   never explode the score (degenerate-statistics recovery, not an
//!   error).
//! - **Percent change** against the value a fixed number of samples back
//!   (default 3), 0 until enough history exists.
//!
//! ## Incremental contract
//!
//! [`BaselineTracker::push`] must see readings in non-decreasing timestamp
//! order; the orchestrator validates this before any tracker is fed.
//! Records are derived values: they are returned, never stored or
//! retroactively mutated.

use alloc::collections::VecDeque;

use crate::constants::{EWMA_SPAN, ROLLING_WINDOW_MS, TREND_LAG};
use crate::time::Timestamp;

#[cfg(feature = "std")]
fn sqrt(x: f32) -> f32 {
    x.sqrt()
}

#[cfg(not(feature = "std"))]
fn sqrt(x: f32) -> f32 {
    libm::sqrtf(x)
}

/// Configuration for one baseline tracker
#[derive(Debug, Clone, PartialEq)]
pub struct BaselineConfig {
    /// Trailing window duration for rolling mean/std (milliseconds)
    pub window_ms: Timestamp,

    /// EWMA span in samples; `alpha = 2 / (span + 1)`
    pub ewma_span: u32,

    /// How many samples back the percent-change trend looks
    pub trend_lag: usize,
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self {
            window_ms: ROLLING_WINDOW_MS,
            ewma_span: EWMA_SPAN,
            trend_lag: TREND_LAG,
        }
    }
}

/// Rolling statistics for one metric as of one reading
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BaselineRecord {
    /// Timestamp of the reading this record describes
    pub timestamp: Timestamp,
    /// Raw metric value
    pub value: f32,
    /// Mean of raw values inside the trailing time window
    pub rolling_mean: f32,
    /// Sample standard deviation inside the window (0 for a single sample)
    pub rolling_std: f32,
    /// Exponentially-weighted smoothed value
    pub ewma: f32,
    /// `(value - rolling_mean) / max(rolling_std, 1)`
    pub zscore: f32,
    /// Percent change vs the value `trend_lag` samples back; 0 without
    /// enough history or when the lagged value is 0
    pub pct_change: f32,
}

/// Incremental per-(entity, metric) baseline state
///
/// Holds the trailing time window plus the small amount of carry state the
/// EWMA and trend need. One tracker per metric per entity; trackers are
/// never shared across entities.
#[derive(Debug, Clone)]
pub struct BaselineTracker {
    config: BaselineConfig,
    /// Samples still inside the trailing time window, oldest first
    window: VecDeque<(Timestamp, f32)>,
    /// Last `trend_lag` raw values, regardless of the time window
    recent: VecDeque<f32>,
    ewma: Option<f32>,
}

impl BaselineTracker {
    /// Create an empty tracker
    pub fn new(config: BaselineConfig) -> Self {
        Self {
            config,
            window: VecDeque::new(),
            recent: VecDeque::new(),
            ewma: None,
        }
    }

    /// Number of samples currently inside the time window
    pub fn window_len(&self) -> usize {
        self.window.len()
    }

    /// Whether the tracker has seen any reading yet
    pub fn is_empty(&self) -> bool {
        self.ewma.is_none()
    }

    /// Feed the next reading and get the baseline record as of it
    ///
    /// Timestamps must be non-decreasing across calls.
    pub fn push(&mut self, timestamp: Timestamp, value: f32) -> BaselineRecord {
        // Evict samples that aged out of the trailing window. The window is
        // right-closed: a sample exactly window_ms old no longer counts.
        while let Some(&(ts, _)) = self.window.front() {
            if timestamp.saturating_sub(ts) >= self.config.window_ms {
                self.window.pop_front();
            } else {
                break;
            }
        }
        self.window.push_back((timestamp, value));

        let n = self.window.len();
        let mean = self.window.iter().map(|&(_, v)| v).sum::<f32>() / n as f32;
        let rolling_std = if n > 1 {
            let sum_sq: f32 = self
                .window
                .iter()
                .map(|&(_, v)| (v - mean) * (v - mean))
                .sum();
            sqrt(sum_sq / (n - 1) as f32)
        } else {
            // Std of a single sample is undefined; report 0 and let the
            // z-score floor take over.
            0.0
        };

        let alpha = 2.0 / (self.config.ewma_span as f32 + 1.0);
        let ewma = match self.ewma {
            None => value,
            Some(prev) => alpha * value + (1.0 - alpha) * prev,
        };
        self.ewma = Some(ewma);

        let zscore = (value - mean) / rolling_std.max(1.0);

        let lag = self.config.trend_lag;
        let pct_change = if lag > 0 && self.recent.len() >= lag {
            let base = self.recent[self.recent.len() - lag];
            if base == 0.0 {
                0.0
            } else {
                100.0 * (value - base) / base
            }
        } else {
            0.0
        };
        self.recent.push_back(value);
        while self.recent.len() > lag {
            self.recent.pop_front();
        }

        BaselineRecord {
            timestamp,
            value,
            rolling_mean: mean,
            rolling_std,
            ewma,
            zscore,
            pct_change,
        }
    }
}
