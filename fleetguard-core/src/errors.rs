//! Error Types for Input-Contract Violations
//!
//! ## Design
//!
//! Once a batch passes validation there is no error path inside risk
//! computation: every score is a total, clamped function of its inputs.
//! Insufficient data is not an error either — entities with too few
//! readings are skipped, degenerate statistics are floored locally.
//!
//! What *is* an error is a violated input contract. The ingestion layer is
//! responsible for ordering and sanitizing readings; if a batch still
//! arrives with backwards timestamps or non-finite values, the engine
//! rejects the whole batch loudly instead of producing a skewed baseline.
//!
//! Errors carry inline `Copy` data only (no heap), matching the rest of
//! the input types.

use thiserror_no_std::Error;

use crate::reading::{EntityId, Metric};
use crate::time::Timestamp;

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Batch-rejection errors raised during input validation
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum EngineError {
    /// Timestamps for one entity go backwards within the batch
    #[error("readings for {entity} go backwards in time ({prev} -> {next})")]
    NonMonotonicTimestamps {
        /// Entity whose sequence is out of order
        entity: EntityId,
        /// Timestamp of the earlier-positioned reading
        prev: Timestamp,
        /// Offending timestamp that moved backwards
        next: Timestamp,
    },

    /// A metric field is NaN or infinite
    #[error("{metric} reading for {entity} is not a finite number")]
    InvalidValue {
        /// Entity carrying the bad sample
        entity: EntityId,
        /// Which metric field failed the finite check
        metric: Metric,
    },
}
