//! Time handling for telemetry streams
//!
//! The engine does not read a clock: every reading carries its own
//! timestamp, assigned by the ingestion layer, and all window arithmetic
//! is plain integer math on those values.

/// Timestamp in milliseconds since epoch (or fleet-gateway boot for monotonic feeds)
pub type Timestamp = u64;

/// Milliseconds per second
pub const MS_PER_SECOND: u64 = 1_000;

/// Milliseconds per minute
pub const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;

/// Milliseconds per hour
pub const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;

/// Convert a whole number of hours to milliseconds
pub const fn hours_to_ms(hours: u64) -> u64 {
    hours * MS_PER_HOUR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hour_conversion() {
        assert_eq!(hours_to_ms(1), 3_600_000);
        assert_eq!(hours_to_ms(6), 21_600_000);
    }
}
