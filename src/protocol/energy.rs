//! Pulse counts and the interval they were measured over

use std::time::Duration;

/// Nominal basis of the one-second counter
pub const ONE_SECOND: Duration = Duration::from_secs(1);
/// Nominal basis of the eight-second counter
pub const EIGHT_SECONDS: Duration = Duration::from_secs(8);
/// Basis of the hourly log counters
pub const ONE_HOUR: Duration = Duration::from_secs(3600);

/// Pulses counted by a Circle over an interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Energy {
    /// Pulse count
    pub pulses: u64,
    /// Interval the pulses were counted over
    pub interval: Duration,
}

impl Energy {
    /// Create from a pulse count and its interval
    #[must_use]
    pub const fn new(pulses: u64, interval: Duration) -> Self {
        Self { pulses, interval }
    }

    /// Pulses over one hour
    #[must_use]
    pub const fn hourly(pulses: u64) -> Self {
        Self::new(pulses, ONE_HOUR)
    }
}
