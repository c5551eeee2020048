//! Intervention copy: personalized override first, static library second.

mod library;
mod selector;

pub use library::{library_for, MICRO_CLOSURE_COPY, RED_ZONE_COPY, YELLOW_ZONE_COPY};
pub use selector::{select_copy, CopyChoice, CopySource};

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Default freshness window of a personalized message.
pub const DEFAULT_PERSONALIZED_TTL_MINUTES: i64 = 45;
/// Longest accepted freshness window (one year).
pub const MAX_PERSONALIZED_TTL_MINUTES: i64 = 60 * 24 * 365;

/// Configuration for copy selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopyConfig {
    /// Minutes a personalized message stays usable (default: 45).
    pub personalized_ttl_minutes: i64,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            personalized_ttl_minutes: DEFAULT_PERSONALIZED_TTL_MINUTES,
        }
    }
}

impl CopyConfig {
    /// Freshness window, clamped to `[0, MAX_PERSONALIZED_TTL_MINUTES]`.
    pub fn ttl(&self) -> Duration {
        Duration::minutes(self.personalized_ttl_minutes.clamp(0, MAX_PERSONALIZED_TTL_MINUTES))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ttl_is_clamped() {
        let ttl = |minutes| {
            CopyConfig {
                personalized_ttl_minutes: minutes,
            }
            .ttl()
        };

        assert_eq!(ttl(45), Duration::minutes(45));
        assert_eq!(ttl(i64::MAX), Duration::minutes(MAX_PERSONALIZED_TTL_MINUTES));
        assert_eq!(ttl(i64::MIN), Duration::zero());
    }
}
