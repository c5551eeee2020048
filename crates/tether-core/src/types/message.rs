//! Personalized message override.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A one-shot personalized text that replaces the library copy while fresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalizedMessage {
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl PersonalizedMessage {
    /// Create a message stamped with the current time.
    pub fn new(text: impl Into<String>) -> Self {
        Self::created_at(text, Utc::now())
    }

    pub fn created_at(text: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            text: text.into(),
            created_at,
        }
    }

    /// Still usable at `now`: strictly younger than `ttl`.
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.created_at < ttl
    }
}
