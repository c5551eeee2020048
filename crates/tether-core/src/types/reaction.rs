//! Reaction history records written by the delivery surface.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Outcome of a shown intervention.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ReactionEvent {
    Completed,
    Ignored,
    Snoozed,
}

/// Delivery style of a blocking intervention. These are the bandit arms.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DeliveryMode {
    Breath,
    Tap,
    Stillness,
}

impl DeliveryMode {
    /// All arms in their canonical order.
    pub const ALL: [DeliveryMode; 3] = [
        DeliveryMode::Breath,
        DeliveryMode::Tap,
        DeliveryMode::Stillness,
    ];
}

/// One entry of the append-only reaction log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionRecord {
    pub event: ReactionEvent,
    pub mode: DeliveryMode,
}

impl ReactionRecord {
    pub fn new(event: ReactionEvent, mode: DeliveryMode) -> Self {
        Self { event, mode }
    }

    /// Convert an untyped host log into usable records.
    ///
    /// Entries whose event or mode is unknown are dropped. A non-array input
    /// yields an empty history, which sends the selector to cold start.
    pub fn parse_history(value: &Value) -> Vec<ReactionRecord> {
        let Some(entries) = value.as_array() else {
            return Vec::new();
        };

        entries.iter().filter_map(Self::parse_entry).collect()
    }

    fn parse_entry(entry: &Value) -> Option<ReactionRecord> {
        let event = entry.get("event")?.as_str()?.parse().ok()?;
        let mode = entry.get("mode")?.as_str()?.parse().ok()?;
        Some(ReactionRecord { event, mode })
    }
}
