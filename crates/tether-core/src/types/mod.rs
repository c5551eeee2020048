//! Core types for tether.

mod message;
mod nudge;
mod payload;
mod reaction;
mod signals;
mod strategy;
mod telemetry;

pub use message::PersonalizedMessage;
pub use nudge::*;
pub use payload::*;
pub use reaction::{DeliveryMode, ReactionEvent, ReactionRecord};
pub use signals::{Decision, DecisionMeta, Signals, Trigger};
pub use strategy::{Category, CopyCategory, Intent, PresenceLevel, RiskTolerance, Strategy};
pub use telemetry::{EscalationState, RawTelemetry, Thresholds};
