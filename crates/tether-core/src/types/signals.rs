//! Per-tick signals and the gate decision derived from them.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::telemetry::{EscalationState, Thresholds};

/// Structured view of one telemetry tick.
///
/// `attention_risk` and `approaching_risk` are never both true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signals {
    /// The hard boundary has been crossed.
    pub attention_risk: bool,
    /// Inside the warning band below the hard boundary.
    pub approaching_risk: bool,
    /// Another intervention is allowed right now.
    pub cap_ok: bool,
    /// Pixel depth, or scroll seconds when pixels are unavailable.
    pub scroll_depth: f64,
    pub is_high_momentum: bool,
    pub escalation: EscalationState,
    pub thresholds: Thresholds,
}

impl Signals {
    /// Either risk flag is set.
    pub fn at_risk(&self) -> bool {
        self.attention_risk || self.approaching_risk
    }
}

/// What fired the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Trigger {
    HardLimit,
    SoftSignal,
    None,
}

/// Extra data carried alongside a decision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecisionMeta {
    pub scroll_depth: f64,
}

/// Go/no-go verdict for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub is_safe_to_scroll: bool,
    pub trigger: Trigger,
    pub meta: DecisionMeta,
}

impl Decision {
    /// The decision asks the host to intervene.
    pub fn needs_intervention(&self) -> bool {
        !self.is_safe_to_scroll
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_wire_names() {
        assert_eq!(serde_json::to_string(&Trigger::HardLimit).unwrap(), "\"HARD_LIMIT\"");
        assert_eq!(Trigger::SoftSignal.to_string(), "SOFT_SIGNAL");
        assert_eq!("NONE".parse::<Trigger>().unwrap(), Trigger::None);
    }

    #[test]
    fn test_decision_serialization() {
        let decision = Decision {
            is_safe_to_scroll: false,
            trigger: Trigger::HardLimit,
            meta: DecisionMeta { scroll_depth: 200.0 },
        };
        let json = serde_json::to_value(decision).unwrap();
        assert_eq!(json["trigger"], "HARD_LIMIT");
        assert_eq!(json["meta"]["scroll_depth"], 200.0);
        assert!(decision.needs_intervention());
    }
}
