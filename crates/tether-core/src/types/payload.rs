//! Delivery-ready intervention payloads.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::reaction::{DeliveryMode, ReactionEvent};
use super::strategy::PresenceLevel;

/// Animation speed of an ambient cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Pulse {
    Slow,
    Normal,
}

/// Ambient indicator state, or the deliberate absence of one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presence {
    pub show: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<PresenceLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pulse: Option<Pulse>,
}

impl Presence {
    /// No visible cue.
    pub fn hidden() -> Self {
        Self {
            show: false,
            level: None,
            pulse: None,
        }
    }

    pub fn shown(level: PresenceLevel) -> Self {
        Self {
            show: true,
            level: Some(level),
            pulse: None,
        }
    }

    pub fn pulsing(level: PresenceLevel, pulse: Pulse) -> Self {
        Self {
            show: true,
            level: Some(level),
            pulse: Some(pulse),
        }
    }
}

/// Visual weight of an action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionRole {
    Primary,
    Secondary,
}

/// A button on a dismissible card, with the reaction it logs when pressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadAction {
    pub id: String,
    pub role: ActionRole,
    pub logs: ReactionEvent,
}

impl PayloadAction {
    /// Ends the session; logs a completion.
    pub fn finish_session() -> Self {
        Self {
            id: "finish_session".to_string(),
            role: ActionRole::Primary,
            logs: ReactionEvent::Completed,
        }
    }

    /// Postpones the reminder; logs a snooze.
    pub fn snooze_delay() -> Self {
        Self {
            id: "snooze_delay".to_string(),
            role: ActionRole::Secondary,
            logs: ReactionEvent::Snoozed,
        }
    }

    /// The two actions every closure card carries.
    pub fn closure_pair() -> Vec<PayloadAction> {
        vec![Self::finish_session(), Self::snooze_delay()]
    }
}

/// Layout variant of a closure card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClosureVariant {
    OneTap,
}

/// A dismissible closure card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MicroClosurePayload {
    pub variant: ClosureVariant,
    pub text: String,
    pub actions: Vec<PayloadAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presence: Option<Presence>,
}

/// A blocking full-attention surface. It carries no buttons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardInterruptPayload {
    pub mode: DeliveryMode,
    pub text: String,
}

/// What the delivery surface should show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum InterventionPayload {
    None,
    PresenceSignal(Presence),
    MicroClosure(MicroClosurePayload),
    HardInterrupt(HardInterruptPayload),
}

impl InterventionPayload {
    /// Wire name of the payload type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::PresenceSignal(_) => "presence_signal",
            Self::MicroClosure(_) => "micro_closure",
            Self::HardInterrupt(_) => "hard_interrupt",
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Copy text, for payloads that carry any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::MicroClosure(p) => Some(&p.text),
            Self::HardInterrupt(p) => Some(&p.text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_none_payload_shape() {
        let json = serde_json::to_value(InterventionPayload::None).unwrap();
        assert_eq!(json, json!({ "type": "none" }));
    }

    #[test]
    fn test_presence_payload_shape() {
        let payload =
            InterventionPayload::PresenceSignal(Presence::pulsing(PresenceLevel::Low, Pulse::Slow));
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            json!({
                "type": "presence_signal",
                "payload": { "show": true, "level": "low", "pulse": "slow" }
            })
        );
        assert_eq!(payload.type_name(), "presence_signal");
    }

    #[test]
    fn test_hidden_presence_omits_optionals() {
        let json = serde_json::to_value(Presence::hidden()).unwrap();
        assert_eq!(json, json!({ "show": false }));
    }

    #[test]
    fn test_hard_interrupt_shape() {
        let payload = InterventionPayload::HardInterrupt(HardInterruptPayload {
            mode: DeliveryMode::Breath,
            text: "Pause.".to_string(),
        });
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["type"], "hard_interrupt");
        assert_eq!(json["payload"], json!({ "mode": "breath", "text": "Pause." }));
        assert_eq!(payload.text(), Some("Pause."));
    }

    #[test]
    fn test_closure_actions() {
        let actions = PayloadAction::closure_pair();
        assert_eq!(actions[0].id, "finish_session");
        assert_eq!(actions[0].role, ActionRole::Primary);
        assert_eq!(actions[0].logs, ReactionEvent::Completed);
        assert_eq!(actions[1].id, "snooze_delay");
        assert_eq!(actions[1].logs, ReactionEvent::Snoozed);
    }
}
