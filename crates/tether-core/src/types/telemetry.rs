//! Raw per-tick telemetry and the thresholds it is measured against.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default continuous-scroll boundary for attention risk (seconds).
pub const DEFAULT_SCROLL_THRESHOLD_SEC: f64 = 180.0;
/// Default start of the warning band (seconds).
pub const DEFAULT_PRESENCE_THRESHOLD_SEC: f64 = 90.0;
/// Default number of interventions allowed in the recent window.
pub const DEFAULT_INTERVENTION_CAP: u32 = 2;
/// Default resistance score at which the cap is bypassed.
pub const DEFAULT_RESISTANCE_THRESHOLD: f64 = 4.0;

/// Boundaries a tick is classified against. Immutable per evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Continuous scroll at or above this is attention risk.
    pub scroll_threshold_sec: f64,
    /// Continuous scroll at or above this (and below the scroll threshold)
    /// is approaching risk.
    pub presence_threshold_sec: f64,
    /// Interventions allowed in the recent window.
    pub intervention_cap: u32,
    /// Resistance score that overrides the intervention cap.
    pub resistance_threshold: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            scroll_threshold_sec: DEFAULT_SCROLL_THRESHOLD_SEC,
            presence_threshold_sec: DEFAULT_PRESENCE_THRESHOLD_SEC,
            intervention_cap: DEFAULT_INTERVENTION_CAP,
            resistance_threshold: DEFAULT_RESISTANCE_THRESHOLD,
        }
    }
}

/// Escalation state maintained outside the engine.
///
/// The engine only reads it and forwards it into [`Signals`](crate::Signals).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EscalationState {
    /// How strongly the user has been ignoring past interventions.
    pub resistance_score: f64,
    /// When the last blocking intervention was shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_hard_intervention_at: Option<DateTime<Utc>>,
    /// Whether the blocking-intervention cooldown has elapsed.
    pub hard_cooldown_ok: bool,
    /// Number of interventions triggered so far.
    pub triggered_count: u32,
    /// Consecutive ignored interventions.
    pub ignored_streak: u32,
}

impl Default for EscalationState {
    fn default() -> Self {
        Self {
            resistance_score: 0.0,
            last_hard_intervention_at: None,
            hard_cooldown_ok: true,
            triggered_count: 0,
            ignored_streak: 0,
        }
    }
}

impl EscalationState {
    /// Create a state with only a resistance score set.
    pub fn with_resistance(resistance_score: f64) -> Self {
        Self {
            resistance_score: sanitize(resistance_score),
            ..Default::default()
        }
    }

    /// Lenient conversion from an untyped host value.
    ///
    /// Fields that are missing or of the wrong type keep their defaults.
    pub fn from_value(value: &Value) -> Self {
        let defaults = Self::default();
        let Some(obj) = value.as_object() else {
            return defaults;
        };

        Self {
            resistance_score: number(obj.get("resistance_score")),
            last_hard_intervention_at: obj
                .get("last_hard_intervention_at")
                .and_then(Value::as_str)
                .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
                .map(|dt| dt.with_timezone(&Utc)),
            hard_cooldown_ok: obj
                .get("hard_cooldown_ok")
                .and_then(Value::as_bool)
                .unwrap_or(defaults.hard_cooldown_ok),
            triggered_count: count(obj.get("triggered_count")),
            ignored_streak: count(obj.get("ignored_streak")),
        }
    }
}

/// Raw measurements produced by the telemetry source on every tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawTelemetry {
    /// Seconds of uninterrupted scrolling.
    pub continuous_scroll_sec: f64,
    /// Pixel scroll depth, when the source can measure it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_px: Option<f64>,
    /// Interventions shown in the recent window.
    pub intervention_count_recent: u32,
    /// Escalation state, when the host tracks one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escalation: Option<EscalationState>,
}

impl RawTelemetry {
    /// Telemetry with only the continuous scroll duration set.
    pub fn scrolling(continuous_scroll_sec: f64) -> Self {
        Self {
            continuous_scroll_sec: sanitize(continuous_scroll_sec),
            ..Default::default()
        }
    }

    pub fn with_scroll_px(mut self, scroll_px: f64) -> Self {
        self.scroll_px = Some(sanitize(scroll_px));
        self
    }

    pub fn with_intervention_count(mut self, count: u32) -> Self {
        self.intervention_count_recent = count;
        self
    }

    pub fn with_escalation(mut self, escalation: EscalationState) -> Self {
        self.escalation = Some(escalation);
        self
    }

    /// Lenient conversion from an untyped host value.
    ///
    /// Missing, non-numeric, negative or non-finite numbers become zero and a
    /// non-object input yields all-default telemetry, which the gate treats as
    /// safe to keep scrolling.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };

        Self {
            continuous_scroll_sec: number(obj.get("continuous_scroll_sec")),
            scroll_px: obj
                .get("scroll_px")
                .and_then(Value::as_f64)
                .filter(|px| px.is_finite() && *px >= 0.0),
            intervention_count_recent: count(obj.get("intervention_count_recent")),
            escalation: obj
                .get("escalation")
                .filter(|v| v.is_object())
                .map(EscalationState::from_value),
        }
    }
}

fn sanitize(n: f64) -> f64 {
    if n.is_finite() && n > 0.0 {
        n
    } else {
        0.0
    }
}

pub(super) fn number(value: Option<&Value>) -> f64 {
    value.and_then(Value::as_f64).map(sanitize).unwrap_or(0.0)
}

pub(super) fn count(value: Option<&Value>) -> u32 {
    let n = number(value);
    if n >= u32::MAX as f64 {
        u32::MAX
    } else {
        n.floor() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_threshold_defaults() {
        let t = Thresholds::default();
        assert_eq!(t.scroll_threshold_sec, 180.0);
        assert_eq!(t.presence_threshold_sec, 90.0);
        assert_eq!(t.intervention_cap, 2);
        assert_eq!(t.resistance_threshold, 4.0);
    }

    #[test]
    fn test_from_value_full() {
        let raw = RawTelemetry::from_value(&json!({
            "continuous_scroll_sec": 200,
            "scroll_px": 5400.5,
            "intervention_count_recent": 3,
            "escalation": {
                "resistance_score": 4.5,
                "hard_cooldown_ok": false,
                "triggered_count": 7,
                "ignored_streak": 2,
                "last_hard_intervention_at": "2026-01-05T10:00:00Z"
            }
        }));

        assert_eq!(raw.continuous_scroll_sec, 200.0);
        assert_eq!(raw.scroll_px, Some(5400.5));
        assert_eq!(raw.intervention_count_recent, 3);
        let esc = raw.escalation.unwrap();
        assert_eq!(esc.resistance_score, 4.5);
        assert!(!esc.hard_cooldown_ok);
        assert_eq!(esc.triggered_count, 7);
        assert_eq!(esc.ignored_streak, 2);
        assert!(esc.last_hard_intervention_at.is_some());
    }

    #[test]
    fn test_from_value_malformed() {
        let raw = RawTelemetry::from_value(&json!({
            "continuous_scroll_sec": "lots",
            "scroll_px": -10,
            "intervention_count_recent": null,
            "escalation": 12
        }));
        assert_eq!(raw, RawTelemetry::default());

        assert_eq!(RawTelemetry::from_value(&json!([1, 2, 3])), RawTelemetry::default());
        assert_eq!(RawTelemetry::from_value(&Value::Null), RawTelemetry::default());
    }

    #[test]
    fn test_negative_duration_clamped() {
        let raw = RawTelemetry::from_value(&json!({ "continuous_scroll_sec": -30 }));
        assert_eq!(raw.continuous_scroll_sec, 0.0);
        assert_eq!(RawTelemetry::scrolling(f64::NAN).continuous_scroll_sec, 0.0);
    }

    #[test]
    fn test_escalation_defaults_are_safe() {
        let esc = EscalationState::from_value(&json!({}));
        assert_eq!(esc, EscalationState::default());
        assert_eq!(esc.resistance_score, 0.0);
        assert!(esc.hard_cooldown_ok);
    }

    #[test]
    fn test_serde_defaults() {
        let raw: RawTelemetry = serde_json::from_str(r#"{"continuous_scroll_sec": 95}"#).unwrap();
        assert_eq!(raw.continuous_scroll_sec, 95.0);
        assert!(raw.scroll_px.is_none());
        assert!(raw.escalation.is_none());
    }
}
