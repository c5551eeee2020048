//! Chat-style nudge types.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumString};

use super::telemetry::{count, number};

/// Session context used to fill nudge templates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NudgeContext {
    pub session_duration_ms: u64,
    /// Connections surfaced in this session; only the count is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connections: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages_read_today: Option<u32>,
    pub total_reading_today_ms: u64,
}

impl NudgeContext {
    /// Lenient conversion from an untyped host value.
    ///
    /// Durations that are missing, negative or non-numeric become zero. A
    /// page count that is not a number is dropped, and a `connections` value
    /// that is not a list is ignored.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };

        Self {
            session_duration_ms: number(obj.get("session_duration_ms")) as u64,
            connections: obj.get("connections").and_then(Value::as_array).cloned(),
            pages_read_today: obj
                .get("pages_read_today")
                .filter(|v| v.is_number())
                .map(|v| count(Some(v))),
            total_reading_today_ms: number(obj.get("total_reading_today_ms")) as u64,
        }
    }
}

/// Escalation tier of a chat nudge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NudgeTier {
    Gentle,
    Moderate,
    Firm,
}

/// A suggestion chip. An empty prompt marks a purely informational choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NudgeAction {
    pub label: String,
    pub prompt: String,
}

/// A composed chat nudge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatNudge {
    pub message: String,
    pub actions: Vec<NudgeAction>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_context_from_value() {
        let context = NudgeContext::from_value(&json!({
            "session_duration_ms": 1_500_000.7,
            "connections": ["a", "b"],
            "pages_read_today": 3.0,
            "total_reading_today_ms": 5_400_000
        }));

        assert_eq!(context.session_duration_ms, 1_500_000);
        assert_eq!(context.connections.as_ref().map(Vec::len), Some(2));
        assert_eq!(context.pages_read_today, Some(3));
        assert_eq!(context.total_reading_today_ms, 5_400_000);
    }

    #[test]
    fn test_context_from_value_is_lenient() {
        let context = NudgeContext::from_value(&json!({
            "session_duration_ms": -20,
            "connections": "many",
            "pages_read_today": "three",
            "total_reading_today_ms": null
        }));
        assert_eq!(context, NudgeContext::default());

        let negative_pages = NudgeContext::from_value(&json!({ "pages_read_today": -4 }));
        assert_eq!(negative_pages.pages_read_today, Some(0));

        assert_eq!(NudgeContext::from_value(&json!([1, 2])), NudgeContext::default());
    }
}
