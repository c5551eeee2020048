//! Inputs handed down by the strategy layer.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// What the strategy layer wants to achieve on this tick.
///
/// Wire names mix cases because the strategy layer emits them that way.
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
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Intent {
    #[serde(rename = "ALLOW_CONTINUE")]
    #[strum(serialize = "ALLOW_CONTINUE")]
    AllowContinue,
    #[serde(rename = "observe_only")]
    #[strum(serialize = "observe_only")]
    ObserveOnly,
    #[serde(rename = "reduce_resistance")]
    #[strum(serialize = "reduce_resistance")]
    ReduceResistance,
    #[serde(rename = "restore_awareness")]
    #[strum(serialize = "restore_awareness")]
    RestoreAwareness,
    #[serde(rename = "ENFORCE_LIMIT")]
    #[strum(serialize = "ENFORCE_LIMIT")]
    EnforceLimit,
    #[serde(rename = "SIGNAL_AWARENESS")]
    #[strum(serialize = "SIGNAL_AWARENESS")]
    SignalAwareness,
}

/// Strength of an ambient cue.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PresenceLevel {
    #[default]
    Low,
    Medium,
    High,
}

/// How much risk the strategy layer is willing to tolerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RiskTolerance {
    Low,
    Medium,
    High,
}

/// Strategy hints for one intervention decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Strategy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity: Option<PresenceLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_tolerance: Option<RiskTolerance>,
}

impl Strategy {
    pub fn with_intent(intent: Intent) -> Self {
        Self {
            intent: Some(intent),
            ..Default::default()
        }
    }

    pub fn intensity(mut self, level: PresenceLevel) -> Self {
        self.intensity = Some(level);
        self
    }

    pub fn risk_tolerance(mut self, tolerance: RiskTolerance) -> Self {
        self.risk_tolerance = Some(tolerance);
        self
    }

    /// Build from loosely-typed labels; unknown labels become `None`.
    pub fn from_labels(intent: Option<&str>, intensity: Option<&str>) -> Self {
        Self {
            intent: intent.and_then(|s| s.parse().ok()),
            intensity: intensity.and_then(|s| s.parse().ok()),
            risk_tolerance: None,
        }
    }

    pub fn is(&self, intent: Intent) -> bool {
        self.intent == Some(intent)
    }
}

/// Intervention category chosen by the strategy layer.
///
/// "No intervention" is modelled as `Option::<Category>::None`.
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
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Category {
    GentleReflection,
    MicroClosure,
    HardInterrupt,
    PresenceSignal,
}

impl Category {
    /// Parse a category label. `"none"` and unknown labels map to `None`.
    pub fn from_label(label: &str) -> Option<Category> {
        label.parse().ok()
    }
}

/// Copy library key.
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
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CopyCategory {
    RedZone,
    YellowZone,
}

impl CopyCategory {
    /// Parse a library key, falling back to the red-zone library.
    pub fn from_label(label: &str) -> CopyCategory {
        label.parse().unwrap_or(CopyCategory::RedZone)
    }
}
