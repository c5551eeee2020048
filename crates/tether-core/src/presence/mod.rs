//! Ambient presence ("silence state") resolution.
//!
//! When no modal intervention is warranted, the delivery surface may still
//! show a faint indicator. Rules are checked in order; the first match wins:
//!
//! | # | Condition                                                  | Result                      |
//! |---|------------------------------------------------------------|-----------------------------|
//! | 1 | intent `ALLOW_CONTINUE`                                    | hidden (respectful)         |
//! | 2 | intent `observe_only`                                      | hidden (observational)      |
//! | 3 | intent `reduce_resistance`, category none/presence_signal  | low, slow pulse (fatigue)   |
//! | 4 | category `presence_signal`                                 | intensity, or low           |
//! | 5 | intent `restore_awareness`, category none/presence_signal  | medium, normal pulse        |
//! | 6 | otherwise                                                  | hidden                      |

use serde::{Deserialize, Serialize};

use crate::types::{Category, Intent, Presence, PresenceLevel, Pulse, Strategy};

/// Which rule produced a presence state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SilenceKind {
    Respectful,
    Observational,
    Fatigue,
    Signal,
    PreIntervention,
    Default,
}

/// Resolve the ambient indicator for a category and strategy.
pub fn resolve_presence(category: Option<Category>, strategy: Option<&Strategy>) -> Presence {
    resolve_with_kind(category, strategy).0
}

/// Like [`resolve_presence`], also reporting the matching rule.
pub fn resolve_with_kind(
    category: Option<Category>,
    strategy: Option<&Strategy>,
) -> (Presence, SilenceKind) {
    let intent = strategy.and_then(|s| s.intent);
    let intensity = strategy.and_then(|s| s.intensity);
    let ambient_slot = matches!(category, None | Some(Category::PresenceSignal));

    match (intent, category) {
        (Some(Intent::AllowContinue), _) => (Presence::hidden(), SilenceKind::Respectful),
        (Some(Intent::ObserveOnly), _) => (Presence::hidden(), SilenceKind::Observational),
        (Some(Intent::ReduceResistance), _) if ambient_slot => (
            Presence::pulsing(PresenceLevel::Low, Pulse::Slow),
            SilenceKind::Fatigue,
        ),
        (_, Some(Category::PresenceSignal)) => (
            Presence::shown(intensity.unwrap_or(PresenceLevel::Low)),
            SilenceKind::Signal,
        ),
        (Some(Intent::RestoreAwareness), None) => (
            Presence::pulsing(PresenceLevel::Medium, Pulse::Normal),
            SilenceKind::PreIntervention,
        ),
        _ => (Presence::hidden(), SilenceKind::Default),
    }
}
