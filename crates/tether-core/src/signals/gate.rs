//! Go/no-go gate over extracted signals.

use tracing::debug;

use crate::types::{Decision, DecisionMeta, Signals, Trigger};

/// Decide whether the user can keep scrolling undisturbed.
///
/// Intervention is needed when either risk flag is set and the cap allows it.
pub fn decide(signals: &Signals) -> Decision {
    let needs_processing = signals.at_risk() && signals.cap_ok;

    let trigger = if signals.attention_risk {
        Trigger::HardLimit
    } else if signals.approaching_risk {
        Trigger::SoftSignal
    } else {
        Trigger::None
    };

    debug!(%trigger, needs_processing, "Gate decision");

    Decision {
        is_safe_to_scroll: !needs_processing,
        trigger,
        meta: DecisionMeta {
            scroll_depth: signals.scroll_depth,
        },
    }
}
