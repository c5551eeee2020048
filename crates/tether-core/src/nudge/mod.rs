//! Chat-style nudges built from the same risk signals as interventions.
//!
//! Tier selection:
//!
//! ```text
//! attention_risk && resistance >= 4  ─▶ firm
//! attention_risk                     ─▶ moderate
//! approaching_risk                   ─▶ gentle
//! neither                            ─▶ no nudge
//! ```

mod format;
mod templates;

pub use format::{fill_template, format_duration};
pub use templates::{pool_for, NudgeTemplate, FIRM_POOL, GENTLE_POOL, MODERATE_POOL};

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{ChatNudge, NudgeAction, NudgeContext, NudgeTier, Signals};

/// Configuration for chat nudges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NudgeConfig {
    /// Resistance score at which attention-risk nudges turn firm (default: 4).
    pub firm_resistance_threshold: f64,
}

impl Default for NudgeConfig {
    fn default() -> Self {
        Self {
            firm_resistance_threshold: 4.0,
        }
    }
}

/// Pick the tier for a set of signals, or `None` when there is no risk.
pub fn select_tier(signals: &Signals, config: &NudgeConfig) -> Option<NudgeTier> {
    if signals.attention_risk {
        if signals.escalation.resistance_score >= config.firm_resistance_threshold {
            Some(NudgeTier::Firm)
        } else {
            Some(NudgeTier::Moderate)
        }
    } else if signals.approaching_risk {
        Some(NudgeTier::Gentle)
    } else {
        None
    }
}

/// Compose a nudge using the thread-local RNG.
pub fn compose_nudge(
    signals: &Signals,
    context: &NudgeContext,
    config: &NudgeConfig,
) -> Option<ChatNudge> {
    let mut rng = rand::thread_rng();
    compose_nudge_with_rng(&mut rng, signals, context, config)
}

/// Compose a nudge with a provided RNG.
pub fn compose_nudge_with_rng<R: Rng>(
    rng: &mut R,
    signals: &Signals,
    context: &NudgeContext,
    config: &NudgeConfig,
) -> Option<ChatNudge> {
    let tier = select_tier(signals, config)?;
    let template = pool_for(tier).choose(rng)?;

    debug!(%tier, "Composing chat nudge");

    Some(ChatNudge {
        message: fill_template(template.message, context),
        actions: template
            .actions
            .iter()
            .filter(|(_, prompt)| !prompt.is_empty())
            .map(|(label, prompt)| NudgeAction {
                label: label.to_string(),
                prompt: prompt.to_string(),
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::extract;
    use crate::types::{EscalationState, RawTelemetry, Thresholds};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn signals(sec: f64, resistance: f64) -> Signals {
        let escalation = EscalationState::with_resistance(resistance);
        extract(&RawTelemetry::scrolling(sec).with_escalation(escalation), &Thresholds::default())
    }

    fn nudge_for(rng: &mut StdRng, signals: &Signals, context: &NudgeContext) -> Option<ChatNudge> {
        compose_nudge_with_rng(rng, signals, context, &NudgeConfig::default())
    }

    fn pool_messages(tier: NudgeTier) -> Vec<String> {
        pool_for(tier)
            .iter()
            .map(|t| fill_template(t.message, &NudgeContext::default()))
            .collect()
    }

    #[test]
    fn test_pool_sizes() {
        assert_eq!(GENTLE_POOL.len(), 3);
        assert_eq!(MODERATE_POOL.len(), 3);
        assert_eq!(FIRM_POOL.len(), 2);
    }

    #[test]
    fn test_no_risk_no_nudge() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(nudge_for(&mut rng, &signals(30.0, 9.0), &NudgeContext::default()).is_none());
    }

    #[test]
    fn test_tier_selection() {
        let config = NudgeConfig::default();
        assert_eq!(select_tier(&signals(200.0, 5.0), &config), Some(NudgeTier::Firm));
        assert_eq!(select_tier(&signals(200.0, 4.0), &config), Some(NudgeTier::Firm));
        assert_eq!(select_tier(&signals(200.0, 3.0), &config), Some(NudgeTier::Moderate));
        assert_eq!(select_tier(&signals(120.0, 9.0), &config), Some(NudgeTier::Gentle));
        assert_eq!(select_tier(&signals(10.0, 9.0), &config), None);
    }

    #[test]
    fn test_firm_always_from_firm_pool() {
        let mut rng = StdRng::seed_from_u64(3);
        let firm = pool_messages(NudgeTier::Firm);
        let s = signals(200.0, 5.0);
        for _ in 0..200 {
            let nudge = nudge_for(&mut rng, &s, &NudgeContext::default()).unwrap();
            assert!(firm.contains(&nudge.message), "{} not in firm pool", nudge.message);
        }
    }

    #[test]
    fn test_informational_actions_dropped() {
        let mut rng = StdRng::seed_from_u64(5);
        let s = signals(120.0, 0.0);
        for _ in 0..50 {
            let nudge = nudge_for(&mut rng, &s, &NudgeContext::default()).unwrap();
            assert!(!nudge.actions.is_empty());
            assert!(nudge.actions.iter().all(|a| !a.prompt.is_empty()));
        }
    }

    #[test]
    fn test_placeholders_filled() {
        let mut rng = StdRng::seed_from_u64(9);
        let context = NudgeContext {
            session_duration_ms: 7_200_000,
            total_reading_today_ms: 7_200_000,
            ..Default::default()
        };
        let nudge = nudge_for(&mut rng, &signals(200.0, 5.0), &context).unwrap();
        assert!(nudge.message.contains("2h0m"));
        assert!(!nudge.message.contains('{'));
    }

    #[test]
    fn test_thread_rng_variant() {
        let nudge = compose_nudge(
            &signals(120.0, 0.0),
            &NudgeContext::default(),
            &NudgeConfig::default(),
        );
        assert!(nudge.is_some());
    }
}
