//! Epsilon-greedy selection over delivery modes.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::stats::ArmTable;
use super::PolicyConfig;
use crate::types::{DeliveryMode, ReactionRecord};

/// Which branch of the policy produced a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionBranch {
    /// Too little history; uniform pick.
    ColdStart,
    /// Top-weighted arm.
    Exploit,
    /// Uniform pick regardless of weight.
    Explore,
}

/// A selected mode and how it was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeChoice {
    pub mode: DeliveryMode,
    pub branch: SelectionBranch,
}

/// Select a delivery mode using the thread-local RNG.
pub fn select_mode(history: &[ReactionRecord], config: &PolicyConfig) -> ModeChoice {
    let mut rng = rand::thread_rng();
    select_mode_with_rng(&mut rng, history, config)
}

/// Select a delivery mode with a provided RNG.
///
/// Useful for reproducible testing.
pub fn select_mode_with_rng<R: Rng>(
    rng: &mut R,
    history: &[ReactionRecord],
    config: &PolicyConfig,
) -> ModeChoice {
    if history.len() < config.cold_start_min_records {
        let mode = uniform(rng);
        debug!(records = history.len(), %mode, "Mode selection: cold start");
        return ModeChoice {
            mode,
            branch: SelectionBranch::ColdStart,
        };
    }

    let ranked = ArmTable::from_history(history).ranked(config);

    let roll: f64 = rng.gen();
    if roll < config.epsilon {
        let mode = uniform(rng);
        debug!(%mode, ?ranked, "Mode selection: explore");
        return ModeChoice {
            mode,
            branch: SelectionBranch::Explore,
        };
    }

    let mode = ranked[0].0;
    debug!(%mode, ?ranked, "Mode selection: exploit");
    ModeChoice {
        mode,
        branch: SelectionBranch::Exploit,
    }
}

fn uniform<R: Rng>(rng: &mut R) -> DeliveryMode {
    *DeliveryMode::ALL.choose(rng).unwrap_or(&DeliveryMode::Breath)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ReactionEvent;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn seeded_rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn clear_winner_history() -> Vec<ReactionRecord> {
        let mut history =
            vec![ReactionRecord::new(ReactionEvent::Completed, DeliveryMode::Breath); 8];
        history.extend(vec![ReactionRecord::new(ReactionEvent::Completed, DeliveryMode::Tap); 2]);
        history.extend(vec![ReactionRecord::new(ReactionEvent::Ignored, DeliveryMode::Tap); 6]);
        history
    }

    fn tally(choices: &[ModeChoice]) -> HashMap<DeliveryMode, usize> {
        let mut counts = HashMap::new();
        for choice in choices {
            *counts.entry(choice.mode).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_cold_start_uniform() {
        let config = PolicyConfig::default();
        let mut rng = seeded_rng();
        let history = vec![
            ReactionRecord::new(ReactionEvent::Completed, DeliveryMode::Breath),
            ReactionRecord::new(ReactionEvent::Completed, DeliveryMode::Breath),
        ];

        let choices: Vec<ModeChoice> = (0..10_000)
            .map(|_| select_mode_with_rng(&mut rng, &history, &config))
            .collect();

        assert!(choices.iter().all(|c| c.branch == SelectionBranch::ColdStart));
        let counts = tally(&choices);
        for mode in DeliveryMode::ALL {
            let share = *counts.get(&mode).unwrap_or(&0) as f64 / 10_000.0;
            assert!(
                (share - 1.0 / 3.0).abs() < 0.05,
                "{} share {} should be close to 1/3",
                mode,
                share
            );
        }
    }

    #[test]
    fn test_empty_history_is_cold_start() {
        let choice = select_mode_with_rng(&mut seeded_rng(), &[], &PolicyConfig::default());
        assert_eq!(choice.branch, SelectionBranch::ColdStart);
    }

    #[test]
    fn test_clear_winner() {
        let config = PolicyConfig::default();
        let mut rng = seeded_rng();
        let history = clear_winner_history();

        let choices: Vec<ModeChoice> = (0..10_000)
            .map(|_| select_mode_with_rng(&mut rng, &history, &config))
            .collect();

        // Exploit always returns the top arm.
        for choice in choices.iter().filter(|c| c.branch == SelectionBranch::Exploit) {
            assert_eq!(choice.mode, DeliveryMode::Breath);
        }

        let exploit_share = choices
            .iter()
            .filter(|c| c.branch == SelectionBranch::Exploit)
            .count() as f64
            / 10_000.0;
        assert!((exploit_share - 0.8).abs() < 0.02, "exploit share {}", exploit_share);

        let counts = tally(&choices);
        let strong = counts.get(&DeliveryMode::Breath).unwrap_or(&0)
            + counts.get(&DeliveryMode::Stillness).unwrap_or(&0);
        assert!(strong as f64 / 10_000.0 >= 0.8);
        let tap_share = *counts.get(&DeliveryMode::Tap).unwrap_or(&0) as f64 / 10_000.0;
        assert!(tap_share < 0.1, "tap share {}", tap_share);
    }

    #[test]
    fn test_zero_epsilon_is_greedy() {
        let config = PolicyConfig::default().with_epsilon(0.0);
        let mut rng = seeded_rng();
        let history = clear_winner_history();
        for _ in 0..100 {
            let choice = select_mode_with_rng(&mut rng, &history, &config);
            assert_eq!(choice.branch, SelectionBranch::Exploit);
            assert_eq!(choice.mode, DeliveryMode::Breath);
        }
    }

    #[test]
    fn test_full_epsilon_always_explores() {
        let config = PolicyConfig::default().with_epsilon(1.0);
        let mut rng = seeded_rng();
        let history = clear_winner_history();
        let choices: Vec<ModeChoice> = (0..300)
            .map(|_| select_mode_with_rng(&mut rng, &history, &config))
            .collect();
        assert!(choices.iter().all(|c| c.branch == SelectionBranch::Explore));
        assert_eq!(tally(&choices).len(), 3);
    }

    #[test]
    fn test_unseen_arm_beats_penalised_arms() {
        let config = PolicyConfig::default().with_epsilon(0.0);
        let history = vec![
            ReactionRecord::new(ReactionEvent::Ignored, DeliveryMode::Breath),
            ReactionRecord::new(ReactionEvent::Snoozed, DeliveryMode::Breath),
            ReactionRecord::new(ReactionEvent::Ignored, DeliveryMode::Tap),
        ];
        let choice = select_mode_with_rng(&mut seeded_rng(), &history, &config);
        assert_eq!(choice.mode, DeliveryMode::Stillness);
    }

    #[test]
    fn test_thread_rng_variant() {
        let choice = select_mode(&clear_winner_history(), &PolicyConfig::default());
        assert!(DeliveryMode::ALL.contains(&choice.mode));
    }
}
