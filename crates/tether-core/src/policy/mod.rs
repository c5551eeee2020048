//! Adaptive delivery-mode policy.
//!
//! An epsilon-greedy bandit over the three delivery modes, learned from the
//! reaction log:
//!
//! ```text
//! reward(completed) = +1    reward(ignored) = -2    reward(snoozed) = -0.5
//! weight(arm)       = sum(reward) / observations(arm)   (1.0 when unseen)
//! ```
//!
//! With fewer than three usable records the selector explores uniformly.

mod bandit;
mod stats;

pub use bandit::{select_mode, select_mode_with_rng, ModeChoice, SelectionBranch};
pub use stats::{ArmStats, ArmTable};

use serde::{Deserialize, Serialize};

/// Configuration for the delivery-mode bandit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Probability of ignoring the weights and picking uniformly (default: 0.2).
    pub epsilon: f64,
    /// Usable records required before weights are trusted (default: 3).
    pub cold_start_min_records: usize,
    /// Reward per completion (default: 1.0).
    pub completed_reward: f64,
    /// Penalty per ignored intervention (default: 2.0).
    pub ignored_penalty: f64,
    /// Penalty per snooze (default: 0.5).
    pub snoozed_penalty: f64,
    /// Weight given to an arm with no observations (default: 1.0).
    pub unseen_weight: f64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            epsilon: 0.2,
            cold_start_min_records: 3,
            completed_reward: 1.0,
            ignored_penalty: 2.0,
            snoozed_penalty: 0.5,
            unseen_weight: 1.0,
        }
    }
}

impl PolicyConfig {
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }
}
