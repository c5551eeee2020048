//! Per-arm reaction tallies.

use serde::{Deserialize, Serialize};

use super::PolicyConfig;
use crate::types::{DeliveryMode, ReactionEvent, ReactionRecord};

/// Outcome counts for one delivery mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmStats {
    pub completed: u32,
    pub ignored: u32,
    pub snoozed: u32,
}

impl ArmStats {
    pub fn record(&mut self, event: ReactionEvent) {
        match event {
            ReactionEvent::Completed => self.completed += 1,
            ReactionEvent::Ignored => self.ignored += 1,
            ReactionEvent::Snoozed => self.snoozed += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.completed + self.ignored + self.snoozed
    }

    /// Mean reward per observation; unseen arms get the optimistic weight.
    pub fn weight(&self, config: &PolicyConfig) -> f64 {
        let total = self.total();
        if total == 0 {
            return config.unseen_weight;
        }

        let score = self.completed as f64 * config.completed_reward
            - self.ignored as f64 * config.ignored_penalty
            - self.snoozed as f64 * config.snoozed_penalty;
        score / total as f64
    }
}

/// Tallies for all three arms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmTable {
    pub breath: ArmStats,
    pub tap: ArmStats,
    pub stillness: ArmStats,
}

impl ArmTable {
    pub fn from_history(history: &[ReactionRecord]) -> Self {
        let mut table = Self::default();
        for record in history {
            table.get_mut(record.mode).record(record.event);
        }
        table
    }

    pub fn get(&self, mode: DeliveryMode) -> &ArmStats {
        match mode {
            DeliveryMode::Breath => &self.breath,
            DeliveryMode::Tap => &self.tap,
            DeliveryMode::Stillness => &self.stillness,
        }
    }

    fn get_mut(&mut self, mode: DeliveryMode) -> &mut ArmStats {
        match mode {
            DeliveryMode::Breath => &mut self.breath,
            DeliveryMode::Tap => &mut self.tap,
            DeliveryMode::Stillness => &mut self.stillness,
        }
    }

    /// Arms with their weights, highest first. Ties keep canonical order.
    pub fn ranked(&self, config: &PolicyConfig) -> Vec<(DeliveryMode, f64)> {
        let mut ranked: Vec<(DeliveryMode, f64)> = DeliveryMode::ALL
            .iter()
            .map(|mode| (*mode, self.get(*mode).weight(config)))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}
