//! The engine facade: one handle per host over config and stores.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::error::TetherResult;
use crate::nudge;
use crate::policy::ArmTable;
use crate::render::InterventionRenderer;
use crate::signals::{decide, extract_with_momentum};
use crate::store::{MessageSlot, ReactionLog};
use crate::types::{
    Category, ChatNudge, Decision, DeliveryMode, InterventionPayload, NudgeContext, RawTelemetry,
    ReactionEvent, ReactionRecord, Signals, Strategy,
};

/// Signals and the gate's decision for one telemetry tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub signals: Signals,
    pub decision: Decision,
}

/// Attention-risk engine bound to a host's message slot and reaction log.
pub struct AttentionEngine<M: MessageSlot, L: ReactionLog> {
    config: EngineConfig,
    log: Arc<L>,
    renderer: InterventionRenderer<M, L>,
}

impl<M: MessageSlot, L: ReactionLog> AttentionEngine<M, L> {
    /// Create an engine, validating the configuration first.
    pub fn new(config: EngineConfig, slot: Arc<M>, log: Arc<L>) -> TetherResult<Self> {
        config.validate()?;
        let renderer = InterventionRenderer::with_config(
            slot,
            Arc::clone(&log),
            config.copy.clone(),
            config.policy.clone(),
        );

        Ok(Self { config, log, renderer })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Extract signals from one tick and run them through the gate.
    pub fn evaluate(&self, raw: &RawTelemetry) -> Evaluation {
        let signals =
            extract_with_momentum(raw, &self.config.thresholds, self.config.momentum_scale);
        let decision = decide(&signals);
        Evaluation { signals, decision }
    }

    /// Render the payload for a strategy category.
    pub async fn render(
        &self,
        category: Option<Category>,
        strategy: Option<&Strategy>,
    ) -> InterventionPayload {
        self.renderer.render(category, strategy).await
    }

    /// Render with a provided clock reading and RNG.
    pub async fn render_with_rng<R: Rng + Send>(
        &self,
        category: Option<Category>,
        strategy: Option<&Strategy>,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> InterventionPayload {
        self.renderer.render_with_rng(category, strategy, now, rng).await
    }

    /// Compose a chat nudge, or `None` when the signals carry no risk.
    pub fn compose_nudge(&self, signals: &Signals, context: &NudgeContext) -> Option<ChatNudge> {
        nudge::compose_nudge(signals, context, &self.config.nudge)
    }

    pub fn compose_nudge_with_rng<R: Rng>(
        &self,
        rng: &mut R,
        signals: &Signals,
        context: &NudgeContext,
    ) -> Option<ChatNudge> {
        nudge::compose_nudge_with_rng(rng, signals, context, &self.config.nudge)
    }

    /// Append a user's reaction to a delivered intervention.
    pub async fn record_reaction(
        &self,
        event: ReactionEvent,
        mode: DeliveryMode,
    ) -> TetherResult<()> {
        debug!(%event, %mode, "Recording reaction");
        self.log.append(ReactionRecord::new(event, mode)).await
    }

    /// Current per-mode weights, highest first.
    ///
    /// An unreadable log yields the unseen weights.
    pub async fn mode_weights(&self) -> Vec<(DeliveryMode, f64)> {
        let history = match self.log.records().await {
            Ok(records) => records,
            Err(e) => {
                warn!("Reaction history unavailable: {}", e);
                Vec::new()
            }
        };
        ArmTable::from_history(&history).ranked(&self.config.policy)
    }
}
