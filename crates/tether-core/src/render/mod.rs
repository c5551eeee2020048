//! Intervention rendering.
//!
//! Maps the strategy layer's category onto a delivery-ready payload:
//!
//! ```text
//! gentle_reflection ─▶ micro_closure  (yellow-zone copy, two actions, low presence)
//! micro_closure     ─▶ micro_closure  (rotating closure copy, two actions)
//! hard_interrupt    ─▶ hard_interrupt (bandit mode + zone copy, no actions)
//! presence_signal   ─▶ presence_signal
//! none / unknown    ─▶ none
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use crate::copy::{select_copy, CopyConfig, MICRO_CLOSURE_COPY};
use crate::policy::{select_mode_with_rng, PolicyConfig};
use crate::presence::resolve_presence;
use crate::store::{MessageSlot, ReactionLog};
use crate::types::{
    Category, ClosureVariant, CopyCategory, HardInterruptPayload, Intent, InterventionPayload,
    MicroClosurePayload, PayloadAction, PresenceLevel, ReactionRecord, Strategy,
};

/// Builds payloads from categories, reading the host's stores.
pub struct InterventionRenderer<M: MessageSlot, L: ReactionLog> {
    slot: Arc<M>,
    log: Arc<L>,
    copy: CopyConfig,
    policy: PolicyConfig,
    closure_cursor: AtomicUsize,
}

impl<M: MessageSlot, L: ReactionLog> InterventionRenderer<M, L> {
    /// Create a renderer with default copy and policy settings.
    pub fn new(slot: Arc<M>, log: Arc<L>) -> Self {
        Self::with_config(slot, log, CopyConfig::default(), PolicyConfig::default())
    }

    pub fn with_config(slot: Arc<M>, log: Arc<L>, copy: CopyConfig, policy: PolicyConfig) -> Self {
        Self {
            slot,
            log,
            copy,
            policy,
            closure_cursor: AtomicUsize::new(0),
        }
    }

    /// Render with a freshly seeded RNG and the current time.
    pub async fn render(
        &self,
        category: Option<Category>,
        strategy: Option<&Strategy>,
    ) -> InterventionPayload {
        let mut rng = StdRng::from_entropy();
        self.render_with_rng(category, strategy, Utc::now(), &mut rng).await
    }

    /// Render with a provided clock reading and RNG.
    ///
    /// Useful for reproducible testing.
    pub async fn render_with_rng<R: Rng + Send>(
        &self,
        category: Option<Category>,
        strategy: Option<&Strategy>,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> InterventionPayload {
        let payload = match category {
            Some(Category::GentleReflection) => self.gentle_reflection(strategy, now, rng).await,
            Some(Category::MicroClosure) => self.micro_closure(),
            Some(Category::HardInterrupt) => self.hard_interrupt(strategy, now, rng).await,
            Some(Category::PresenceSignal) => {
                InterventionPayload::PresenceSignal(resolve_presence(category, strategy))
            }
            None => InterventionPayload::None,
        };

        debug!(category = ?category, payload = payload.type_name(), "Rendered intervention");
        payload
    }

    async fn gentle_reflection<R: Rng + Send>(
        &self,
        strategy: Option<&Strategy>,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> InterventionPayload {
        let copy =
            select_copy(self.slot.as_ref(), CopyCategory::YellowZone, &self.copy, now, rng).await;

        // The card carries a faint ambient cue, capped at low intensity.
        let low = strategy.copied().unwrap_or_default().intensity(PresenceLevel::Low);
        let presence = resolve_presence(Some(Category::PresenceSignal), Some(&low));

        InterventionPayload::MicroClosure(MicroClosurePayload {
            variant: ClosureVariant::OneTap,
            text: copy.text,
            actions: PayloadAction::closure_pair(),
            presence: Some(presence),
        })
    }

    fn micro_closure(&self) -> InterventionPayload {
        let index = self.closure_cursor.fetch_add(1, Ordering::Relaxed) % MICRO_CLOSURE_COPY.len();

        InterventionPayload::MicroClosure(MicroClosurePayload {
            variant: ClosureVariant::OneTap,
            text: MICRO_CLOSURE_COPY[index].to_string(),
            actions: PayloadAction::closure_pair(),
            presence: None,
        })
    }

    async fn hard_interrupt<R: Rng + Send>(
        &self,
        strategy: Option<&Strategy>,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> InterventionPayload {
        let history = self.history().await;
        let choice = select_mode_with_rng(rng, &history, &self.policy);

        let zone = if strategy.is_some_and(|s| s.is(Intent::RestoreAwareness)) {
            CopyCategory::YellowZone
        } else {
            CopyCategory::RedZone
        };
        let copy = select_copy(self.slot.as_ref(), zone, &self.copy, now, rng).await;

        InterventionPayload::HardInterrupt(HardInterruptPayload {
            mode: choice.mode,
            text: copy.text,
        })
    }

    async fn history(&self) -> Vec<ReactionRecord> {
        match self.log.records().await {
            Ok(records) => records,
            Err(e) => {
                warn!("Reaction history unavailable, using cold start: {}", e);
                Vec::new()
            }
        }
    }
}
