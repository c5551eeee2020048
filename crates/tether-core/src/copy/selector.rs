//! Copy selection with the single-use personalized override.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::library::library_for;
use super::CopyConfig;
use crate::store::MessageSlot;
use crate::types::CopyCategory;

/// Where the chosen text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CopySource {
    Personalized,
    Library,
}

/// Chosen intervention text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyChoice {
    pub text: String,
    pub source: CopySource,
}

/// Resolve the intervention text for `category`.
///
/// The slot is taken exactly once per call. A fresh message is returned and
/// thereby consumed; an expired one is discarded and the library is used. A
/// failing slot is logged and treated as empty.
pub async fn select_copy<S, R>(
    slot: &S,
    category: CopyCategory,
    config: &CopyConfig,
    now: DateTime<Utc>,
    rng: &mut R,
) -> CopyChoice
where
    S: MessageSlot + ?Sized,
    R: Rng + Send,
{
    match slot.take().await {
        Ok(Some(message)) if message.is_fresh(now, config.ttl()) => {
            info!(%category, "Using personalized message");
            return CopyChoice {
                text: message.text,
                source: CopySource::Personalized,
            };
        }
        Ok(Some(message)) => {
            debug!(created_at = %message.created_at, "Discarded expired personalized message");
        }
        Ok(None) => {}
        Err(e) => {
            warn!("Personalized message slot unavailable: {}", e);
        }
    }

    let library = library_for(category);
    let text = library.choose(rng).copied().unwrap_or_default();
    CopyChoice {
        text: text.to_string(),
        source: CopySource::Library,
    }
}
