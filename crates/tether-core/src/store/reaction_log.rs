//! Append-only reaction log.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::TetherResult;
use crate::types::ReactionRecord;

/// Append-only log of intervention outcomes.
#[async_trait]
pub trait ReactionLog: Send + Sync {
    /// Append one outcome.
    async fn append(&self, record: ReactionRecord) -> TetherResult<()>;

    /// All usable records, oldest first.
    async fn records(&self) -> TetherResult<Vec<ReactionRecord>>;
}

/// Process-local reaction log.
#[derive(Debug, Default)]
pub struct InMemoryReactionLog {
    records: RwLock<Vec<ReactionRecord>>,
}

impl InMemoryReactionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a log seeded with existing records.
    pub fn with_records(records: Vec<ReactionRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

#[async_trait]
impl ReactionLog for InMemoryReactionLog {
    async fn append(&self, record: ReactionRecord) -> TetherResult<()> {
        self.records.write().await.push(record);
        Ok(())
    }

    async fn records(&self) -> TetherResult<Vec<ReactionRecord>> {
        Ok(self.records.read().await.clone())
    }
}
