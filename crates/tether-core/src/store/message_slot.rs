//! Single-slot store for the personalized message override.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::TetherResult;
use crate::types::PersonalizedMessage;

/// Single-value store holding at most one personalized message.
#[async_trait]
pub trait MessageSlot: Send + Sync {
    /// Replace the slot contents.
    async fn put(&self, message: PersonalizedMessage) -> TetherResult<()>;

    /// Remove and return the slot contents.
    ///
    /// Implementations must make the read and the clear atomic with respect
    /// to concurrent callers: the slot is empty when this returns, and two
    /// callers never both receive the same message.
    async fn take(&self) -> TetherResult<Option<PersonalizedMessage>>;

    /// Read the slot contents without clearing them.
    async fn peek(&self) -> TetherResult<Option<PersonalizedMessage>>;
}

/// Process-local slot guarded by an async mutex.
#[derive(Debug, Default)]
pub struct InMemoryMessageSlot {
    slot: Mutex<Option<PersonalizedMessage>>,
}

impl InMemoryMessageSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot that already holds a message.
    pub fn with_message(message: PersonalizedMessage) -> Self {
        Self {
            slot: Mutex::new(Some(message)),
        }
    }
}

#[async_trait]
impl MessageSlot for InMemoryMessageSlot {
    async fn put(&self, message: PersonalizedMessage) -> TetherResult<()> {
        *self.slot.lock().await = Some(message);
        Ok(())
    }

    async fn take(&self) -> TetherResult<Option<PersonalizedMessage>> {
        Ok(self.slot.lock().await.take())
    }

    async fn peek(&self) -> TetherResult<Option<PersonalizedMessage>> {
        Ok(self.slot.lock().await.clone())
    }
}
