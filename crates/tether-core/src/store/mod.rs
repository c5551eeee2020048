//! Storage seams owned by the host platform.
//!
//! The engine reads the reaction log and takes the personalized-message slot;
//! it never writes to the log except through
//! [`AttentionEngine::record_reaction`](crate::AttentionEngine::record_reaction)
//! on behalf of the delivery surface. In-memory implementations are provided
//! for tests and single-process hosts.

mod message_slot;
mod reaction_log;

pub use message_slot::{InMemoryMessageSlot, MessageSlot};
pub use reaction_log::{InMemoryReactionLog, ReactionLog};
