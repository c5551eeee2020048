//! tether-core - Core library for tether.
//!
//! This crate turns raw scroll telemetry into attention-risk signals, decides
//! whether the user can keep scrolling, and renders the intervention the
//! strategy layer asked for.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use tether_core::{
//!     AttentionEngine, Category, EngineConfig, InMemoryMessageSlot, InMemoryReactionLog,
//!     RawTelemetry,
//! };
//!
//! let engine = AttentionEngine::new(
//!     EngineConfig::default(),
//!     Arc::new(InMemoryMessageSlot::new()),
//!     Arc::new(InMemoryReactionLog::new()),
//! )?;
//!
//! let evaluation = engine.evaluate(&RawTelemetry::scrolling(200.0));
//! if !evaluation.decision.is_safe_to_scroll {
//!     let payload = engine.render(Some(Category::HardInterrupt), None).await;
//! }
//! ```

pub mod config;
pub mod copy;
pub mod engine;
pub mod error;
pub mod nudge;
pub mod policy;
pub mod presence;
pub mod render;
pub mod signals;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use config::EngineConfig;
pub use engine::{AttentionEngine, Evaluation};
pub use error::{ErrorCode, TetherError, TetherResult};
pub use policy::{ModeChoice, PolicyConfig, SelectionBranch};
pub use render::InterventionRenderer;
pub use store::{InMemoryMessageSlot, InMemoryReactionLog, MessageSlot, ReactionLog};
pub use types::{
    Category, ChatNudge, CopyCategory, Decision, DeliveryMode, EscalationState, Intent,
    InterventionPayload, NudgeContext, PersonalizedMessage, PresenceLevel, RawTelemetry,
    ReactionEvent, ReactionRecord, Signals, Strategy, Thresholds, Trigger,
};
