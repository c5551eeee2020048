//! Signal extraction and the decision gate.
//!
//! Both stages are pure and total:
//!
//! ```text
//! RawTelemetry + Thresholds ──extract──▶ Signals ──decide──▶ Decision
//! ```
//!
//! Classification bands for the default thresholds:
//!
//! ```text
//! 0s ─────────── 90s ─────────── 180s ───────────▶
//!     no risk     │ approaching   │ attention risk
//! ```

mod gate;

pub use gate::decide;

use tracing::debug;

use crate::types::{RawTelemetry, Signals, Thresholds};

/// Multiplier applied to the scroll threshold to get the momentum limit.
///
/// Kept at 1.0 so the momentum limit equals the hard limit. Hosts that want
/// momentum to trail the hard limit can raise it through
/// [`EngineConfig::momentum_scale`](crate::EngineConfig).
pub const DEFAULT_MOMENTUM_SCALE: f64 = 1.0;

/// Turn one tick of raw telemetry into [`Signals`].
pub fn extract(raw: &RawTelemetry, thresholds: &Thresholds) -> Signals {
    extract_with_momentum(raw, thresholds, DEFAULT_MOMENTUM_SCALE)
}

/// Same as [`extract`], with an explicit momentum scale.
pub fn extract_with_momentum(
    raw: &RawTelemetry,
    thresholds: &Thresholds,
    momentum_scale: f64,
) -> Signals {
    let scroll_sec = raw.continuous_scroll_sec;
    let escalation = raw.escalation.clone().unwrap_or_default();

    let attention_risk = scroll_sec >= thresholds.scroll_threshold_sec;
    let approaching_risk = !attention_risk && scroll_sec >= thresholds.presence_threshold_sec;
    let momentum_limit = thresholds.scroll_threshold_sec * momentum_scale;

    // A resistant user bypasses the cap so stronger measures stay reachable.
    let cap_ok = raw.intervention_count_recent < thresholds.intervention_cap
        || escalation.resistance_score >= thresholds.resistance_threshold;

    let signals = Signals {
        attention_risk,
        approaching_risk,
        cap_ok,
        scroll_depth: raw.scroll_px.unwrap_or(scroll_sec),
        is_high_momentum: scroll_sec >= momentum_limit,
        escalation,
        thresholds: *thresholds,
    };

    debug!(
        scroll_sec,
        attention_risk = signals.attention_risk,
        approaching_risk = signals.approaching_risk,
        cap_ok = signals.cap_ok,
        "Extracted signals"
    );

    signals
}
