//! Placeholder filling for nudge templates.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::types::NudgeContext;

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{(\w+)\}").unwrap());

/// Render a millisecond duration as `"{m}m"` or `"{h}h{m}m"`.
///
/// Minutes are floored and the remainder is always printed, so two hours is
/// `"2h0m"`.
pub fn format_duration(ms: u64) -> String {
    if ms == 0 {
        return "0m".to_string();
    }

    let minutes = ms / 60_000;
    if minutes < 60 {
        format!("{}m", minutes)
    } else {
        format!("{}h{}m", minutes / 60, minutes % 60)
    }
}

/// Replace `{key}` placeholders from the session context.
///
/// Unknown keys render as `"?"`.
pub fn fill_template(template: &str, context: &NudgeContext) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| match &caps[1] {
            "duration" => format_duration(context.session_duration_ms),
            "connectionCount" => context.connections.as_ref().map_or(0, Vec::len).to_string(),
            "pageCount" => context
                .pages_read_today
                .filter(|n| *n > 0)
                .unwrap_or(1)
                .to_string(),
            "totalTime" => format_duration(context.total_reading_today_ms),
            _ => "?".to_string(),
        })
        .into_owned()
}
