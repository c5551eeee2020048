//! Chat nudge template pools.

use crate::types::NudgeTier;

/// One template: message text with placeholders, plus suggestion chips.
#[derive(Debug, Clone, Copy)]
pub struct NudgeTemplate {
    pub message: &'static str,
    /// `(label, prompt)` pairs; an empty prompt is informational only.
    pub actions: &'static [(&'static str, &'static str)],
}

pub const GENTLE_POOL: [NudgeTemplate; 3] = [
    NudgeTemplate {
        message: "You've been reading for {duration}. Want a quick recap of what stood out?",
        actions: &[
            ("Recap this session", "Summarize the key ideas from what I've read this session."),
            ("Keep going", ""),
        ],
    },
    NudgeTemplate {
        message: "{duration} in, with {connectionCount} connections so far. Tie them together?",
        actions: &[
            ("Connect the dots", "Show how the ideas I've read today connect to each other."),
            ("Not now", ""),
        ],
    },
    NudgeTemplate {
        message: "Nice stretch of reading. That's page {pageCount} today.",
        actions: &[
            (
                "What's worth remembering?",
                "Pick the one idea from today's reading most worth remembering.",
            ),
            ("Thanks", ""),
        ],
    },
];

pub const MODERATE_POOL: [NudgeTemplate; 3] = [
    NudgeTemplate {
        message: "You've been at it for {duration} straight. A short break helps it sink in.",
        actions: &[
            ("Save my place", "Save where I am and give me a two-line summary to come back to."),
            ("Five more minutes", ""),
        ],
    },
    NudgeTemplate {
        message: "{totalTime} of reading today across {pageCount} pages. Time to step back?",
        actions: &[
            ("Wrap up today", "Give me a short wrap-up of everything I read today."),
            ("Quiz me", "Ask me three quick questions about what I just read."),
            ("Later", ""),
        ],
    },
    NudgeTemplate {
        message: "This session is {duration} long. What did you come here for?",
        actions: &[
            ("Remind me", "Help me recall what I was originally looking for this session."),
            ("Just browsing", ""),
        ],
    },
];

pub const FIRM_POOL: [NudgeTemplate; 2] = [
    NudgeTemplate {
        message: "{duration} without a break, and the reminders were skipped. Time to close out.",
        actions: &[
            ("Close with a summary", "Summarize this session in three bullets so I can stop here."),
            ("I know", ""),
        ],
    },
    NudgeTemplate {
        message: "You've read for {totalTime} today. This is a good place to stop.",
        actions: &[
            ("End session", "Help me end this session with one takeaway to keep."),
            ("Ignore", ""),
        ],
    },
];

/// Template pool for a tier.
pub fn pool_for(tier: NudgeTier) -> &'static [NudgeTemplate] {
    match tier {
        NudgeTier::Gentle => &GENTLE_POOL,
        NudgeTier::Moderate => &MODERATE_POOL,
        NudgeTier::Firm => &FIRM_POOL,
    }
}
