//! Static copy libraries.

use crate::types::CopyCategory;

/// Copy for a crossed boundary.
pub const RED_ZONE_COPY: [&str; 6] = [
    "You've been scrolling for a while. Take one slow breath before deciding what's next.",
    "This feed will still be here. Is this how you want to spend the next few minutes?",
    "Pause. Notice where your attention has been.",
    "Your thumb has been busy. Let your eyes rest for a moment.",
    "Time to surface. What were you looking for when you started?",
    "A short break now makes the next session easier to end.",
];

/// Copy for the warning band.
pub const YELLOW_ZONE_COPY: [&str; 2] = [
    "Still with it? A good moment to check in with yourself.",
    "You're close to your usual limit. Want to wrap up soon?",
];

/// Rotation for plain closure cards.
pub const MICRO_CLOSURE_COPY: [&str; 4] = [
    "Good place to stop?",
    "Finish here and keep the good part.",
    "One more, or done for now?",
    "You've seen the highlights. Ready to close?",
];

/// Library entries for a copy category.
pub fn library_for(category: CopyCategory) -> &'static [&'static str] {
    match category {
        CopyCategory::RedZone => &RED_ZONE_COPY,
        CopyCategory::YellowZone => &YELLOW_ZONE_COPY,
    }
}
