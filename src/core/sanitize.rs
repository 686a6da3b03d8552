// src/core/sanitize.rs
//
// Named predicates for the string-contains classification rules.
// The literals live in config::consts; nothing else should inline them.

use crate::config::consts::{
    LIVE_MARKER, OFF_SLOT_MARKERS, PLACEHOLDER, UNRESOLVED_FLAG, VIDEO_REQUEST_MARKER,
};

/// Empty, whitespace-only, or exactly "-" once trimmed.
pub fn is_placeholder(s: &str) -> bool {
    let t = s.trim();
    t.is_empty() || t == PLACEHOLDER
}

pub fn has_value(s: &str) -> bool {
    !is_placeholder(s)
}

/// Time-slot label marking a non-working row (week off, inactive, calls).
pub fn is_off_slot(slot: &str) -> bool {
    OFF_SLOT_MARKERS.iter().any(|m| slot.contains(m))
}

pub fn is_live(s: &str) -> bool {
    s.contains(LIVE_MARKER)
}

/// Case-sensitive.
pub fn is_video_request(sub_request: &str) -> bool {
    sub_request.contains(VIDEO_REQUEST_MARKER)
}

/// Lower-cased, then compared exactly: "No" and "NO" match, " no" does not.
pub fn is_unresolved(flag: &str) -> bool {
    flag.to_lowercase() == UNRESOLVED_FLAG
}
