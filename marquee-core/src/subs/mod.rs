use serde::{Deserialize, Serialize};

mod parser;

/// One timed caption unit.
///
/// `start` and `end` are seconds, and both bounds are inclusive for
/// display purposes. `text` holds the caption body with the original
/// line breaks preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cue {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

pub use parser::parse;

/// Find the cue that should be on screen at `time`.
///
/// Bounds are inclusive on both ends. Cues are kept in file order and
/// overlaps are not resolved, so the first match wins. Lists are small
/// (a few hundred cues at most), a linear scan is fine.
pub fn active_cue(cues: &[Cue], time: f64) -> Option<&Cue> {
    cues.iter().find(|c| c.start <= time && time <= c.end)
}
