//! Core data model for the marquee player: timed caption cues,
//! lenient SRT/WebVTT parsing, and display helpers.

pub mod clean_cue;
pub mod subs;
pub mod timecode;

pub use subs::{active_cue, Cue};
