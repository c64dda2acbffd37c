//! Headless playback controller for the marquee player.
//!
//! The controller owns all player-facing state and never touches a
//! media element directly: the host feeds it [`MediaEvent`]s from the
//! underlying playback primitive and user input, and applies the
//! [`MediaCommand`]s it hands back. All operations are synchronous and
//! in-memory; none of them block or fail.

pub mod command;
pub mod controls;
mod player;
pub mod rate;
pub mod settings;

pub use command::{MediaCommand, MediaEvent, MediaSource};
pub use controls::ControlsVisibility;
pub use player::Player;
pub use rate::PlaybackRate;
pub use settings::{SettingsPanel, SubPanel, SubtitlePosition};
